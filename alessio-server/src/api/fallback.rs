//! Static data served when the store cannot answer

use shared::models::{MenuItem, Review};

/// The three-dish sample menu
pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Margherita", 14.0, "Pizza")
            .with_description("San Marzano tomato, fior di latte, basil")
            .with_image("https://images.unsplash.com/photo-1542281286-9e0a16bb7366")
            .featured(),
        MenuItem::new("Tagliatelle al Ragù", 22.0, "Pasta")
            .with_description("Slow-cooked beef ragù, Parmigiano Reggiano")
            .with_image("https://images.unsplash.com/photo-1525755662778-989d0524087e"),
        MenuItem::new("Tiramisu", 10.0, "Dolci")
            .with_description("Classic mascarpone, espresso, cocoa")
            .with_image("https://images.unsplash.com/photo-1604908554020-0e3c98b03b00"),
    ]
}

pub fn sample_reviews() -> Vec<Review> {
    vec![
        Review::new("Sofia", 5, "The best cacio e pepe I've had outside Rome.").with_source("Google"),
        Review::new("Luca", 5, "Warm atmosphere and impeccable service.").with_source("Yelp"),
        Review::new("Mia", 4, "Negroni was perfect, pizza crust spot on.").with_source("OpenTable"),
    ]
}
