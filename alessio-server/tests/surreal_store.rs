//! SurrealDB store round trips on the in-memory engine
//! Run: cargo test -p alessio-server --test surreal_store

use std::sync::Arc;
use std::time::Duration;

use alessio_server::db::repository::{MenuItemRepository, ReviewRepository};
use alessio_server::db::{DocumentStore, Filter, Gateway, SurrealStore};
use serde_json::json;
use shared::models::{MenuItem, Review};

async fn memory_store() -> SurrealStore {
    SurrealStore::connect("mem://", "test", "test", None)
        .await
        .unwrap()
}

#[tokio::test]
async fn menu_item_round_trip_has_no_identifier() {
    let gateway = Gateway::new(Arc::new(memory_store().await));
    let item = MenuItem::new("Burrata", 12.5, "Antipasti")
        .with_description("Puglia, cherry tomatoes")
        .featured();

    gateway.create_document("menuitem", &item).await.unwrap();

    let docs = gateway
        .get_documents("menuitem", &Filter::new(), None)
        .await
        .unwrap();
    assert_eq!(docs.len(), 1);
    assert!(!docs[0].contains_key("id"));
    assert!(!docs[0].contains_key("_id"));
    assert_eq!(docs[0]["name"], json!("Burrata"));
    assert!(docs[0]["created_at"].is_i64());

    let menu = MenuItemRepository::new(gateway).find_all().await.unwrap();
    assert_eq!(menu, vec![item]);
}

#[tokio::test]
async fn featured_filter_and_limit() {
    let gateway = Gateway::new(Arc::new(memory_store().await));
    let repo = MenuItemRepository::new(gateway);

    for i in 0..5 {
        let mut item = MenuItem::new(format!("Pizza {i}"), 10.0, "Pizza");
        item.featured = i % 2 == 0;
        repo.create(&item).await.unwrap();
    }

    let featured = repo.find_featured(2).await.unwrap();
    assert_eq!(featured.len(), 2);
    assert!(featured.iter().all(|item| item.featured));

    let all_featured = repo.find_featured(8).await.unwrap();
    assert_eq!(all_featured.len(), 3);
}

#[tokio::test]
async fn reviews_come_back_newest_first() {
    let gateway = Gateway::new(Arc::new(memory_store().await));
    let repo = ReviewRepository::new(gateway);

    for name in ["Sofia", "Luca", "Mia"] {
        repo.create(&Review::new(name, 5, "Bravissimi")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let recent = repo.find_recent(2).await.unwrap();
    let names: Vec<&str> = recent.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Mia", "Luca"]);
}

#[tokio::test]
async fn snake_case_seed_documents_are_accepted() {
    let store = memory_store().await;
    store
        .db()
        .query("CREATE menuitem CONTENT { name: 'Arrabbiata', price: 15, category: 'Pasta', is_vegan: true, is_spicy: true }")
        .await
        .unwrap();

    let menu = MenuItemRepository::new(Gateway::new(Arc::new(store)))
        .find_all()
        .await
        .unwrap();
    assert_eq!(menu.len(), 1);
    assert!(menu[0].is_vegan);
    assert!(menu[0].is_spicy);
}

#[tokio::test]
async fn collections_are_listed() {
    let store = memory_store().await;
    store
        .insert("review", json!({"name": "Sofia"}).as_object().unwrap().clone())
        .await
        .unwrap();
    store
        .insert("newsletter", json!({"email": "a@b.it"}).as_object().unwrap().clone())
        .await
        .unwrap();

    let names = store.collections().await.unwrap();
    assert_eq!(names, vec!["newsletter", "review"]);
}
