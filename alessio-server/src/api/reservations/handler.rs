//! Reservation API Handlers

use axum::{Json, extract::State};
use shared::models::Reservation;

use crate::api::Ack;
use crate::core::ServerState;
use crate::utils::ValidatedJson;

/// POST /api/reservations
///
/// No availability check; the request is stored for staff to confirm.
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(reservation): ValidatedJson<Reservation>,
) -> Json<Ack> {
    if let Err(e) = state.reservations().create(&reservation).await {
        tracing::warn!(
            collection = "reservation",
            guests = reservation.guests,
            date = %reservation.date,
            error = %e,
            "Reservation not persisted"
        );
    }
    Json(Ack::OK)
}
