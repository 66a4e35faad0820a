//! Route definitions for the calendar generation lifecycle.
//!
//! ```text
//! POST   /                 create_generation
//! GET    /                 list_generations
//! GET    /{id}             get_generation
//! DELETE /{id}             delete_generation
//! POST   /{id}/preview     start_preview
//! POST   /{id}/purchase    purchase
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::generations;
use crate::state::AppState;

/// Routes nested under `/generations`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(generations::create_generation).get(generations::list_generations),
        )
        .route(
            "/{id}",
            get(generations::get_generation).delete(generations::delete_generation),
        )
        .route("/{id}/preview", post(generations::start_preview))
        .route("/{id}/purchase", post(generations::purchase))
}
