use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/view", post(handlers::set_view))
        .route("/api/metrics", get(handlers::get_metrics).post(handlers::update_metric))
        .route("/api/notes", get(handlers::get_notes).post(handlers::update_notes))
        .route("/api/tasks", get(handlers::get_tasks).post(handlers::add_task))
        .route("/api/tasks/toggle", post(handlers::toggle_task))
        .route("/api/tasks/remove", post(handlers::remove_task))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/shift", post(handlers::shift_calendar))
        .route("/api/chat", get(handlers::get_chat).post(handlers::send_chat))
        .with_state(state)
}
