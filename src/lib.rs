pub mod app;
pub mod calendar;
pub mod chat;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod input;
pub mod models;
pub mod state;
pub mod tasks;
pub mod ui;

pub use app::router;
pub use chat::ChatClient;
pub use config::ChatConfig;
pub use state::AppState;
