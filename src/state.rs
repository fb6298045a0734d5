use crate::calendar;
use crate::chat::{ChatClient, ChatHistory};
use crate::models::{ActiveView, CalendarCursor, Metrics};
use crate::tasks::TaskStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// One owner per state slice; switching views never touches the other
/// slices, and the chat await never blocks their mutation.
#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<ActiveView>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub notes: Arc<Mutex<String>>,
    pub tasks: Arc<Mutex<TaskStore>>,
    pub calendar: Arc<Mutex<CalendarCursor>>,
    pub chat: ChatHistory,
    pub chat_client: ChatClient,
}

impl AppState {
    pub fn new(chat_client: ChatClient) -> Self {
        Self {
            view: Arc::new(Mutex::new(ActiveView::default())),
            metrics: Arc::new(Mutex::new(Metrics::default())),
            notes: Arc::new(Mutex::new(String::new())),
            tasks: Arc::new(Mutex::new(TaskStore::default())),
            calendar: Arc::new(Mutex::new(calendar::current_cursor())),
            chat: Arc::new(Mutex::new(Vec::new())),
            chat_client,
        }
    }
}
