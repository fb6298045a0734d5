use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    #[default]
    Home,
    Calendar,
    Notes,
    Tasks,
    Chat,
}

impl ActiveView {
    pub fn as_str(self) -> &'static str {
        match self {
            ActiveView::Home => "home",
            ActiveView::Calendar => "calendar",
            ActiveView::Notes => "notes",
            ActiveView::Tasks => "tasks",
            ActiveView::Chat => "chat",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// Month shown by the calendar view. `month0` is zero-based (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCursor {
    pub year: i32,
    pub month0: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub steps: String,
    pub heart_rate: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: ActiveView,
}

#[derive(Debug, Deserialize)]
pub struct MetricRequest {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskAddRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TaskIdRequest {
    pub id: u64,
}

#[derive(Debug, Deserialize)]
pub struct ShiftRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month0: u32,
    pub label: String,
    pub weekdays: [&'static str; 7],
    /// Leading blanks are `null`, day cells carry the day number.
    pub cells: Vec<Option<u32>>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub view: ActiveView,
    pub metrics: Metrics,
    pub notes: String,
    pub tasks: Vec<Task>,
    pub calendar: CalendarResponse,
    pub chat: Vec<ChatMessage>,
}
