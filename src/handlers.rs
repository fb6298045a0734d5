use crate::calendar;
use crate::errors::AppError;
use crate::input;
use crate::models::{
    ActiveView, CalendarCursor, CalendarResponse, ChatRequest, ChatResponse, MetricRequest,
    Metrics, NotesRequest, NotesResponse, ShiftRequest, StateResponse, TaskAddRequest,
    TaskIdRequest, TasksResponse, ViewRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = *state.view.lock().await;
    let metrics = state.metrics.lock().await.clone();
    Html(render_index(view, &metrics))
}

pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    let view = *state.view.lock().await;
    let metrics = state.metrics.lock().await.clone();
    let notes = state.notes.lock().await.clone();
    let tasks = state.tasks.lock().await.list().to_vec();
    let cursor = *state.calendar.lock().await;
    let chat = state.chat.lock().await.clone();

    Json(StateResponse {
        view,
        metrics,
        notes,
        tasks,
        calendar: calendar_response(cursor),
        chat,
    })
}

pub async fn set_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Json<ActiveView> {
    let mut view = state.view.lock().await;
    *view = payload.view;
    Json(*view)
}

pub async fn get_metrics(State(state): State<AppState>) -> Json<Metrics> {
    Json(state.metrics.lock().await.clone())
}

pub async fn update_metric(
    State(state): State<AppState>,
    Json(payload): Json<MetricRequest>,
) -> Result<Json<Metrics>, AppError> {
    let field = payload.field.trim();
    if field != "steps" && field != "heart_rate" {
        return Err(AppError::bad_request(
            "field must be 'steps' or 'heart_rate'",
        ));
    }

    let mut metrics = state.metrics.lock().await;
    if field == "steps" {
        input::apply(&mut metrics.steps, payload.value);
    } else {
        input::apply(&mut metrics.heart_rate, payload.value);
    }

    Ok(Json(metrics.clone()))
}

pub async fn get_notes(State(state): State<AppState>) -> Json<NotesResponse> {
    Json(NotesResponse {
        text: state.notes.lock().await.clone(),
    })
}

pub async fn update_notes(
    State(state): State<AppState>,
    Json(payload): Json<NotesRequest>,
) -> Json<NotesResponse> {
    let mut notes = state.notes.lock().await;
    *notes = payload.text;
    Json(NotesResponse { text: notes.clone() })
}

pub async fn get_tasks(State(state): State<AppState>) -> Json<TasksResponse> {
    Json(TasksResponse {
        tasks: state.tasks.lock().await.list().to_vec(),
    })
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskAddRequest>,
) -> Json<TasksResponse> {
    let mut tasks = state.tasks.lock().await;
    tasks.add(&payload.text);
    Json(TasksResponse {
        tasks: tasks.list().to_vec(),
    })
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Json<TasksResponse> {
    let mut tasks = state.tasks.lock().await;
    tasks.toggle(payload.id);
    Json(TasksResponse {
        tasks: tasks.list().to_vec(),
    })
}

pub async fn remove_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskIdRequest>,
) -> Json<TasksResponse> {
    let mut tasks = state.tasks.lock().await;
    tasks.remove(payload.id);
    Json(TasksResponse {
        tasks: tasks.list().to_vec(),
    })
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<CalendarResponse> {
    let cursor = *state.calendar.lock().await;
    Json(calendar_response(cursor))
}

pub async fn shift_calendar(
    State(state): State<AppState>,
    Json(payload): Json<ShiftRequest>,
) -> Json<CalendarResponse> {
    let mut cursor = state.calendar.lock().await;
    *cursor = calendar::shift(*cursor, payload.delta);
    Json(calendar_response(*cursor))
}

pub async fn get_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    Json(ChatResponse {
        messages: state.chat.lock().await.clone(),
    })
}

/// Resolves once the outbound call has resolved; the returned history is the
/// then-current one, which may include messages from concurrent sends.
pub async fn send_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    state.chat_client.send(&state.chat, &payload.message).await;
    Json(ChatResponse {
        messages: state.chat.lock().await.clone(),
    })
}

fn calendar_response(cursor: CalendarCursor) -> CalendarResponse {
    CalendarResponse {
        year: cursor.year,
        month0: cursor.month0,
        label: calendar::month_label(cursor),
        weekdays: calendar::WEEKDAYS,
        cells: calendar::build_grid(cursor.year, cursor.month0).collect(),
    }
}
