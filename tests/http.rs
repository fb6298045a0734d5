use axum::{routing::post, Json, Router};
use fitness_app::calendar;
use fitness_app::chat::FALLBACK_REPLY;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Metrics {
    steps: String,
    heart_rate: String,
}

#[derive(Debug, Deserialize)]
struct Task {
    id: u64,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    tasks: Vec<Task>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    text: String,
    sender: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    year: i32,
    month0: u32,
    label: String,
    weekdays: Vec<String>,
    cells: Vec<Option<u32>>,
}

#[derive(Debug, Deserialize)]
struct StateResponse {
    view: String,
    metrics: Metrics,
    notes: String,
    tasks: Vec<Task>,
    chat: Vec<ChatMessage>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

// A bound-then-dropped port: connecting is refused immediately, so chat
// requests against it take the failure path without waiting on a timeout.
fn unroutable_chat_url() -> String {
    format!("http://127.0.0.1:{}/chat", pick_free_port())
}

async fn spawn_chat_stub() -> String {
    let app = Router::new().route(
        "/chat",
        post(|Json(body): Json<serde_json::Value>| async move {
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or_default();
            Json(serde_json::json!({ "response": format!("Coach says: {message}") }))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind chat stub");
    let addr = listener.local_addr().expect("chat stub addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/chat")
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(chat_url: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_fitness_app"))
        .env("PORT", port.to_string())
        .env("CHAT_API_URL", chat_url)
        .env("CHAT_API_KEY", "test-key")
        .env("CHAT_TIMEOUT_SECS", "2")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server(&unroutable_chat_url()).await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_state(client: &Client, base_url: &str) -> StateResponse {
    client
        .get(format!("{base_url}/api/state"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_view_switch_preserves_other_slices() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/notes", server.base_url))
        .json(&serde_json::json!({ "text": "leg day went well" }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "refill water bottle" }))
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/api/view", server.base_url))
        .json(&serde_json::json!({ "view": "calendar" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let state = get_state(&client, &server.base_url).await;
    assert_eq!(state.view, "calendar");
    assert_eq!(state.notes, "leg day went well");
    assert!(state
        .tasks
        .iter()
        .any(|task| task.text == "refill water bottle"));
}

#[tokio::test]
async fn http_unknown_view_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/view", server.base_url))
        .json(&serde_json::json!({ "view": "settings" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn http_task_add_toggle_remove() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: TasksResponse = client
        .get(format!("{}/api/tasks", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let after_add: TasksResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "  evening walk  " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after_add.tasks.len(), before.tasks.len() + 1);

    let task = after_add.tasks.last().expect("task present");
    assert_eq!(task.text, "evening walk");
    assert!(!task.completed);
    let id = task.id;

    let toggled: TasksResponse = client
        .post(format!("{}/api/tasks/toggle", server.base_url))
        .json(&serde_json::json!({ "id": id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let toggled_task = toggled.tasks.iter().find(|t| t.id == id).expect("task");
    assert!(toggled_task.completed);

    let removed: TasksResponse = client
        .post(format!("{}/api/tasks/remove", server.base_url))
        .json(&serde_json::json!({ "id": id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(removed.tasks.iter().all(|t| t.id != id));

    let removed_again: TasksResponse = client
        .post(format!("{}/api/tasks/remove", server.base_url))
        .json(&serde_json::json!({ "id": id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(removed_again.tasks.len(), removed.tasks.len());
}

#[tokio::test]
async fn http_whitespace_task_is_not_added() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: TasksResponse = client
        .get(format!("{}/api/tasks", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let after: TasksResponse = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "   " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(after.tasks.len(), before.tasks.len());
}

#[tokio::test]
async fn http_metric_input_is_filtered() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let set = |value: &str| {
        let client = client.clone();
        let url = format!("{}/api/metrics", server.base_url);
        let body = serde_json::json!({ "field": "steps", "value": value });
        async move {
            client
                .post(url)
                .json(&body)
                .send()
                .await
                .unwrap()
                .json::<Metrics>()
                .await
                .unwrap()
        }
    };

    let metrics = set("123").await;
    assert_eq!(metrics.steps, "123");

    let metrics = set("12a3").await;
    assert_eq!(metrics.steps, "123");

    let metrics = set("").await;
    assert_eq!(metrics.steps, "");

    let response = client
        .post(format!("{}/api/metrics", server.base_url))
        .json(&serde_json::json!({ "field": "stride", "value": "1" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let metrics: Metrics = client
        .get(format!("{}/api/metrics", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(metrics.heart_rate, "");
}

#[tokio::test]
async fn http_calendar_shift_rolls_over_years() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let start: CalendarResponse = client
        .get(format!("{}/api/calendar", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(start.weekdays.len(), 7);
    let expected = calendar::first_weekday_of_month(start.year, start.month0)
        + calendar::days_in_month(start.year, start.month0);
    assert_eq!(start.cells.len() as u32, expected);
    assert!(!start.label.is_empty());

    let forward: CalendarResponse = client
        .post(format!("{}/api/calendar/shift", server.base_url))
        .json(&serde_json::json!({ "delta": 12 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(forward.year, start.year + 1);
    assert_eq!(forward.month0, start.month0);

    let back: CalendarResponse = client
        .post(format!("{}/api/calendar/shift", server.base_url))
        .json(&serde_json::json!({ "delta": -12 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(back.year, start.year);
    assert_eq!(back.month0, start.month0);
}

#[tokio::test]
async fn http_chat_failure_appends_fallback() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server(&unroutable_chat_url()).await;
    let client = Client::new();

    let response: ChatResponse = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&serde_json::json!({ "message": "hello" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.messages.len(), 2);
    assert_eq!(response.messages[0].sender, "user");
    assert_eq!(response.messages[0].text, "hello");
    assert_eq!(response.messages[1].sender, "bot");
    assert_eq!(response.messages[1].text, FALLBACK_REPLY);
}

#[tokio::test]
async fn http_chat_roundtrips_remote_reply() {
    let _guard = TEST_LOCK.lock().await;
    let chat_url = spawn_chat_stub().await;
    let server = spawn_server(&chat_url).await;
    let client = Client::new();

    let response: ChatResponse = client
        .post(format!("{}/api/chat", server.base_url))
        .json(&serde_json::json!({ "message": "how far today?" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(response.messages.len(), 2);
    assert_eq!(response.messages[0].sender, "user");
    assert_eq!(response.messages[0].text, "how far today?");
    assert_eq!(response.messages[1].sender, "bot");
    assert_eq!(response.messages[1].text, "Coach says: how far today?");

    let state = get_state(&client, &server.base_url).await;
    assert_eq!(state.chat.len(), 2);
    assert_eq!(state.metrics.steps, "");
}

#[tokio::test]
async fn http_index_serves_shell() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Fitness App"));
    assert!(body.contains("data-view=\"chat\""));
}
