use crate::models::{ActiveView, Metrics};

pub fn render_index(view: ActiveView, metrics: &Metrics) -> String {
    INDEX_HTML
        .replace("{{VIEW}}", view.as_str())
        .replace("{{STEPS}}", &metrics.steps)
        .replace("{{HEART_RATE}}", &metrics.heart_rate)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Fitness App</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe3f5;
      --ink: #24313c;
      --accent: #2f80ed;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --muted: #74808c;
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3f0fb 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      overflow: hidden;
      display: grid;
      grid-template-rows: auto 1fr;
      min-height: 620px;
    }

    header {
      background: var(--accent-2);
      color: white;
      padding: 18px 28px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.4rem;
      margin: 0;
    }

    .body {
      display: grid;
      grid-template-columns: 92px 1fr;
      min-height: 0;
    }

    nav {
      background: rgba(47, 72, 88, 0.06);
      padding: 20px 10px;
      display: flex;
      flex-direction: column;
      gap: 8px;
    }

    .nav-btn {
      appearance: none;
      border: none;
      background: transparent;
      border-radius: 12px;
      padding: 10px 6px;
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
      transition: background 150ms ease, color 150ms ease;
    }

    .nav-btn:hover {
      background: rgba(47, 128, 237, 0.1);
    }

    .nav-btn.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .screen {
      display: none;
      padding: 28px;
      min-height: 0;
    }

    .screen.active {
      display: flex;
      flex-direction: column;
      gap: 18px;
    }

    .screen h2 {
      margin: 0;
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.6rem;
    }

    .metric-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .metric {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 10px;
    }

    .metric .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    input[type='text'],
    textarea {
      font: inherit;
      color: inherit;
      background: #f7fafc;
      border: 1px solid rgba(47, 72, 88, 0.16);
      border-radius: 12px;
      padding: 10px 12px;
      outline: none;
    }

    input[type='text']:focus,
    textarea:focus {
      border-color: var(--accent);
    }

    .calendar-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .calendar-head .month {
      font-weight: 600;
      font-size: 1.05rem;
    }

    .step-btn {
      appearance: none;
      border: none;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: 38px;
      height: 38px;
      font-size: 1.1rem;
      font-weight: 600;
      color: var(--accent-2);
      cursor: pointer;
    }

    .step-btn:hover {
      background: rgba(47, 128, 237, 0.16);
    }

    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-grid .weekday {
      text-align: center;
      font-size: 0.8rem;
      font-weight: 600;
      color: var(--muted);
      padding: 6px 0;
    }

    .calendar-grid .day {
      text-align: center;
      padding: 10px 0;
      background: #f2f6fa;
      border-radius: 10px;
      cursor: pointer;
    }

    .calendar-grid .day:hover {
      background: rgba(47, 128, 237, 0.14);
    }

    .calendar-grid .blank {
      padding: 10px 0;
    }

    #notes-input {
      flex: 1;
      resize: none;
      min-height: 320px;
    }

    .task-entry {
      display: flex;
      gap: 8px;
    }

    .task-entry input {
      flex: 1;
    }

    .task-list {
      display: flex;
      flex-direction: column;
      gap: 8px;
      overflow: auto;
    }

    .task-item {
      display: flex;
      align-items: center;
      gap: 10px;
      background: #f2f6fa;
      border-radius: 12px;
      padding: 10px 14px;
    }

    .task-item .text {
      flex: 1;
    }

    .task-item.done .text {
      text-decoration: line-through;
      color: var(--muted);
    }

    .task-item .remove {
      appearance: none;
      border: none;
      background: transparent;
      color: var(--muted);
      font-size: 1rem;
      cursor: pointer;
    }

    .task-item .remove:hover {
      color: #c63b2b;
    }

    .primary-btn {
      appearance: none;
      border: none;
      border-radius: 12px;
      padding: 10px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
      box-shadow: 0 10px 24px rgba(47, 128, 237, 0.3);
    }

    .primary-btn:active {
      transform: scale(0.98);
    }

    .chat-log {
      flex: 1;
      overflow: auto;
      display: flex;
      flex-direction: column;
      gap: 10px;
      min-height: 320px;
    }

    .bubble {
      max-width: 75%;
      padding: 10px 14px;
      border-radius: 14px;
      line-height: 1.35;
    }

    .bubble.user {
      align-self: flex-end;
      background: var(--accent);
      color: white;
    }

    .bubble.bot {
      align-self: flex-start;
      background: #e8edf2;
    }

    .chat-entry {
      display: flex;
      gap: 8px;
    }

    .chat-entry input {
      flex: 1;
    }

    @media (max-width: 600px) {
      .body {
        grid-template-columns: 64px 1fr;
      }
      .screen {
        padding: 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Fitness App</h1>
    </header>
    <div class="body">
      <nav>
        <button class="nav-btn" type="button" data-view="home">Home</button>
        <button class="nav-btn" type="button" data-view="calendar">Calendar</button>
        <button class="nav-btn" type="button" data-view="notes">Notes</button>
        <button class="nav-btn" type="button" data-view="tasks">Tasks</button>
        <button class="nav-btn" type="button" data-view="chat">Chat</button>
      </nav>

      <section class="screen" data-view="home">
        <h2>Fitness Dashboard</h2>
        <div class="metric-grid">
          <div class="metric">
            <span class="label">Daily Steps</span>
            <input id="steps-input" type="text" value="{{STEPS}}" placeholder="0" />
          </div>
          <div class="metric">
            <span class="label">Avg Heart Rate</span>
            <input id="heart-input" type="text" value="{{HEART_RATE}}" placeholder="0" />
          </div>
        </div>
      </section>

      <section class="screen" data-view="calendar">
        <h2>Fitness Calendar</h2>
        <div class="calendar-head">
          <button class="step-btn" id="prev-month" type="button">&lsaquo;</button>
          <span class="month" id="month-label"></span>
          <button class="step-btn" id="next-month" type="button">&rsaquo;</button>
        </div>
        <div class="calendar-grid" id="calendar-grid"></div>
      </section>

      <section class="screen" data-view="notes">
        <h2>Fitness Notes</h2>
        <textarea id="notes-input" placeholder="Write your fitness notes here..."></textarea>
      </section>

      <section class="screen" data-view="tasks">
        <h2>Fitness Tasks</h2>
        <div class="task-entry">
          <input id="task-input" type="text" placeholder="Add a new task..." />
          <button class="primary-btn" id="task-add" type="button">Add</button>
        </div>
        <div class="task-list" id="task-list"></div>
      </section>

      <section class="screen" data-view="chat">
        <h2>Fitness AI Chat</h2>
        <div class="chat-log" id="chat-log"></div>
        <div class="chat-entry">
          <input id="chat-input" type="text" placeholder="Ask your fitness AI..." />
          <button class="primary-btn" id="chat-send" type="button">Send</button>
        </div>
      </section>
    </div>
  </main>

  <script>
    const navButtons = Array.from(document.querySelectorAll('.nav-btn'));
    const screens = Array.from(document.querySelectorAll('.screen'));
    const stepsInput = document.getElementById('steps-input');
    const heartInput = document.getElementById('heart-input');
    const monthLabel = document.getElementById('month-label');
    const calendarGrid = document.getElementById('calendar-grid');
    const notesInput = document.getElementById('notes-input');
    const taskInput = document.getElementById('task-input');
    const taskList = document.getElementById('task-list');
    const chatLog = document.getElementById('chat-log');
    const chatInput = document.getElementById('chat-input');

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text());
      }
      return res.json();
    };

    const showView = (view) => {
      screens.forEach((screen) => screen.classList.toggle('active', screen.dataset.view === view));
      navButtons.forEach((button) => button.classList.toggle('active', button.dataset.view === view));
    };

    const selectView = (view) => {
      showView(view);
      postJson('/api/view', { view }).catch(() => {});
    };

    const renderCalendar = (calendar) => {
      monthLabel.textContent = calendar.label;
      calendarGrid.innerHTML = '';
      calendar.weekdays.forEach((name) => {
        const cell = document.createElement('div');
        cell.className = 'weekday';
        cell.textContent = name;
        calendarGrid.appendChild(cell);
      });
      calendar.cells.forEach((day) => {
        const cell = document.createElement('div');
        if (day === null) {
          cell.className = 'blank';
        } else {
          cell.className = 'day';
          cell.textContent = day;
        }
        calendarGrid.appendChild(cell);
      });
    };

    const renderTasks = (tasks) => {
      taskList.innerHTML = '';
      tasks.forEach((task) => {
        const item = document.createElement('div');
        item.className = task.completed ? 'task-item done' : 'task-item';

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.checked = task.completed;
        checkbox.addEventListener('change', () => {
          postJson('/api/tasks/toggle', { id: task.id }).then((data) => renderTasks(data.tasks));
        });

        const text = document.createElement('span');
        text.className = 'text';
        text.textContent = task.text;

        const remove = document.createElement('button');
        remove.className = 'remove';
        remove.type = 'button';
        remove.textContent = 'x';
        remove.addEventListener('click', () => {
          postJson('/api/tasks/remove', { id: task.id }).then((data) => renderTasks(data.tasks));
        });

        item.appendChild(checkbox);
        item.appendChild(text);
        item.appendChild(remove);
        taskList.appendChild(item);
      });
    };

    const renderChat = (messages) => {
      chatLog.innerHTML = '';
      messages.forEach((message) => {
        const bubble = document.createElement('div');
        bubble.className = 'bubble ' + message.sender;
        bubble.textContent = message.text;
        chatLog.appendChild(bubble);
      });
      chatLog.scrollTop = chatLog.scrollHeight;
    };

    const bindMetric = (inputEl, field) => {
      inputEl.addEventListener('input', () => {
        postJson('/api/metrics', { field, value: inputEl.value })
          .then((metrics) => {
            inputEl.value = metrics[field];
          })
          .catch(() => {});
      });
    };

    const addTask = () => {
      const text = taskInput.value;
      if (!text.trim()) {
        return;
      }
      taskInput.value = '';
      postJson('/api/tasks', { text }).then((data) => renderTasks(data.tasks));
    };

    const sendChat = () => {
      const text = chatInput.value;
      if (!text.trim()) {
        return;
      }
      chatInput.value = '';

      const bubble = document.createElement('div');
      bubble.className = 'bubble user';
      bubble.textContent = text;
      chatLog.appendChild(bubble);
      chatLog.scrollTop = chatLog.scrollHeight;

      postJson('/api/chat', { message: text }).then((data) => renderChat(data.messages));
    };

    const refreshState = async () => {
      const res = await fetch('/api/state');
      if (!res.ok) {
        return;
      }
      const state = await res.json();
      showView(state.view);
      stepsInput.value = state.metrics.steps;
      heartInput.value = state.metrics.heart_rate;
      notesInput.value = state.notes;
      renderCalendar(state.calendar);
      renderTasks(state.tasks);
      renderChat(state.chat);
    };

    navButtons.forEach((button) => {
      button.addEventListener('click', () => selectView(button.dataset.view));
    });

    bindMetric(stepsInput, 'steps');
    bindMetric(heartInput, 'heart_rate');

    notesInput.addEventListener('input', () => {
      postJson('/api/notes', { text: notesInput.value }).catch(() => {});
    });

    document.getElementById('prev-month').addEventListener('click', () => {
      postJson('/api/calendar/shift', { delta: -1 }).then(renderCalendar);
    });
    document.getElementById('next-month').addEventListener('click', () => {
      postJson('/api/calendar/shift', { delta: 1 }).then(renderCalendar);
    });

    document.getElementById('task-add').addEventListener('click', addTask);
    taskInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        addTask();
      }
    });

    document.getElementById('chat-send').addEventListener('click', sendChat);
    chatInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        sendChat();
      }
    });

    showView('{{VIEW}}');
    refreshState();
  </script>
</body>
</html>
"#;
