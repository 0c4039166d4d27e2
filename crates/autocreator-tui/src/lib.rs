// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod deferred;
mod render;

use anyhow::{Context, Result};
use autocreator_app::{
    AppCommand, AppMode, AppState, CreateProjectOverlay, CreateProjectRequest, FormField, Project,
    StatTile, SubmissionToken, UiText,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

pub use deferred::DeferredTask;
pub use render::{progress_bar_text, render_project_card_text};

const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(4);

pub trait AppRuntime {
    fn load_projects(&mut self) -> Result<Vec<Project>>;
    fn load_stats(&mut self) -> Result<Vec<StatTile>>;
    /// Hands a new project request to whatever backs the dashboard.
    fn submit_project(&mut self, request: &CreateProjectRequest) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    SubmissionElapsed { token: SubmissionToken },
    OverlayClosed,
}

type CloseCallback = Box<dyn FnOnce()>;

#[derive(Debug)]
struct FormUiState {
    overlay: CreateProjectOverlay<CloseCallback>,
    field: FormField,
    timer: Option<DeferredTask>,
}

#[derive(Debug, Default)]
struct ViewData {
    projects: Vec<Project>,
    stats: Vec<StatTile>,
    form: Option<FormUiState>,
    status_token: u64,
}

pub fn run_app<R: AppRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    if let Err(error) = refresh_view_data(state, runtime, &mut view_data) {
        log::error!("initial load failed: {error:#}");
        state.dispatch(AppCommand::SetStatus(format!("load failed: {error}")));
    }

    let mut result = Ok(());
    loop {
        process_internal_events(state, runtime, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render::render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    view_data.form = None;
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn refresh_view_data<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
) -> Result<()> {
    view_data.projects = runtime.load_projects().context("load projects")?;
    view_data.stats = runtime.load_stats().context("load stats")?;
    state.dispatch(AppCommand::SelectProject {
        delta: 0,
        count: view_data.projects.len(),
    });
    log::debug!(
        "loaded {} projects and {} stat tiles",
        view_data.projects.len(),
        view_data.stats.len()
    );
    Ok(())
}

fn process_internal_events<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::SubmissionElapsed { token } => {
                finish_submission(state, runtime, view_data, tx, token);
            }
            InternalEvent::OverlayClosed => {
                state.dispatch(AppCommand::CloseCreateForm);
            }
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_DELAY);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        return true;
    }

    match state.mode {
        AppMode::Dashboard => handle_dashboard_key(state, runtime, view_data, internal_tx, key),
        AppMode::CreateForm => {
            handle_form_key(state, view_data, internal_tx, key);
            false
        }
    }
}

fn handle_dashboard_key<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let count = view_data.projects.len();
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('n') => open_create_form(state, view_data, internal_tx),
        KeyCode::Char('s') => {
            state.dispatch(AppCommand::ToggleStats);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.dispatch(AppCommand::SelectProject { delta: 1, count });
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.dispatch(AppCommand::SelectProject { delta: -1, count });
        }
        KeyCode::Char('g') | KeyCode::Home => {
            state.dispatch(AppCommand::SelectProject {
                delta: isize::MIN,
                count,
            });
        }
        KeyCode::Char('G') | KeyCode::End => {
            state.dispatch(AppCommand::SelectProject {
                delta: isize::MAX,
                count,
            });
        }
        KeyCode::Char('r') => match refresh_view_data(state, runtime, view_data) {
            Ok(()) => {
                let message = UiText::Reloaded.get(state.language);
                emit_status(state, view_data, internal_tx, message);
            }
            Err(error) => {
                log::error!("reload failed: {error:#}");
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("reload failed: {error}"),
                );
            }
        },
        KeyCode::Enter => {
            let message = selected_project_summary(state, view_data);
            emit_status(state, view_data, internal_tx, message);
        }
        _ => {}
    }
    false
}

fn selected_project_summary(state: &AppState, view_data: &ViewData) -> String {
    let Some(project) = view_data.projects.get(state.selected_project) else {
        return UiText::NoProjectSelected.get(state.language).to_owned();
    };
    match project.video_url() {
        Some(url) => format!("#{} video: {url}", project.id()),
        None if project.status().is_terminal() => {
            format!("#{} {}", project.id(), project.status())
        }
        None => format!(
            "#{} {} {}%",
            project.id(),
            project.status(),
            project.progress()
        ),
    }
}

fn open_create_form(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    if view_data.form.is_some() {
        return;
    }
    state.dispatch(AppCommand::OpenCreateForm);

    let close_tx = internal_tx.clone();
    let on_close: CloseCallback = Box::new(move || {
        let _ = close_tx.send(InternalEvent::OverlayClosed);
    });
    view_data.form = Some(FormUiState {
        overlay: CreateProjectOverlay::open(state.language, on_close),
        field: FormField::Topic,
        timer: None,
    });
}

fn handle_form_key(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => cancel_create_form(view_data),
        KeyCode::Enter => submit_create_form(state, view_data, internal_tx),
        _ => {
            let Some(form) = view_data.form.as_mut() else {
                return;
            };
            edit_form_field(form, key);
        }
    }
}

fn edit_form_field(form: &mut FormUiState, key: KeyEvent) {
    let fields = form.overlay.form_mut();
    match (key.code, form.field) {
        (KeyCode::Tab, _) => form.field = form.field.step(1),
        (KeyCode::BackTab, _) => form.field = form.field.step(-1),
        (KeyCode::Left, FormField::Duration) => fields.cycle_duration(-1),
        (KeyCode::Right, FormField::Duration) => fields.cycle_duration(1),
        (KeyCode::Left, FormField::Style) => fields.cycle_style(-1),
        (KeyCode::Right, FormField::Style) => fields.cycle_style(1),
        (KeyCode::Backspace, FormField::Topic) => fields.pop_topic_char(),
        (KeyCode::Char(ch), FormField::Topic)
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            fields.push_topic_char(ch);
        }
        _ => {}
    }
}

fn cancel_create_form(view_data: &mut ViewData) {
    let Some(FormUiState { overlay, timer, .. }) = view_data.form.take() else {
        return;
    };
    drop(timer);
    if let Some(pending) = overlay.cancel() {
        log::info!(
            "create project form closed; pending submission {} dropped",
            pending.token
        );
    }
}

fn submit_create_form(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(form) = view_data.form.as_mut() else {
        return;
    };

    let token = state.next_submission_token();
    if let Err(error) = form.overlay.submit(token) {
        log::debug!("create project submit rejected: {error}");
        let message = error.message(form.overlay.language());
        emit_status(state, view_data, internal_tx, message);
        return;
    }

    form.timer = Some(DeferredTask::schedule(
        state.submit_delay,
        internal_tx.clone(),
        InternalEvent::SubmissionElapsed { token },
    ));
}

/// Hands the request to the runtime once the delay has run out, then closes
/// the form. A token that no longer matches the open form is ignored.
fn finish_submission<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    token: SubmissionToken,
) {
    let Some(form) = view_data.form.as_mut() else {
        log::debug!("submission {token} elapsed after its form closed");
        return;
    };
    let Some(request) = form
        .overlay
        .pending()
        .filter(|pending| pending.token == token)
        .map(|pending| pending.request.clone())
    else {
        log::debug!("ignoring stale submission {token}");
        return;
    };

    if let Err(error) = runtime.submit_project(&request) {
        form.overlay.abandon(token);
        form.timer = None;
        log::error!("create project request failed: {error:#}");
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("create project failed: {error}"),
        );
        return;
    }

    let Some(FormUiState {
        overlay,
        field,
        timer,
    }) = view_data.form.take()
    else {
        return;
    };
    match overlay.complete(token) {
        Ok(pending) => {
            drop(timer);
            log::info!(
                "submission {} finished for topic {:?}",
                pending.token,
                pending.request.topic
            );
            let message = UiText::RequestSent.get(state.language);
            emit_status(state, view_data, internal_tx, message);
        }
        Err(overlay) => {
            view_data.form = Some(FormUiState {
                overlay,
                field,
                timer,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AppRuntime, FormUiState, InternalEvent, ViewData, finish_submission, handle_key_event,
        process_internal_events, refresh_view_data, selected_project_summary,
    };
    use anyhow::{Result, anyhow};
    use autocreator_app::{
        AppMode, AppState, CreateProjectRequest, FormField, Language, Project, ProjectStatus,
        StatTile, SubmissionToken, VideoDuration, VideoStyle, demo,
    };
    use autocreator_testkit::{ProjectFixture, projects_in_every_status};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestRuntime {
        projects: Vec<Project>,
        submitted: Vec<CreateProjectRequest>,
        fail_submit: bool,
    }

    impl AppRuntime for TestRuntime {
        fn load_projects(&mut self) -> Result<Vec<Project>> {
            Ok(self.projects.clone())
        }

        fn load_stats(&mut self) -> Result<Vec<StatTile>> {
            Ok(demo::demo_stats())
        }

        fn submit_project(&mut self, request: &CreateProjectRequest) -> Result<()> {
            if self.fail_submit {
                return Err(anyhow!("backend offline"));
            }
            self.submitted.push(request.clone());
            Ok(())
        }
    }

    struct Harness {
        state: AppState,
        runtime: TestRuntime,
        view_data: ViewData,
        tx: Sender<InternalEvent>,
        rx: Receiver<InternalEvent>,
    }

    impl Harness {
        fn new() -> Result<Self> {
            Self::with_language(Language::English)
        }

        fn with_language(language: Language) -> Result<Self> {
            let (tx, rx) = mpsc::channel();
            let mut harness = Self {
                state: AppState::new(language, true, Duration::from_millis(100)),
                runtime: TestRuntime {
                    projects: projects_in_every_status()?,
                    ..TestRuntime::default()
                },
                view_data: ViewData::default(),
                tx,
                rx,
            };
            refresh_view_data(
                &mut harness.state,
                &mut harness.runtime,
                &mut harness.view_data,
            )?;
            Ok(harness)
        }

        fn press(&mut self, code: KeyCode) -> bool {
            handle_key_event(
                &mut self.state,
                &mut self.runtime,
                &mut self.view_data,
                &self.tx,
                KeyEvent::new(code, KeyModifiers::NONE),
            )
        }

        fn type_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.press(KeyCode::Char(ch));
            }
        }

        fn drain(&mut self) {
            process_internal_events(
                &mut self.state,
                &mut self.runtime,
                &mut self.view_data,
                &self.tx,
                &self.rx,
            );
        }

        fn form(&self) -> &FormUiState {
            self.view_data.form.as_ref().expect("form is open")
        }

        fn wait_for_submission(&mut self) -> InternalEvent {
            loop {
                let event = self
                    .rx
                    .recv_timeout(Duration::from_secs(5))
                    .expect("submission timer fires");
                if matches!(event, InternalEvent::SubmissionElapsed { .. }) {
                    return event;
                }
            }
        }

        fn deliver(&mut self, event: InternalEvent) {
            self.tx.send(event).expect("channel open");
            self.drain();
        }
    }

    #[test]
    fn n_opens_form_with_defaults() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));

        assert_eq!(harness.state.mode, AppMode::CreateForm);
        let form = harness.form().overlay.form();
        assert_eq!(form.topic(), "");
        assert_eq!(form.duration(), VideoDuration::Five);
        assert_eq!(form.style(), VideoStyle::Documentary);
        assert!(!form.is_submitting());
        Ok(())
    }

    #[test]
    fn typing_q_in_form_edits_topic_instead_of_quitting() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        assert!(!harness.press(KeyCode::Char('q')));
        assert_eq!(harness.form().overlay.form().topic(), "q");
        Ok(())
    }

    #[test]
    fn tab_and_arrows_change_duration_and_style() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));

        harness.press(KeyCode::Tab);
        assert_eq!(harness.form().field, FormField::Duration);
        harness.press(KeyCode::Right);
        harness.press(KeyCode::Tab);
        harness.press(KeyCode::Left);

        let form = harness.form().overlay.form();
        assert_eq!(form.duration(), VideoDuration::Seven);
        assert_eq!(form.style(), VideoStyle::News);
        Ok(())
    }

    #[test]
    fn enter_with_blank_topic_reports_error_and_stays_idle() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("   ");
        harness.press(KeyCode::Enter);

        assert!(!harness.form().overlay.form().is_submitting());
        assert!(harness.runtime.submitted.is_empty());
        assert!(
            harness
                .state
                .status_line
                .as_deref()
                .is_some_and(|status| status.contains("topic is required"))
        );
        Ok(())
    }

    #[test]
    fn submit_waits_for_timer_then_closes() -> Result<()> {
        let mut harness = Harness::new()?;
        let before = harness.view_data.projects.clone();
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);

        assert!(harness.form().overlay.form().is_submitting());
        assert!(harness.runtime.submitted.is_empty());
        assert_eq!(harness.state.mode, AppMode::CreateForm);

        let elapsed = harness.wait_for_submission();
        harness.deliver(elapsed);

        assert_eq!(harness.runtime.submitted.len(), 1);
        assert_eq!(harness.runtime.submitted[0].topic, "تاريخ القهوة");
        assert!(harness.view_data.form.is_none());
        assert_eq!(harness.state.mode, AppMode::Dashboard);
        assert_eq!(harness.view_data.projects, before);
        assert_eq!(
            harness.state.status_line.as_deref(),
            Some("project request sent")
        );
        Ok(())
    }

    #[test]
    fn second_enter_while_submitting_is_rejected() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        harness.press(KeyCode::Enter);

        assert!(harness.form().overlay.form().is_submitting());
        assert!(
            harness
                .state
                .status_line
                .as_deref()
                .is_some_and(|status| status.contains("already in progress"))
        );
        Ok(())
    }

    #[test]
    fn escape_mid_submission_closes_once_and_drops_completion() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        harness.press(KeyCode::Esc);

        let mut closes = 0;
        while let Ok(event) = harness.rx.recv_timeout(Duration::from_millis(400)) {
            match event {
                InternalEvent::OverlayClosed => closes += 1,
                InternalEvent::SubmissionElapsed { .. } => {
                    panic!("cancelled submission must not complete")
                }
                InternalEvent::ClearStatus { .. } => {}
            }
        }
        assert_eq!(closes, 1);
        Ok(())
    }

    #[test]
    fn escape_mid_submission_never_reaches_runtime() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        harness.press(KeyCode::Esc);
        harness.drain();

        std::thread::sleep(Duration::from_millis(300));
        harness.drain();

        assert!(harness.runtime.submitted.is_empty());
        assert!(harness.view_data.form.is_none());
        assert_eq!(harness.state.mode, AppMode::Dashboard);
        assert!(harness.state.status_line.is_none());
        Ok(())
    }

    #[test]
    fn escape_returns_to_dashboard_and_reopen_is_fresh() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("قهوة");
        harness.press(KeyCode::Tab);
        harness.press(KeyCode::Right);
        harness.press(KeyCode::Esc);
        harness.drain();
        assert_eq!(harness.state.mode, AppMode::Dashboard);
        assert!(harness.view_data.form.is_none());

        harness.press(KeyCode::Char('n'));
        let form = harness.form().overlay.form();
        assert_eq!(form.topic(), "");
        assert_eq!(form.duration(), VideoDuration::Five);
        assert_eq!(form.style(), VideoStyle::Documentary);
        assert_eq!(harness.form().field, FormField::Topic);
        Ok(())
    }

    #[test]
    fn stale_completion_leaves_reopened_form_alone() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        harness.press(KeyCode::Esc);
        harness.drain();

        harness.press(KeyCode::Char('n'));
        harness.type_text("قصة جديدة");
        harness.press(KeyCode::Enter);

        finish_submission(
            &mut harness.state,
            &mut harness.runtime,
            &mut harness.view_data,
            &harness.tx,
            SubmissionToken::new(1),
        );
        assert!(harness.runtime.submitted.is_empty());
        assert!(harness.form().overlay.form().is_submitting());
        assert_eq!(harness.state.mode, AppMode::CreateForm);
        Ok(())
    }

    #[test]
    fn runtime_failure_returns_form_to_idle() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.runtime.fail_submit = true;
        harness.press(KeyCode::Char('n'));
        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        let elapsed = harness.wait_for_submission();
        harness.deliver(elapsed);

        assert_eq!(harness.state.mode, AppMode::CreateForm);
        let form = harness.form();
        assert!(!form.overlay.form().is_submitting());
        assert!(form.timer.is_none());
        assert!(
            harness
                .state
                .status_line
                .as_deref()
                .is_some_and(|status| status.contains("backend offline"))
        );
        Ok(())
    }

    #[test]
    fn arabic_session_reports_status_in_arabic() -> Result<()> {
        let mut harness = Harness::with_language(Language::Arabic)?;
        harness.press(KeyCode::Char('n'));
        harness.press(KeyCode::Enter);
        assert_eq!(
            harness.state.status_line.as_deref(),
            Some("موضوع الفيديو مطلوب")
        );

        harness.type_text("تاريخ القهوة");
        harness.press(KeyCode::Enter);
        let elapsed = harness.wait_for_submission();
        harness.deliver(elapsed);
        assert_eq!(
            harness.state.status_line.as_deref(),
            Some("تم إرسال طلب المشروع")
        );
        Ok(())
    }

    #[test]
    fn q_quits_from_dashboard() -> Result<()> {
        let mut harness = Harness::new()?;
        assert!(harness.press(KeyCode::Char('q')));
        Ok(())
    }

    #[test]
    fn enter_on_completed_project_reports_video_link() -> Result<()> {
        let mut harness = Harness::new()?;
        let completed_index = harness
            .view_data
            .projects
            .iter()
            .position(|project| project.status() == ProjectStatus::Completed)
            .expect("fixture has a completed project");
        for _ in 0..completed_index {
            harness.press(KeyCode::Char('j'));
        }
        harness.press(KeyCode::Enter);

        assert!(
            harness
                .state
                .status_line
                .as_deref()
                .is_some_and(|status| status.contains("https://youtube.com/watch"))
        );
        Ok(())
    }

    #[test]
    fn project_summary_shows_progress_for_active_projects() -> Result<()> {
        let mut harness = Harness::new()?;
        harness.view_data.projects = vec![
            ProjectFixture::new(12, ProjectStatus::Processing)
                .progress(42)
                .build()?,
        ];
        harness.state.selected_project = 0;
        assert_eq!(
            selected_project_summary(&harness.state, &harness.view_data),
            "#12 processing 42%"
        );
        Ok(())
    }
}
