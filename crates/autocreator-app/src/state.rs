// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::time::Duration;

use crate::{Language, SubmissionToken, UiText};

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Dashboard,
    CreateForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub language: Language,
    pub show_stats: bool,
    pub submit_delay: Duration,
    pub selected_project: usize,
    pub status_line: Option<String>,
    last_submission: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Language::default(), true, DEFAULT_SUBMIT_DELAY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    OpenCreateForm,
    CloseCreateForm,
    ToggleStats,
    SelectProject { delta: isize, count: usize },
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    StatsVisibilityChanged(bool),
    SelectionChanged(usize),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn new(language: Language, show_stats: bool, submit_delay: Duration) -> Self {
        Self {
            mode: AppMode::Dashboard,
            language,
            show_stats,
            submit_delay,
            selected_project: 0,
            status_line: None,
            last_submission: 0,
        }
    }

    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::OpenCreateForm => {
                if self.mode == AppMode::CreateForm {
                    return Vec::new();
                }
                self.mode = AppMode::CreateForm;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::CloseCreateForm => {
                if self.mode == AppMode::Dashboard {
                    return Vec::new();
                }
                self.mode = AppMode::Dashboard;
                vec![AppEvent::ModeChanged(self.mode)]
            }
            AppCommand::ToggleStats => {
                self.show_stats = !self.show_stats;
                let label = if self.show_stats {
                    UiText::StatsShown
                } else {
                    UiText::StatsHidden
                }
                .get(self.language);
                vec![
                    AppEvent::StatsVisibilityChanged(self.show_stats),
                    self.set_status(label),
                ]
            }
            AppCommand::SelectProject { delta, count } => self.move_selection(delta, count),
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    /// Hands out a token that no earlier submission in this session used.
    pub fn next_submission_token(&mut self) -> SubmissionToken {
        self.last_submission = self.last_submission.saturating_add(1);
        SubmissionToken::new(self.last_submission)
    }

    fn move_selection(&mut self, delta: isize, count: usize) -> Vec<AppEvent> {
        if count == 0 {
            self.selected_project = 0;
            return Vec::new();
        }
        let max = count - 1;
        let next = if delta.is_negative() {
            self.selected_project.saturating_sub(delta.unsigned_abs())
        } else {
            self.selected_project.saturating_add(delta as usize)
        }
        .min(max);
        if next == self.selected_project {
            return Vec::new();
        }
        self.selected_project = next;
        vec![AppEvent::SelectionChanged(next)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppCommand, AppEvent, AppMode, AppState, DEFAULT_SUBMIT_DELAY};
    use crate::Language;
    use std::time::Duration;

    #[test]
    fn open_and_close_form_toggle_mode() {
        let mut state = AppState::default();

        let opened = state.dispatch(AppCommand::OpenCreateForm);
        assert_eq!(state.mode, AppMode::CreateForm);
        assert_eq!(opened, vec![AppEvent::ModeChanged(AppMode::CreateForm)]);

        let closed = state.dispatch(AppCommand::CloseCreateForm);
        assert_eq!(state.mode, AppMode::Dashboard);
        assert_eq!(closed, vec![AppEvent::ModeChanged(AppMode::Dashboard)]);
    }

    #[test]
    fn repeated_open_is_a_noop() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::OpenCreateForm);
        assert!(state.dispatch(AppCommand::OpenCreateForm).is_empty());
        assert!(
            AppState::default()
                .dispatch(AppCommand::CloseCreateForm)
                .is_empty()
        );
    }

    #[test]
    fn new_state_starts_on_dashboard_with_given_settings() {
        let mut state = AppState::new(Language::English, false, Duration::from_millis(250));
        assert_eq!(state.mode, AppMode::Dashboard);
        assert_eq!(state.language, Language::English);
        assert!(!state.show_stats);
        assert_eq!(state.submit_delay, Duration::from_millis(250));
        assert_eq!(state.next_submission_token().get(), 1);

        let fallback = AppState::default();
        assert_eq!(fallback.language, Language::Arabic);
        assert_eq!(fallback.submit_delay, DEFAULT_SUBMIT_DELAY);
    }

    #[test]
    fn toggle_stats_updates_status() {
        let mut state = AppState::new(Language::English, true, DEFAULT_SUBMIT_DELAY);

        let events = state.dispatch(AppCommand::ToggleStats);
        assert!(!state.show_stats);
        assert_eq!(
            events,
            vec![
                AppEvent::StatsVisibilityChanged(false),
                AppEvent::StatusUpdated("stats hidden".to_owned()),
            ],
        );
    }

    #[test]
    fn toggle_stats_status_follows_language() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::ToggleStats);
        assert_eq!(state.status_line.as_deref(), Some("تم إخفاء الإحصائيات"));
        state.dispatch(AppCommand::ToggleStats);
        assert_eq!(state.status_line.as_deref(), Some("تم إظهار الإحصائيات"));
    }

    #[test]
    fn selection_clamps_to_project_count() {
        let mut state = AppState::default();

        state.dispatch(AppCommand::SelectProject { delta: 5, count: 3 });
        assert_eq!(state.selected_project, 2);

        let events = state.dispatch(AppCommand::SelectProject { delta: 1, count: 3 });
        assert!(events.is_empty());

        state.dispatch(AppCommand::SelectProject {
            delta: -10,
            count: 3,
        });
        assert_eq!(state.selected_project, 0);
    }

    #[test]
    fn submission_tokens_never_repeat() {
        let mut state = AppState::default();
        let first = state.next_submission_token();
        let second = state.next_submission_token();
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn clear_status_drops_message() {
        let mut state = AppState::default();
        state.dispatch(AppCommand::SetStatus("hello".to_owned()));
        assert_eq!(state.status_line.as_deref(), Some("hello"));

        assert_eq!(
            state.dispatch(AppCommand::ClearStatus),
            vec![AppEvent::StatusCleared]
        );
        assert!(state.status_line.is_none());
    }
}
