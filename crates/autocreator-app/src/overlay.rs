// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! The create-project overlay owns a [`CreateProjectForm`] for as long as it
//! is mounted. Closing consumes the overlay, so the parent's `on_close`
//! callback runs exactly once and no form state survives a close.

use crate::{CreateProjectForm, CreateProjectRequest, Language, SubmissionToken, SubmitError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub token: SubmissionToken,
    pub request: CreateProjectRequest,
}

pub struct CreateProjectOverlay<F>
where
    F: FnOnce(),
{
    form: CreateProjectForm,
    language: Language,
    pending: Option<PendingSubmission>,
    on_close: F,
}

impl<F> CreateProjectOverlay<F>
where
    F: FnOnce(),
{
    pub fn open(language: Language, on_close: F) -> Self {
        Self {
            form: CreateProjectForm::new(),
            language,
            pending: None,
            on_close,
        }
    }

    pub fn form(&self) -> &CreateProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CreateProjectForm {
        &mut self.form
    }

    pub const fn language(&self) -> Language {
        self.language
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    /// Validates the form and enters the submitting state. The caller is
    /// responsible for scheduling [`Self::complete`] with the same token.
    pub fn submit(&mut self, token: SubmissionToken) -> Result<PendingSubmission, SubmitError> {
        let request = self.form.begin_submit(self.language)?;
        let pending = PendingSubmission { token, request };
        self.pending = Some(pending.clone());
        Ok(pending)
    }

    /// Leaves the submitting state without closing, for when the request
    /// could not be handed off.
    pub fn abandon(&mut self, token: SubmissionToken) -> bool {
        if !self.is_pending(token) {
            return false;
        }
        self.pending = None;
        self.form.finish_submit();
        true
    }

    /// Finishes the submission identified by `token` and closes the overlay.
    /// A token that does not match the pending submission hands the overlay
    /// back untouched.
    pub fn complete(mut self, token: SubmissionToken) -> Result<PendingSubmission, Self> {
        if !self.is_pending(token) {
            return Err(self);
        }
        self.form.finish_submit();
        let Some(pending) = self.pending.take() else {
            return Err(self);
        };
        (self.on_close)();
        Ok(pending)
    }

    /// Closes immediately, including mid-submission. Returns the submission
    /// that was abandoned, if any.
    pub fn cancel(self) -> Option<PendingSubmission> {
        (self.on_close)();
        self.pending
    }

    fn is_pending(&self, token: SubmissionToken) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| pending.token == token)
    }
}

impl<F> std::fmt::Debug for CreateProjectOverlay<F>
where
    F: FnOnce(),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateProjectOverlay")
            .field("form", &self.form)
            .field("language", &self.language)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
