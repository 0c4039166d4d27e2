// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Language, UiText, VideoDuration, VideoStyle};

pub const MAX_TOPIC_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("video topic is required -- enter a topic and retry")]
    EmptyTopic,
    #[error("video topic is {actual} characters; the limit is {max}")]
    TopicTooLong { max: usize, actual: usize },
    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

impl SubmitError {
    /// Status-line text in the form's language.
    pub fn message(&self, language: Language) -> String {
        match (self, language) {
            (Self::EmptyTopic, _) => UiText::TopicRequired.get(language).to_owned(),
            (Self::AlreadySubmitting, _) => UiText::AlreadySubmitting.get(language).to_owned(),
            (Self::TopicTooLong { max, actual }, Language::Arabic) => {
                format!("موضوع الفيديو {actual} حرفًا والحد الأقصى {max}")
            }
            (Self::TopicTooLong { .. }, Language::English) => self.to_string(),
        }
    }
}

/// Payload a project backend would receive for a new video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub topic: String,
    pub duration: VideoDuration,
    pub style: VideoStyle,
    pub language: Language,
}

impl CreateProjectRequest {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Topic,
    Duration,
    Style,
}

impl FormField {
    pub const ALL: [Self; 3] = [Self::Topic, Self::Duration, Self::Style];

    pub fn step(self, delta: isize) -> Self {
        Self::ALL[rotate(position(&Self::ALL, self), delta, Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateProjectForm {
    topic: String,
    duration: VideoDuration,
    style: VideoStyle,
    submitting: bool,
}

impl CreateProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub const fn duration(&self) -> VideoDuration {
        self.duration
    }

    pub const fn style(&self) -> VideoStyle {
        self.style
    }

    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn push_topic_char(&mut self, ch: char) {
        self.topic.push(ch);
    }

    pub fn pop_topic_char(&mut self) {
        self.topic.pop();
    }

    pub fn set_duration(&mut self, duration: VideoDuration) {
        self.duration = duration;
    }

    pub fn set_style(&mut self, style: VideoStyle) {
        self.style = style;
    }

    pub fn cycle_duration(&mut self, delta: isize) {
        let all = VideoDuration::ALL;
        self.duration = all[rotate(position(&all, self.duration), delta, all.len())];
    }

    pub fn cycle_style(&mut self, delta: isize) {
        let all = VideoStyle::ALL;
        self.style = all[rotate(position(&all, self.style), delta, all.len())];
    }

    pub fn validate(&self) -> Result<(), SubmitError> {
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(SubmitError::EmptyTopic);
        }
        let actual = topic.chars().count();
        if actual > MAX_TOPIC_CHARS {
            return Err(SubmitError::TopicTooLong {
                max: MAX_TOPIC_CHARS,
                actual,
            });
        }
        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.validate().is_ok()
    }

    pub fn request(&self, language: Language) -> CreateProjectRequest {
        CreateProjectRequest {
            topic: self.topic.trim().to_owned(),
            duration: self.duration,
            style: self.style,
            language,
        }
    }

    pub(crate) fn begin_submit(
        &mut self,
        language: Language,
    ) -> Result<CreateProjectRequest, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        self.validate()?;
        self.submitting = true;
        Ok(self.request(language))
    }

    pub(crate) fn finish_submit(&mut self) {
        self.submitting = false;
    }
}

fn position<T: PartialEq + Copy>(all: &[T], value: T) -> usize {
    all.iter().position(|item| *item == value).unwrap_or(0)
}

fn rotate(current: usize, delta: isize, len: usize) -> usize {
    (current as isize + delta).rem_euclid(len as isize) as usize
}
