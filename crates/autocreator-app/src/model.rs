// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::ids::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "unknown project status {0:?}; expected one of pending, generating, processing, editing, completed, failed"
    )]
    UnknownStatus(String),
    #[error(
        "unknown video style {0:?}; expected one of documentary, educational, entertaining, news"
    )]
    UnknownStyle(String),
    #[error("unsupported duration of {0} minutes; expected one of 1, 2, 3, 5, 7, 10, 15, 20, 30")]
    UnsupportedDuration(u32),
    #[error("unknown language {0:?}; expected ar or en")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Pending,
    Generating,
    Processing,
    Editing,
    Completed,
    Failed,
}

impl ProjectStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Generating,
        Self::Processing,
        Self::Editing,
        Self::Completed,
        Self::Failed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Generating => "generating",
            Self::Processing => "processing",
            Self::Editing => "editing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value {
            "pending" => Ok(Self::Pending),
            "generating" => Ok(Self::Generating),
            "processing" => Ok(Self::Processing),
            "editing" => Ok(Self::Editing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(ParseError::UnknownStatus(other.to_owned())),
        }
    }

    /// Terminal statuses carry no meaningful progress.
    pub const fn is_terminal(self) -> bool {
        match self {
            Self::Completed | Self::Failed => true,
            Self::Pending | Self::Generating | Self::Processing | Self::Editing => false,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusColor {
    Gray,
    Yellow,
    Blue,
    Purple,
    Green,
    Red,
}

impl StatusColor {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Gray => "gray-500",
            Self::Yellow => "yellow-500",
            Self::Blue => "blue-500",
            Self::Purple => "purple-500",
            Self::Green => "green-500",
            Self::Red => "red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    #[default]
    Documentary,
    Educational,
    Entertaining,
    News,
}

impl VideoStyle {
    pub const ALL: [Self; 4] = [
        Self::Documentary,
        Self::Educational,
        Self::Entertaining,
        Self::News,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Documentary => "documentary",
            Self::Educational => "educational",
            Self::Entertaining => "entertaining",
            Self::News => "news",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value {
            "documentary" => Ok(Self::Documentary),
            "educational" => Ok(Self::Educational),
            "entertaining" => Ok(Self::Entertaining),
            "news" => Ok(Self::News),
            other => Err(ParseError::UnknownStyle(other.to_owned())),
        }
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Documentary, Language::Arabic) => "وثائقي",
            (Self::Educational, Language::Arabic) => "تعليمي",
            (Self::Entertaining, Language::Arabic) => "ترفيهي",
            (Self::News, Language::Arabic) => "أخباري",
            (Self::Documentary, Language::English) => "documentary",
            (Self::Educational, Language::English) => "educational",
            (Self::Entertaining, Language::English) => "entertaining",
            (Self::News, Language::English) => "news",
        }
    }
}

/// Allowed video lengths, in minutes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum VideoDuration {
    One,
    Two,
    Three,
    #[default]
    Five,
    Seven,
    Ten,
    Fifteen,
    Twenty,
    Thirty,
}

impl VideoDuration {
    pub const ALL: [Self; 9] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Five,
        Self::Seven,
        Self::Ten,
        Self::Fifteen,
        Self::Twenty,
        Self::Thirty,
    ];

    pub const fn minutes(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
            Self::Thirty => 30,
        }
    }

    pub fn from_minutes(minutes: u32) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|duration| duration.minutes() == minutes)
            .ok_or(ParseError::UnsupportedDuration(minutes))
    }

    pub fn label(self, language: Language) -> String {
        match language {
            Language::Arabic => format!("{} دقائق", self.minutes()),
            Language::English => format!("{} min", self.minutes()),
        }
    }
}

impl TryFrom<u32> for VideoDuration {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

impl From<VideoDuration> for u32 {
    fn from(value: VideoDuration) -> Self {
        value.minutes()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::English => "en",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Arabic),
            "en" => Ok(Self::English),
            _ => Err(ParseError::UnknownLanguage(value.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    TotalVideos,
    ThisMonth,
    ProcessingHours,
    Completed,
}

impl StatKind {
    pub const ALL: [Self; 4] = [
        Self::TotalVideos,
        Self::ThisMonth,
        Self::ProcessingHours,
        Self::Completed,
    ];

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::TotalVideos, Language::Arabic) => "إجمالي الفيديوهات",
            (Self::ThisMonth, Language::Arabic) => "هذا الشهر",
            (Self::ProcessingHours, Language::Arabic) => "ساعات المعالجة",
            (Self::Completed, Language::Arabic) => "مكتمل",
            (Self::TotalVideos, Language::English) => "total videos",
            (Self::ThisMonth, Language::English) => "this month",
            (Self::ProcessingHours, Language::English) => "processing hours",
            (Self::Completed, Language::English) => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub kind: StatKind,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("project {id}: {source}")]
    UnknownStatus {
        id: i64,
        #[source]
        source: ParseError,
    },
    #[error("project {id}: progress {progress} is outside 0..=100")]
    ProgressOutOfRange { id: i64, progress: i64 },
    #[error("project {id}: invalid video url {url:?}: {reason}")]
    InvalidVideoUrl {
        id: i64,
        url: String,
        reason: String,
    },
    #[error("project {id}: video url requires a completed project, status is {status}")]
    VideoUrlWithoutCompletion { id: i64, status: ProjectStatus },
}

/// Raw project record as supplied from outside, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub id: i64,
    pub topic: String,
    pub title: Option<String>,
    pub status: String,
    pub progress: i64,
    pub created_at: String,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: ProjectId,
    topic: String,
    title: Option<String>,
    status: ProjectStatus,
    progress: u8,
    created_at: String,
    video_url: Option<Url>,
}

impl Project {
    pub fn new(draft: ProjectDraft) -> Result<Self, ProjectError> {
        let id = draft.id;
        let status = ProjectStatus::parse(&draft.status)
            .map_err(|source| ProjectError::UnknownStatus { id, source })?;

        let progress = u8::try_from(draft.progress)
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(ProjectError::ProgressOutOfRange {
                id,
                progress: draft.progress,
            })?;

        let video_url = match draft.video_url {
            None => None,
            Some(raw) => {
                if status != ProjectStatus::Completed {
                    return Err(ProjectError::VideoUrlWithoutCompletion { id, status });
                }
                Some(parse_video_url(id, &raw)?)
            }
        };

        Ok(Self {
            id: ProjectId::new(id),
            topic: draft.topic,
            title: draft.title,
            status,
            progress,
            created_at: draft.created_at,
            video_url,
        })
    }

    pub const fn id(&self) -> ProjectId {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title for display; an absent or blank title falls back to the topic.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.topic)
    }

    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    pub const fn progress(&self) -> u8 {
        self.progress
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn video_url(&self) -> Option<&Url> {
        self.video_url.as_ref()
    }
}

fn parse_video_url(id: i64, raw: &str) -> Result<Url, ProjectError> {
    let url = Url::parse(raw).map_err(|error| ProjectError::InvalidVideoUrl {
        id,
        url: raw.to_owned(),
        reason: error.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProjectError::InvalidVideoUrl {
            id,
            url: raw.to_owned(),
            reason: format!("unsupported scheme {scheme:?}"),
        }),
    }
}
