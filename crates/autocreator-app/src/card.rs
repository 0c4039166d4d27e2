// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Presentation rules for a project card: status badge, progress bar, and
//! the video link. Everything here is a pure function of the project.

use url::Url;

use crate::{Language, Project, ProjectId, ProjectStatus, StatusColor};

pub const fn status_label(status: ProjectStatus, language: Language) -> &'static str {
    match (status, language) {
        (ProjectStatus::Pending, Language::Arabic) => "قيد الانتظار",
        (ProjectStatus::Generating, Language::Arabic) => "جاري التوليد",
        (ProjectStatus::Processing, Language::Arabic) => "جاري المعالجة",
        (ProjectStatus::Editing, Language::Arabic) => "جاري التحرير",
        (ProjectStatus::Completed, Language::Arabic) => "مكتمل",
        (ProjectStatus::Failed, Language::Arabic) => "فشل",
        (ProjectStatus::Pending, Language::English) => "pending",
        (ProjectStatus::Generating, Language::English) => "generating",
        (ProjectStatus::Processing, Language::English) => "processing",
        (ProjectStatus::Editing, Language::English) => "editing",
        (ProjectStatus::Completed, Language::English) => "completed",
        (ProjectStatus::Failed, Language::English) => "failed",
    }
}

pub const fn status_color(status: ProjectStatus) -> StatusColor {
    match status {
        ProjectStatus::Pending => StatusColor::Gray,
        ProjectStatus::Generating => StatusColor::Yellow,
        ProjectStatus::Processing => StatusColor::Blue,
        ProjectStatus::Editing => StatusColor::Purple,
        ProjectStatus::Completed => StatusColor::Green,
        ProjectStatus::Failed => StatusColor::Red,
    }
}

pub const fn shows_progress(status: ProjectStatus) -> bool {
    !status.is_terminal()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub color: StatusColor,
}

impl StatusBadge {
    pub const fn for_status(status: ProjectStatus, language: Language) -> Self {
        Self {
            label: status_label(status, language),
            color: status_color(status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressIndicator {
    percent: u8,
    color: StatusColor,
}

impl ProgressIndicator {
    pub fn for_project(project: &Project) -> Option<Self> {
        shows_progress(project.status()).then(|| Self {
            percent: project.progress(),
            color: status_color(project.status()),
        })
    }

    pub const fn percent(self) -> u8 {
        self.percent
    }

    /// Fill ratio in `0.0..=1.0`.
    pub fn ratio(self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    pub const fn color(self) -> StatusColor {
        self.color
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub topic: String,
    pub badge: StatusBadge,
    pub progress: Option<ProgressIndicator>,
    pub created_at: String,
    pub video_url: Option<Url>,
}

impl ProjectCard {
    pub fn from_project(project: &Project, language: Language) -> Self {
        Self {
            id: project.id(),
            title: project.display_title().to_owned(),
            topic: project.topic().to_owned(),
            badge: StatusBadge::for_status(project.status(), language),
            progress: ProgressIndicator::for_project(project),
            created_at: project.created_at().to_owned(),
            video_url: project.video_url().cloned(),
        }
    }
}
