// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use autocreator_app::{Project, ProjectDraft, ProjectStatus};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

const TOPICS: [&str; 6] = [
    "تاريخ القهوة العربية",
    "أساطير البحر الأحمر",
    "الزراعة في الصحراء",
    "the silk road",
    "deep sea volcanoes",
    "how bridges stand up",
];

const SAMPLE_VIDEO_URL: &str = "https://youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFixture {
    draft: ProjectDraft,
}

impl ProjectFixture {
    pub fn new(id: i64, status: ProjectStatus) -> Self {
        let topic = TOPICS[(id.unsigned_abs() as usize) % TOPICS.len()];
        let progress = if status == ProjectStatus::Completed {
            100
        } else {
            (id * 17).rem_euclid(100)
        };
        Self {
            draft: ProjectDraft {
                id,
                topic: topic.to_owned(),
                title: None,
                status: status.as_str().to_owned(),
                progress,
                created_at: format!("{id}m ago"),
                video_url: None,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.draft.title = Some(title.to_owned());
        self
    }

    pub fn topic(mut self, topic: &str) -> Self {
        self.draft.topic = topic.to_owned();
        self
    }

    pub fn progress(mut self, progress: i64) -> Self {
        self.draft.progress = progress;
        self
    }

    pub fn video_url(mut self, url: &str) -> Self {
        self.draft.video_url = Some(url.to_owned());
        self
    }

    pub fn with_sample_video(self) -> Self {
        self.video_url(SAMPLE_VIDEO_URL)
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn build(self) -> Result<Project> {
        let id = self.draft.id;
        Project::new(self.draft).with_context(|| format!("build fixture project {id}"))
    }
}

/// One project per status, ids starting at 1 in `ProjectStatus::ALL` order.
/// The completed project carries a video link.
pub fn projects_in_every_status() -> Result<Vec<Project>> {
    ProjectStatus::ALL
        .into_iter()
        .zip(1..)
        .map(|(status, id)| {
            let fixture = ProjectFixture::new(id, status);
            if status == ProjectStatus::Completed {
                fixture.with_sample_video().build()
            } else {
                fixture.build()
            }
        })
        .collect()
}

/// Counts invocations of a close callback.
#[derive(Debug, Clone, Default)]
pub struct CloseCounter {
    calls: Rc<Cell<usize>>,
}

impl CloseCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl FnOnce() + 'static {
        let calls = Rc::clone(&self.calls);
        move || calls.set(calls.get() + 1)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

pub fn write_temp_file(name: &str, content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
    let temp = tempfile::tempdir().context("create temp dir")?;
    let path = temp.path().join(name);
    std::fs::write(&path, content).with_context(|| format!("write {}", path.display()))?;
    Ok((temp, path))
}
