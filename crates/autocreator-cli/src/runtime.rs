// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use autocreator_app::{CreateProjectRequest, Language, Project, ProjectCard, StatTile, demo};

/// Serves the mock dashboard content. Submitted projects are logged and kept
/// aside; they never join the displayed list.
#[derive(Debug, Clone)]
pub struct DemoRuntime {
    projects: Vec<Project>,
    stats: Vec<StatTile>,
    submitted: Vec<CreateProjectRequest>,
}

impl DemoRuntime {
    pub fn new() -> Result<Self> {
        Ok(Self {
            projects: demo::demo_projects().context("build demo projects")?,
            stats: demo::demo_stats(),
            submitted: Vec::new(),
        })
    }

    pub fn submitted(&self) -> &[CreateProjectRequest] {
        &self.submitted
    }

    pub fn listing(&self, language: Language) -> String {
        self.projects
            .iter()
            .map(|project| {
                autocreator_tui::render_project_card_text(
                    &ProjectCard::from_project(project, language),
                    language,
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl autocreator_tui::AppRuntime for DemoRuntime {
    fn load_projects(&mut self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn load_stats(&mut self) -> Result<Vec<StatTile>> {
        Ok(self.stats.clone())
    }

    fn submit_project(&mut self, request: &CreateProjectRequest) -> Result<()> {
        let payload = request.to_json().context("encode project request")?;
        log::info!("create project request: {payload}");
        self.submitted.push(request.clone());
        Ok(())
    }
}
