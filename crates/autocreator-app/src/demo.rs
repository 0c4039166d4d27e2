// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Mock dashboard content shown until a real project backend exists.

use crate::{Project, ProjectDraft, ProjectError, StatKind, StatTile};

pub fn demo_projects() -> Result<Vec<Project>, ProjectError> {
    [
        ProjectDraft {
            id: 1,
            topic: "تاريخ القهوة العربية".to_owned(),
            title: Some("كيف بدأت القهوة في الجزيرة العربية".to_owned()),
            status: "completed".to_owned(),
            progress: 100,
            created_at: "منذ 2 ساعة".to_owned(),
            video_url: Some("https://youtube.com/watch?v=dQw4w9WgXcQ".to_owned()),
        },
        ProjectDraft {
            id: 2,
            topic: "أساطير البحر الأحمر".to_owned(),
            title: Some("قصة صائد اللؤلؤ".to_owned()),
            status: "editing".to_owned(),
            progress: 75,
            created_at: "منذ ساعة".to_owned(),
            video_url: None,
        },
        ProjectDraft {
            id: 3,
            topic: "الزراعة في الصحراء".to_owned(),
            title: Some("كيف نجحت الصحراء في الإنتاج".to_owned()),
            status: "generating".to_owned(),
            progress: 35,
            created_at: "منذ 30 دقيقة".to_owned(),
            video_url: None,
        },
    ]
    .into_iter()
    .map(Project::new)
    .collect()
}

pub fn demo_stats() -> Vec<StatTile> {
    StatKind::ALL
        .into_iter()
        .zip([156, 23, 48, 142])
        .map(|(kind, value)| StatTile { kind, value })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{demo_projects, demo_stats};
    use crate::{ProjectError, ProjectStatus, StatKind};

    #[test]
    fn demo_projects_are_valid() -> Result<(), ProjectError> {
        let projects = demo_projects()?;
        let statuses = projects
            .iter()
            .map(|project| project.status())
            .collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec![
                ProjectStatus::Completed,
                ProjectStatus::Editing,
                ProjectStatus::Generating,
            ]
        );
        assert!(projects[0].video_url().is_some());
        Ok(())
    }

    #[test]
    fn demo_stats_cover_every_tile() {
        let stats = demo_stats();
        assert_eq!(stats.len(), StatKind::ALL.len());
        assert_eq!(stats[0].value, 156);
        assert_eq!(stats[3].kind, StatKind::Completed);
    }
}
