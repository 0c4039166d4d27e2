// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! File logging. The dashboard owns the terminal, so log output goes to a
//! file instead of stderr.

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};
use std::fs::{self, File, OpenOptions};
use std::path::Path;

pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = open_log_file(path)?;
    WriteLogger::init(level, build_config(), file)
        .with_context(|| format!("install logger for {}", path.display()))?;
    log::info!("logging to {} at {level}", path.display());
    Ok(())
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::open_log_file;
    use anyhow::Result;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_missing_directories() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("nested").join("autocreator.log");
        open_log_file(&path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn open_log_file_appends_to_existing_log() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("autocreator.log");
        std::fs::write(&path, "first\n")?;

        let mut file = open_log_file(&path)?;
        writeln!(file, "second")?;
        drop(file);

        assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn open_log_file_reports_unwritable_path() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let error = open_log_file(temp.path()).expect_err("a directory is not a log file");
        assert!(error.to_string().contains("open log file"));
        Ok(())
    }
}
