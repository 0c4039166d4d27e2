// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use autocreator_app::{DEFAULT_SUBMIT_DELAY, Language};
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

pub const APP_NAME: &str = "autocreator";
const CONFIG_VERSION: i64 = 1;
const CONFIG_PATH_ENV: &str = "AUTOCREATOR_CONFIG_PATH";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub form: Form,
    #[serde(default)]
    pub logging: Logging,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            ui: Ui::default(),
            form: Form::default(),
            logging: Logging::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub language: Option<String>,
    pub show_stats: Option<bool>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            language: Some(Language::default().code().to_owned()),
            show_stats: Some(true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Form {
    pub submit_delay: Option<String>,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            submit_delay: Some(format!("{}ms", DEFAULT_SUBMIT_DELAY.as_millis())),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    pub path: Option<String>,
    pub level: Option<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            path: None,
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and keep values under [ui], [form], and [logging]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            bail!(
                "config {} has version {}; expected {CONFIG_VERSION}",
                path.display(),
                self.version
            );
        }

        if let Some(language) = &self.ui.language {
            Language::parse(language)
                .with_context(|| format!("invalid ui.language in {}", path.display()))?;
        }

        if let Some(delay) = &self.form.submit_delay {
            let parsed = parse_duration(delay)
                .with_context(|| format!("invalid form.submit_delay in {}", path.display()))?;
            if parsed.is_zero() {
                bail!(
                    "form.submit_delay in {} must be positive, got {}",
                    path.display(),
                    delay
                );
            }
        }

        if let Some(level) = &self.logging.level {
            parse_level(level)
                .with_context(|| format!("invalid logging.level in {}", path.display()))?;
        }

        if let Some(log_path) = &self.logging.path
            && log_path.trim().is_empty()
        {
            bail!(
                "logging.path in {} must not be empty; remove it to use the default",
                path.display()
            );
        }

        Ok(())
    }

    pub fn language(&self) -> Result<Language> {
        match &self.ui.language {
            Some(raw) => Ok(Language::parse(raw)?),
            None => Ok(Language::default()),
        }
    }

    pub fn show_stats(&self) -> bool {
        self.ui.show_stats.unwrap_or(true)
    }

    pub fn submit_delay(&self) -> Result<Duration> {
        match &self.form.submit_delay {
            Some(raw) => parse_duration(raw),
            None => Ok(DEFAULT_SUBMIT_DELAY),
        }
    }

    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.logging.path {
            return Ok(PathBuf::from(path));
        }
        let data_root = dirs::data_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [logging].path in the config file")
        })?;
        Ok(data_root.join(APP_NAME).join(format!("{APP_NAME}.log")))
    }

    pub fn log_level(&self) -> Result<LevelFilter> {
        parse_level(self.logging.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# autocreator config\n# Place this file at: {}\n\nversion = 1\n\n[ui]\n# ar or en\nlanguage = \"{}\"\nshow_stats = true\n\n[form]\n# How long a submitted project shows its loading state\nsubmit_delay = \"{}ms\"\n\n[logging]\n# Optional. Default is platform data dir (for example ~/.local/share/autocreator/autocreator.log)\n# path = \"/absolute/path/to/autocreator.log\"\nlevel = \"{}\"\n",
            path.display(),
            Language::default().code(),
            DEFAULT_SUBMIT_DELAY.as_millis(),
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_level(raw: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(raw.trim()).map_err(|_| {
        anyhow!("invalid log level {raw:?}; use one of off, error, warn, info, debug, trace")
    })
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        let secs = mins
            .checked_mul(60)
            .ok_or_else(|| anyhow!("invalid duration {raw:?}; {mins} minutes is too long"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 2000ms or 2s)")
}
