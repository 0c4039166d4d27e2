// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod logging;
mod runtime;

use anyhow::{Context, Result};
use autocreator_app::AppState;
use autocreator_tui::AppRuntime;
use config::Config;
use runtime::DemoRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `autocreator --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;
    let language = config.language()?;
    let submit_delay = config.submit_delay()?;

    let log_path = config.log_path()?;
    if let Err(error) = logging::init(&log_path, config.log_level()?) {
        eprintln!("warning: logging disabled: {error:#}");
    }

    let mut runtime = DemoRuntime::new()?;
    if options.list {
        println!("{}", runtime.listing(language));
        return Ok(());
    }

    if options.check_only {
        let projects = runtime.load_projects()?;
        let stats = runtime.load_stats()?;
        log::info!(
            "check passed: {} projects, {} stat tiles",
            projects.len(),
            stats.len()
        );
        return Ok(());
    }

    let mut state = AppState::new(language, config.show_stats(), submit_delay);
    log::info!("starting dashboard in {}", language.code());
    autocreator_tui::run_app(&mut state, &mut runtime)?;
    log::info!(
        "dashboard closed after {} project requests",
        runtime.submitted().len()
    );
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_example: bool,
    list: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_example: false,
        list: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--list" => {
                options.list = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("autocreator");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --list                   Print the project cards as plain text");
    println!("  --check                  Validate config and demo data, then exit");
    println!("  --help                   Show this help");
    println!();
    println!("keys: n new project | j/k move | s stats | r reload | q quit");
    println!("form: tab field | left/right change | enter create | esc cancel");
}
