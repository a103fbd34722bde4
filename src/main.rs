// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Evodex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Evodex CLI entrypoint.
//!
//! Runs the interactive TUI over a species catalog. Without `--catalog` the built-in
//! demo catalog is used.

use std::error::Error;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use evodex::model::SpeciesId;
use evodex::nav::NavConfig;
use evodex::store::Catalog;
use evodex::tui::{Theme, TuiOptions};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--catalog <file.json>] [--species <id>] [--lookup-budget-ms <ms>] [--log <path>]\n  {program} --demo [--species <id>] [--lookup-budget-ms <ms>] [--log <path>]\n\nWithout --catalog the built-in demo catalog is used.\n--demo cannot be combined with --catalog.\n--species opens the evolution view for that species (e.g. 133 or #133) on startup.\n--lookup-budget-ms bounds each family lookup (default {}ms).\n--log writes diagnostics to <path>; RUST_LOG sets the filter (default {DEFAULT_LOG_FILTER}).",
        evodex::nav::DEFAULT_LOOKUP_BUDGET.as_millis()
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    catalog: Option<String>,
    species: Option<SpeciesId>,
    lookup_budget_ms: Option<u64>,
    log_path: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--catalog" => {
                if options.catalog.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.catalog = Some(path);
            }
            "--species" => {
                if options.species.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let id: SpeciesId = raw.parse().map_err(|_| ())?;
                options.species = Some(id);
            }
            "--lookup-budget-ms" => {
                if options.lookup_budget_ms.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let ms: u64 = raw.parse().map_err(|_| ())?;
                if ms == 0 {
                    return Err(());
                }
                options.lookup_budget_ms = Some(ms);
            }
            "--log" => {
                if options.log_path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_path = Some(path);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.catalog.is_some() {
        return Err(());
    }

    Ok(options)
}

impl CliOptions {
    fn nav_config(&self) -> NavConfig {
        match self.lookup_budget_ms {
            Some(ms) => NavConfig { lookup_budget: Duration::from_millis(ms) },
            None => NavConfig::default(),
        }
    }
}

/// The TUI owns the terminal, so diagnostics only go to a file when one is requested.
fn init_logging(path: Option<&str>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "evodex".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.log_path.as_deref())?;

        let catalog = match options.catalog.as_deref() {
            Some(path) => Catalog::load(path)?,
            None => Catalog::demo(),
        };
        tracing::info!(species = catalog.len(), "catalog loaded");

        let tui_options = TuiOptions {
            theme: Theme::from_env()?,
            nav_config: options.nav_config(),
            initial_species: options.species,
        };
        evodex::tui::run(catalog, tui_options)
    })();

    if let Err(err) = result {
        eprintln!("evodex: {err}");
        std::process::exit(1);
    }
}
