mod catalog;
mod cleaner;
mod config;
mod constants;
mod logging;
mod model;
mod report;
mod scanner;
mod ui;

use anyhow::Result;
use clap::Parser;
use cleaner::{SystemBackend, clean_selected};
use config::{Settings, resolve_home};
use indicatif::{ProgressBar, ProgressStyle};
use scanner::CatalogScanner;
use std::process::ExitCode;
use std::time::Duration;
use ui::app::Decision;

#[derive(Parser)]
#[command(version, about, long_about = None, disable_version_flag = true)]
struct Cli {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Print the scan results and exit without cleaning
    #[arg(long)]
    list: bool,

    /// Measure directories by summing file lengths instead of running du
    #[arg(long)]
    apparent_size: bool,

    /// Do not look for extra apps under ~/Library/Application Support
    #[arg(long)]
    no_discover: bool,

    /// Move removed paths to the Trash (sudo entries are always deleted)
    #[arg(long)]
    trash: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if !cfg!(target_os = "macos") {
        eprintln!("This tool is designed for macOS only!");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings {
        home: resolve_home()?,
        list_only: cli.list,
        apparent_size: cli.apparent_size,
        discover: !cli.no_discover,
        use_trash: cli.trash,
    };

    let probe = settings.probe();
    let scanner = CatalogScanner {
        home: &settings.home,
        catalog: catalog::CATALOG,
        probe: probe.as_ref(),
        discover: settings.discover,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Discovering apps...");
    let on_category = |name: &str| spinner.set_message(format!("Scanning {name}..."));
    let results = scanner.scan(Some(&on_category));
    spinner.finish_and_clear();

    if results.is_empty() {
        println!("No caches found to clean!");
        return Ok(());
    }

    if settings.list_only {
        println!("{}", report::render_table(&results));
        return Ok(());
    }

    let (results, decision) = ui::select(results)?;
    let selected = match decision {
        Decision::NothingSelected => {
            println!("No caches selected. Exiting...");
            return Ok(());
        }
        Decision::Cancelled => {
            println!("Cleaning cancelled. Exiting...");
            return Ok(());
        }
        Decision::Confirmed(keys) => keys,
    };

    let progress = ProgressBar::new(selected.len() as u64);
    progress.set_style(ProgressStyle::with_template("{spinner} [{pos}/{len}] {msg}")?);
    progress.enable_steady_tick(Duration::from_millis(100));
    let backend = SystemBackend {
        use_trash: settings.use_trash,
    };
    let summary = clean_selected(
        &results,
        &selected,
        &backend,
        |result| {
            if result.requires_sudo {
                // Keep the sudo password prompt readable.
                progress.disable_steady_tick();
            }
            progress.set_message(format!("Cleaning {}...", result.name));
        },
        |result, outcome| {
            progress.println(report::outcome_line(result, outcome));
            progress.inc(1);
        },
    );
    progress.finish_and_clear();

    println!("\n{}", report::render_summary(&summary));
    Ok(())
}
