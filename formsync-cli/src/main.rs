mod page;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use formdom::{Document, Event, form_data, to_html};
use formsync::{SelectionBinding, SyncConfig};
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};

/// Replay radio selections against a demo form and show what it would submit.
#[derive(Debug, Parser)]
#[command(name = "formsync-cli", version)]
struct Args {
    /// Radio group as name=value1,value2 (repeatable)
    #[arg(long = "group", value_name = "NAME=VALUES", required = true)]
    groups: Vec<String>,

    /// Selection as name=value, applied in order (repeatable)
    #[arg(long = "select", value_name = "NAME=VALUE")]
    selections: Vec<String>,

    /// Id of the hidden-field container
    #[arg(long, default_value = "selected_items")]
    container: String,

    /// Print the submitted fields as JSON instead of the form HTML
    #[arg(long)]
    json: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(args: &Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        let log_file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
            .context("Failed to initialize logger")?;
    } else if args.verbose {
        SimpleLogger::init(LevelFilter::Debug, Config::default())
            .context("Failed to initialize logger")?;
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    init_logging(&args)?;

    let groups = page::parse_groups(args.groups.as_slice())?;

    let config = SyncConfig::new().container_prefix(args.container.clone());
    let binding = SelectionBinding::new(config);
    let mut doc = Document::new(page::build_form(&groups, &args.container));

    for spec in &args.selections {
        let (group, value) = page::parse_selection(spec, &groups)?;
        let radio = page::find_radio(doc.root(), group, value)
            .with_context(|| format!("No radio for selection '{spec}'"))?;
        binding
            .handle(&mut doc, &Event::change(&radio))
            .with_context(|| format!("Failed to apply selection '{spec}'"))?;
        log::info!("selected {radio}");
    }

    if args.json {
        let fields = form_data(doc.root());
        println!("{}", serde_json::to_string_pretty(&fields)?);
    } else {
        println!("{}", to_html(doc.root()));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
