mod commands;
mod config;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use commands::Context;
use store::SelectionMode;

#[derive(Parser)]
#[command(name = "tdw")]
#[command(about = "Plan your Thema der Woche and export it as an iCal file")]
struct Cli {
    /// Theme catalog JSON (defaults to the bundled edition 1)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory holding setup.json and used_themes.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose start Monday and number of weeks
    Setup {
        /// First Monday (YYYY-MM-DD), defaults to next Monday
        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long, default_value_t = 4)]
        weeks: u32,

        #[arg(short, long, value_enum, default_value = "manual")]
        mode: ModeArg,
    },
    /// List all themes
    Themes,
    /// Select one theme per week
    Select {
        /// Theme ids in week order
        #[arg(required_unless_present = "random", conflicts_with = "random")]
        ids: Vec<String>,

        /// Draw themes at random
        #[arg(short, long)]
        random: bool,
    },
    /// Show or clear the themes used in earlier plans
    Used {
        #[arg(long)]
        clear: bool,
    },
    /// Show quotes and daily questions week by week
    Plan,
    /// Write the plan as an .ics file
    Export {
        /// Output path (defaults to ./thema-der-woche.ics)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read an .ics file back and list its events
    Check { file: PathBuf },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    Manual,
    Random,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Manual => SelectionMode::Manual,
            ModeArg::Random => SelectionMode::Random,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("TDW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let (catalog, data_dir) = (cli.catalog, cli.data_dir);
    let load = move || -> Result<Context> {
        let cfg = config::load_config()?;
        Context::load(&cfg, catalog, data_dir)
    };

    match cli.command {
        Commands::Setup { start, weeks, mode } => {
            commands::setup::run(&load()?, start, weeks, mode.into())
        }
        Commands::Themes => commands::themes::run(&load()?),
        Commands::Select { ids, random } => commands::select::run(&load()?, ids, random),
        Commands::Used { clear } => commands::used::run(&load()?, clear),
        Commands::Plan => commands::plan::run(&load()?),
        Commands::Export { output } => commands::export::run(&load()?, output),
        // Only reads the given file
        Commands::Check { file } => commands::check::run(&file),
    }
}
