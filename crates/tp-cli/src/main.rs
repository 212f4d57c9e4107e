mod commands;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use tp_core::{Config, SessionStore};
use tp_telemetry::logging::{self, LogFormat};

use crate::commands::Context;

/// training-plan CLI -- browse the sales & client service training plan.
#[derive(Parser)]
#[command(name = "tp", version, about)]
struct Cli {
    /// Config file to use instead of ~/.training-plan/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit log lines as JSON on stderr.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show headline numbers (default when no subcommand is given).
    Stats {
        /// Print the numbers as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Every session in month and date order.
    List {
        /// Theme to show, or "All".
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Sessions grouped by theme.
    Clusters {
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Completed sessions, then each upcoming month with its focus.
    Timeline {
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// A month grid with the sessions placed on their dates.
    Calendar {
        /// Month to show, as YYYY-MM.
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long)]
        theme: Option<String>,
    },

    /// Sessions scheduled on one date.
    On {
        /// Date as YYYY-MM-DD.
        date: String,
    },

    /// Full details of one session.
    Show {
        /// Session id, e.g. `aug-product`.
        id: String,
    },

    /// Sessions per trainer, busiest first.
    Trainers,

    /// Sessions as pretty-printed JSON.
    Export {
        #[arg(short, long)]
        theme: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let format = LogFormat::from_json_flag(cli.json_logs || config.general.json_logs);
    logging::init("tp", &config.general.log_level, format);

    let store = SessionStore::builtin();
    let duplicates = store.duplicate_ids();
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "session ids are not unique");
    }
    let ctx = Context::new(store, config);

    let output = match cli.command {
        None | Some(Commands::Stats { json: false }) => commands::stats::render(&ctx),
        Some(Commands::Stats { json: true }) => commands::stats::render_json(&ctx)?,
        Some(Commands::List { theme }) => commands::list::render(&ctx, &ctx.filter(theme.as_deref())),
        Some(Commands::Clusters { theme }) => {
            commands::clusters::render(&ctx, &ctx.filter(theme.as_deref()))
        }
        Some(Commands::Timeline { theme }) => {
            commands::timeline::render(&ctx, &ctx.filter(theme.as_deref()))
        }
        Some(Commands::Calendar { month, theme }) => {
            commands::calendar::render(&ctx, month.as_deref(), &ctx.filter(theme.as_deref()))?
        }
        Some(Commands::On { date }) => commands::on::render(&ctx, &date)?,
        Some(Commands::Show { id }) => commands::show::render(&ctx, &id)?,
        Some(Commands::Trainers) => commands::trainers::render(&ctx),
        Some(Commands::Export { theme }) => {
            commands::export::render(&ctx, &ctx.filter(theme.as_deref()))?
        }
    };

    print!("{output}");
    Ok(())
}
