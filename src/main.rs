mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use diary_core::{Diary, Mood, NoteStore, parse_date, today};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::commands::write::Source;

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Write and browse your daily journal entries")]
struct Cli {
    /// Diary directory (overrides the config file and DIARY_DIR)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write or replace the entry for a date (opens $EDITOR by default)
    Write {
        /// Date of the entry (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Entry text, instead of opening an editor
        #[arg(short, long, conflicts_with = "stdin")]
        text: Option<String>,

        /// Read the entry text from standard input
        #[arg(long)]
        stdin: bool,

        /// Tag the entry with a mood (e.g. "good", "tired", "😄")
        #[arg(short, long)]
        mood: Option<String>,

        /// Don't ask before clearing an existing entry
        #[arg(short, long)]
        force: bool,
    },
    /// Show the entry for a date
    Show {
        /// Date of the entry (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// List saved entries, newest first
    List {
        /// Print the full text of every entry
        #[arg(short, long)]
        expand: bool,

        /// Only show the N most recent entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show, set or clear the mood of an entry
    Mood {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// New mood (omit to show the current one)
        mood: Option<String>,

        /// Remove the mood tag
        #[arg(long, conflicts_with = "mood")]
        clear: bool,
    },
    /// Show config and diary paths
    Config,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Write {
            date,
            text,
            stdin,
            mood,
            force,
        } => {
            let store = open_store(cli.dir)?;
            let date = resolve_date(date.as_deref())?;
            let mood = mood.as_deref().map(str::parse::<Mood>).transpose()?;
            let source = match (text, stdin) {
                (Some(text), _) => Source::Text(text),
                (None, true) => Source::Stdin,
                (None, false) => Source::Editor,
            };
            commands::write::run(&store, date, source, mood, force)
        }
        Commands::Show { date } => {
            let store = open_store(cli.dir)?;
            commands::show::run(&store, resolve_date(date.as_deref())?)
        }
        Commands::List { expand, limit } => {
            let store = open_store(cli.dir)?;
            commands::list::run(&store, expand, limit)
        }
        Commands::Mood { date, mood, clear } => {
            let store = open_store(cli.dir)?;
            let date = parse_date(&date)?;
            let mood = mood.as_deref().map(str::parse::<Mood>).transpose()?;
            commands::mood::run(&store, date, mood, clear)
        }
        Commands::Config => commands::config::run(&load_diary(cli.dir)?),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_diary(dir: Option<PathBuf>) -> Result<Diary> {
    match dir {
        Some(dir) => Ok(Diary::at(dir)),
        None => Ok(Diary::load()?),
    }
}

fn open_store(dir: Option<PathBuf>) -> Result<NoteStore> {
    let store = load_diary(dir)?.store()?;
    debug!(root = %store.root().display(), "opened diary");
    Ok(store)
}

fn resolve_date(arg: Option<&str>) -> Result<NaiveDate> {
    let date = match arg {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    debug!(%date, from_arg = arg.is_some(), "resolved entry date");
    Ok(date)
}
