//! Command-line presentation adapter for the dinner log.
//!
//! # Responsibility
//! - Map subcommands onto `DinnerService` use-cases.
//! - Capture wall-clock `now` and render rows as plain text.

mod render;

use chrono::Local;
use clap::{Parser, Subcommand};
use dinnerlog_core::db::open_db;
use dinnerlog_core::{
    core_version, default_log_level, init_logging, DinnerId, DinnerService, SqliteDinnerStore,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DB_PATH_ENV: &str = "DINNERLOG_DB_PATH";
const DB_FILE_NAME: &str = "dinnerlog.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "dinnerlog", about = "Log dinners and browse them by date or ingredient")]
struct Cli {
    /// SQLite database file. Falls back to $DINNERLOG_DB_PATH, then the temp dir.
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new dinner.
    Add {
        #[arg(long)]
        name: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Comma-separated list.
        #[arg(long, default_value = "")]
        ingredients: String,
    },
    /// Dinners in the trailing week or month, most recent first.
    Recent {
        #[arg(long, default_value = "week")]
        range: String,
    },
    /// Dinners containing one exact ingredient.
    Search { ingredient: String },
    /// All dinners, alphabetical by name.
    List,
    /// Distinct ingredients seen so far.
    Ingredients,
    /// Change the name, date or ingredients of one dinner.
    Edit {
        id: DinnerId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        date: Option<String>,
        /// Comma-separated list; replaces the whole list.
        #[arg(long)]
        ingredients: Option<String>,
    },
    /// Append dinners from a legacy JSON payload file.
    Import { file: PathBuf },
    /// Print all dinners as a legacy JSON payload.
    Export,
    /// Print the core version.
    Version,
}

impl Command {
    fn label(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Recent { .. } => "recent",
            Self::Search { .. } => "search",
            Self::List => "list",
            Self::Ingredients => "ingredients",
            Self::Edit { .. } => "edit",
            Self::Import { .. } => "import",
            Self::Export => "export",
            Self::Version => "version",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dinnerlog: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    info!(
        "event=cli_command module=cli status=start command={}",
        cli.command.label()
    );
    let mut conn = open_db(resolve_db_path(cli.db))?;
    let mut service = DinnerService::new(SqliteDinnerStore::try_new(&mut conn)?);

    match cli.command {
        Command::Add {
            name,
            date,
            ingredients,
        } => {
            let created = service.add_dinner(name, date, &ingredients)?;
            println!("Dinner added successfully!");
            println!("{}", render::dinner_row(&created));
        }
        Command::Recent { range } => {
            let now = Local::now().naive_local();
            render::print_rows(&service.recent(&range, now)?);
        }
        Command::Search { ingredient } => {
            render::print_rows(&service.with_ingredient(&ingredient)?);
        }
        Command::List => render::print_rows(&service.all_by_name()?),
        Command::Ingredients => {
            for ingredient in service.ingredient_suggestions()? {
                println!("{ingredient}");
            }
        }
        Command::Edit {
            id,
            name,
            date,
            ingredients,
        } => {
            let record = service.edit(id, name, date, ingredients.as_deref())?;
            println!("{}", render::dinner_row(&record));
        }
        Command::Import { file } => {
            let payload = std::fs::read_to_string(&file)?;
            let count = service.import_legacy(&payload)?;
            println!("Imported {count} dinner(s).");
        }
        Command::Export => println!("{}", service.export_legacy()?),
        Command::Version => println!("dinnerlog_core version={}", core_version()),
    }

    Ok(())
}

fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(DB_FILE_NAME)
}
