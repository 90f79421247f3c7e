//! Subcommand definitions and store dispatch.

use crate::output;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use moodjournal_core::db::open_db;
use moodjournal_core::{
    classify_text, EntryId, EntryRepository, InMemoryEntryRepository, JournalConfig,
    JournalService, JsonFileEntryRepository, SqliteEntryRepository, StoreKind,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "moodjournal",
    version,
    about = "Mood journal - record entries and track emotional tone",
    long_about = "Records free-text journal entries, classifies their emotional tone by \
                  keyword matching and reports per-emotion counts and the recent mood trend.\n\n\
                  Defaults come from MOODJOURNAL_* environment variables; flags override them."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Entry store backend: sqlite, json or memory")]
    pub store: Option<String>,

    #[arg(long, global = true, help = "Path of the SQLite database or JSON file")]
    pub db: Option<PathBuf>,

    #[arg(long, global = true, help = "Do not populate an empty store with demo entries")]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<JournalConfig> {
        let mut config = JournalConfig::from_env()?;
        if let Some(store) = self.store.as_deref() {
            let Some(kind) = StoreKind::parse(store) else {
                bail!("unsupported --store `{store}`; expected sqlite|json|memory");
            };
            if self.db.is_none() && kind != config.store {
                config.db_path = kind.default_path();
            }
            config.store = kind;
        }
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if self.no_seed {
            config.seed_demo = false;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Record a new journal entry")]
    Add(AddArgs),

    #[command(about = "List entries, newest first")]
    List(OutputArgs),

    #[command(about = "Delete an entry by id (no-op when absent)")]
    Delete(DeleteArgs),

    #[command(about = "Show per-emotion counts and recent entries")]
    Stats(OutputArgs),

    #[command(about = "Show the chronological mood trend of the last 20 entries")]
    Trend(OutputArgs),

    #[command(about = "Classify text without storing it")]
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(help = "Entry text")]
    pub text: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Entry id")]
    pub id: EntryId,
}

#[derive(Args)]
pub struct OutputArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[arg(help = "Text to classify")]
    pub text: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

/// Subcommands that need an entry store.
enum StoreCommand {
    Add(AddArgs),
    List(OutputArgs),
    Delete(DeleteArgs),
    Stats(OutputArgs),
    Trend(OutputArgs),
}

impl StoreCommand {
    /// Read-only views are where an unused journal gets the demo entries.
    fn shows_journal(&self) -> bool {
        matches!(self, Self::List(_) | Self::Stats(_) | Self::Trend(_))
    }
}

/// Runs `command` against the store selected by `config`.
pub fn run(command: Commands, config: &JournalConfig) -> Result<()> {
    let command = match command {
        Commands::Classify(args) => {
            return output::print_classification(&classify_text(&args.text), args.json);
        }
        Commands::Add(args) => StoreCommand::Add(args),
        Commands::List(args) => StoreCommand::List(args),
        Commands::Delete(args) => StoreCommand::Delete(args),
        Commands::Stats(args) => StoreCommand::Stats(args),
        Commands::Trend(args) => StoreCommand::Trend(args),
    };

    info!(
        "event=cli_run module=cli status=start store={}",
        config.store.as_str()
    );
    match config.store {
        StoreKind::Sqlite => {
            let conn = open_db(&config.db_path).with_context(|| {
                format!("failed to open database `{}`", config.db_path.display())
            })?;
            let repo = SqliteEntryRepository::try_new(&conn)?;
            execute(JournalService::new(repo), command, config.seed_demo)
        }
        StoreKind::Json => {
            let repo = JsonFileEntryRepository::new(config.db_path.clone());
            execute(JournalService::new(repo), command, config.seed_demo)
        }
        StoreKind::Memory => {
            let repo = InMemoryEntryRepository::new();
            execute(JournalService::new(repo), command, config.seed_demo)
        }
    }
}

fn execute<R: EntryRepository>(
    mut service: JournalService<R>,
    command: StoreCommand,
    seed_demo: bool,
) -> Result<()> {
    if seed_demo && command.shows_journal() {
        service
            .seed_demo_entries()
            .context("failed to seed demo entries")?;
    }

    match command {
        StoreCommand::Add(args) => {
            let entry = service.create_entry(&args.text)?;
            service
                .retire_demo_seed()
                .context("failed to record that the journal is in use")?;
            output::print_created(&entry, args.json)
        }
        StoreCommand::List(args) => output::print_entries(&service.list_entries()?, args.json),
        StoreCommand::Delete(args) => {
            let removed = service.delete_entry(args.id)?;
            output::print_deleted(args.id, removed);
            Ok(())
        }
        StoreCommand::Stats(args) => output::print_stats(&service.mood_stats()?, args.json),
        StoreCommand::Trend(args) => {
            output::print_trend(&service.mood_stats()?.trend, args.json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, Cli};
    use clap::{CommandFactory, Parser};
    use moodjournal_core::db::open_db;
    use moodjournal_core::{
        EntryRepository, JournalConfig, JsonFileEntryRepository, SqliteEntryRepository,
        StoreKind,
    };
    use std::path::{Path, PathBuf};

    const UNKNOWN_ID: &str = "0190a4f0-0000-7000-8000-000000000000";

    fn config_for(store: StoreKind, db_path: &Path) -> JournalConfig {
        JournalConfig {
            store,
            db_path: db_path.to_path_buf(),
            log_level: "info",
            log_dir: None,
            seed_demo: true,
        }
    }

    fn run_args(config: &JournalConfig, args: &[&str]) {
        let cli = Cli::parse_from(std::iter::once("moodjournal").chain(args.iter().copied()));
        run(cli.command, config).unwrap();
    }

    fn stored_ids(config: &JournalConfig) -> Vec<String> {
        let entries = match config.store {
            StoreKind::Sqlite => {
                let conn = open_db(&config.db_path).unwrap();
                SqliteEntryRepository::try_new(&conn)
                    .unwrap()
                    .list_entries()
                    .unwrap()
            }
            StoreKind::Json => JsonFileEntryRepository::new(&config.db_path)
                .list_entries()
                .unwrap(),
            StoreKind::Memory => Vec::new(),
        };
        entries.into_iter().map(|entry| entry.id.to_string()).collect()
    }

    fn assert_cleared_journal_stays_empty(config: &JournalConfig) {
        run_args(config, &["list"]);
        let seeded = stored_ids(config);
        assert_eq!(seeded.len(), 20);

        for id in &seeded {
            run_args(config, &["delete", id.as_str()]);
        }
        for view in ["list", "stats", "trend"] {
            run_args(config, &[view]);
            assert!(stored_ids(config).is_empty(), "`{view}` reseeded the journal");
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_store_and_path() {
        let cli = Cli::parse_from([
            "moodjournal",
            "--store",
            "memory",
            "--db",
            "/tmp/ignored.sqlite3",
            "--no-seed",
            "list",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.db_path, PathBuf::from("/tmp/ignored.sqlite3"));
        assert!(!config.seed_demo);
    }

    #[test]
    fn unknown_store_flag_is_rejected() {
        let cli = Cli::parse_from(["moodjournal", "--store", "mysql", "list"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn delete_requires_a_uuid() {
        assert!(Cli::try_parse_from(["moodjournal", "delete", "42"]).is_err());
    }

    #[test]
    fn delete_on_fresh_store_leaves_it_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(StoreKind::Json, &dir.path().join("journal.json"));

        run_args(&config, &["delete", UNKNOWN_ID]);
        assert!(stored_ids(&config).is_empty());
    }

    #[test]
    fn cleared_json_journal_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        assert_cleared_journal_stays_empty(&config_for(
            StoreKind::Json,
            &dir.path().join("journal.json"),
        ));
    }

    #[test]
    fn cleared_sqlite_journal_is_not_reseeded() {
        let dir = tempfile::tempdir().unwrap();
        assert_cleared_journal_stays_empty(&config_for(
            StoreKind::Sqlite,
            &dir.path().join("journal.sqlite3"),
        ));
    }

    #[test]
    fn add_on_fresh_store_writes_only_that_entry() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(StoreKind::Json, &dir.path().join("journal.json"));

        run_args(&config, &["add", "Quiet evening with a good book"]);
        assert_eq!(stored_ids(&config).len(), 1);

        run_args(&config, &["list"]);
        assert_eq!(stored_ids(&config).len(), 1);
    }
}
