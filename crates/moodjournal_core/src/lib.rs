//! Core domain logic for the mood journal.
//!
//! Classifies journal text, stores entries behind a swappable repository
//! and derives emotion statistics and the mood trend from a snapshot.

pub mod analytics;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sentiment;
pub mod service;

pub use analytics::stats::{aggregate, recent_entries, EmotionStat, MoodStats};
pub use analytics::trend::{build_trend, TrendPoint, TREND_WINDOW};
pub use config::{ConfigError, JournalConfig, StoreKind};
pub use logging::{default_log_level, init_logging};
pub use model::emotion::Emotion;
pub use model::entry::{Entry, EntryId, EntryValidationError};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult};
pub use repo::json_repo::JsonFileEntryRepository;
pub use repo::memory_repo::InMemoryEntryRepository;
pub use repo::sqlite_repo::SqliteEntryRepository;
pub use sentiment::classifier::{classify, classify_text, Classification};
pub use service::journal_service::{JournalResult, JournalService, JournalServiceError};
