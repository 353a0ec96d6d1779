//! Core logic for GoldFish Hub, a personal household organizer.
//! Tracks birthdays, tasks and recurring events in a local store and
//! derives what matters today.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod service;
pub mod shell;
pub mod store;
pub mod view;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::birthday::Birthday;
pub use model::recurring_event::{Periodicity, Recurrence, RecurringEvent, WEEKDAYS};
pub use model::task::{Task, Urgency};
pub use model::RecordId;
pub use service::dashboard_service::{DashboardService, DashboardSummary, Today};
pub use shell::{Route, Shell, TABS};
pub use store::{
    new_id, CollectionKey, CollectionStore, KeyValueStore, SqliteKeyValueStore, StoreError,
    StoreResult,
};
pub use view::{
    BirthdayForm, BirthdaysView, CollectionView, Record, RecurringEventForm,
    RecurringEventsView, TaskForm, TasksView, ViewMode,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
