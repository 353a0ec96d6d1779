//! Household record model: birthdays, tasks and recurring events.
//!
//! # Responsibility
//! - Define the three flat record shapes persisted as JSON collections.
//! - Keep the JSON layout compatible with collections written by earlier
//!   GoldFish Hub builds (camelCase keys, `periodicity` tag).
//!
//! # Invariants
//! - Every record carries an opaque `id`, unique within its collection.
//! - Records never reference each other.
//! - Free-text fields are stored verbatim; date-like strings are not
//!   validated.

pub mod birthday;
pub mod recurring_event;
pub mod task;

/// Opaque record identifier.
///
/// Kept as a plain string so ids produced by other writers still load.
pub type RecordId = String;
