//! Home dashboard derivation.
//!
//! # Responsibility
//! - Compute upcoming birthdays, urgent tasks and today's events.
//!
//! # Invariants
//! - Every call to [`DashboardService::summary`] reloads all three
//!   collections; nothing is cached between visits.
//! - Birthday lists and urgent-task lists hold at most three entries,
//!   in collection order.
//! - Birthdays are compared as raw `DD/MM` strings. This is not calendar
//!   order (`05/03` sorts before `10/02`) and is kept that way so the
//!   dashboard matches what users already see.

use crate::model::birthday::Birthday;
use crate::model::recurring_event::{Recurrence, RecurringEvent};
use crate::model::task::Task;
use crate::store::{CollectionKey, CollectionStore, KeyValueStore};
use chrono::{Local, NaiveDate};
use log::debug;

pub const UPCOMING_BIRTHDAYS_LIMIT: usize = 3;
pub const URGENT_TASKS_LIMIT: usize = 3;

/// The current date in the string forms the dashboard compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Today {
    /// `DD/MM`, zero padded.
    pub day_month: String,
    /// `DD`, zero padded.
    pub day_of_month: String,
    /// English weekday name, e.g. `Monday`.
    pub weekday: String,
}

impl Today {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day_month: date.format("%d/%m").to_string(),
            day_of_month: date.format("%d").to_string(),
            weekday: date.format("%A").to_string(),
        }
    }

    /// Reads the local wall clock.
    pub fn local() -> Self {
        Self::from_date(Local::now().date_naive())
    }
}

/// Derived home-screen content. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub upcoming_birthdays: Vec<Birthday>,
    pub urgent_tasks: Vec<Task>,
    pub todays_events: Vec<RecurringEvent>,
}

/// Builds [`DashboardSummary`] values from a collection store.
pub struct DashboardService<'store, S: KeyValueStore> {
    store: &'store CollectionStore<S>,
}

impl<'store, S: KeyValueStore> DashboardService<'store, S> {
    pub fn new(store: &'store CollectionStore<S>) -> Self {
        Self { store }
    }

    /// Loads every collection and derives the dashboard for `today`.
    pub fn summary(&self, today: &Today) -> DashboardSummary {
        let birthdays = self.store.load::<Birthday>(CollectionKey::Birthdays);
        let tasks = self.store.load::<Task>(CollectionKey::Tasks);
        let events = self.store.load::<RecurringEvent>(CollectionKey::RecurringEvents);

        let summary = DashboardSummary {
            upcoming_birthdays: upcoming_birthdays(&birthdays, today),
            urgent_tasks: urgent_tasks(&tasks),
            todays_events: todays_events(&events, today),
        };
        debug!(
            "event=dashboard_summary module=service status=ok birthdays={} tasks={} events={}",
            summary.upcoming_birthdays.len(),
            summary.urgent_tasks.len(),
            summary.todays_events.len()
        );
        summary
    }
}

/// First birthdays whose `DD/MM` string sorts at or after today's.
pub fn upcoming_birthdays(birthdays: &[Birthday], today: &Today) -> Vec<Birthday> {
    birthdays
        .iter()
        .filter(|birthday| birthday.date.as_str() >= today.day_month.as_str())
        .take(UPCOMING_BIRTHDAYS_LIMIT)
        .cloned()
        .collect()
}

/// First high-urgency tasks.
pub fn urgent_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.is_urgent())
        .take(URGENT_TASKS_LIMIT)
        .cloned()
        .collect()
}

/// All events that fall on `today`, in collection order.
pub fn todays_events(events: &[RecurringEvent], today: &Today) -> Vec<RecurringEvent> {
    events
        .iter()
        .filter(|event| occurs_on(&event.recurrence, today))
        .cloned()
        .collect()
}

/// Whether a recurrence fires on `today`.
///
/// Monthly events match either the bare day of month the editor asks for
/// or a full `DD/MM` written by older builds.
pub fn occurs_on(recurrence: &Recurrence, today: &Today) -> bool {
    match recurrence {
        Recurrence::Daily => true,
        Recurrence::Weekly { day_of_week } => day_of_week
            .as_deref()
            .is_some_and(|day| day.eq_ignore_ascii_case(&today.weekday)),
        Recurrence::Monthly {
            specific_date: Some(date),
        } => *date == today.day_of_month || *date == today.day_month,
        Recurrence::Yearly {
            specific_date: Some(date),
        } => *date == today.day_month,
        Recurrence::Monthly {
            specific_date: None,
        }
        | Recurrence::Yearly {
            specific_date: None,
        } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::Today;
    use chrono::NaiveDate;

    #[test]
    fn today_formats_zero_padded_parts() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
        let today = Today::from_date(date);
        assert_eq!(today.day_month, "04/03");
        assert_eq!(today.day_of_month, "04");
        assert_eq!(today.weekday, "Monday");
    }
}
