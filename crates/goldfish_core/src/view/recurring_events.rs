//! Recurring events screen.
//!
//! # Invariants
//! - Saving normalizes the auxiliary fields to the chosen periodicity:
//!   `day_of_week` survives only for weekly events, `specific_date` only
//!   for monthly and yearly ones.

use super::{CollectionView, Record};
use crate::model::recurring_event::{Periodicity, Recurrence, RecurringEvent, DEFAULT_EVENT_TIME};
use crate::model::RecordId;
use crate::store::CollectionKey;

/// Editable event fields, flat as in the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringEventForm {
    pub text: String,
    pub periodicity: Periodicity,
    pub day_of_week: Option<String>,
    /// Day of month (`DD`) for monthly events, `DD/MM` for yearly ones.
    pub specific_date: Option<String>,
    pub time: Option<String>,
}

impl Default for RecurringEventForm {
    fn default() -> Self {
        Self {
            text: String::new(),
            periodicity: Periodicity::Daily,
            day_of_week: None,
            specific_date: None,
            time: Some(DEFAULT_EVENT_TIME.to_string()),
        }
    }
}

impl RecurringEventForm {
    /// Switches periodicity and clears both auxiliary fields.
    pub fn set_periodicity(&mut self, periodicity: Periodicity) {
        self.periodicity = periodicity;
        self.day_of_week = None;
        self.specific_date = None;
    }

    /// Recurrence the form would save, with inapplicable fields dropped.
    pub fn recurrence(&self) -> Recurrence {
        Recurrence::normalized(
            self.periodicity,
            self.day_of_week.clone(),
            self.specific_date.clone(),
        )
    }
}

pub type RecurringEventsView<'store, S> = CollectionView<'store, RecurringEvent, S>;

impl Record for RecurringEvent {
    type Form = RecurringEventForm;

    const KEY: CollectionKey = CollectionKey::RecurringEvents;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_form(id: RecordId, form: &RecurringEventForm) -> Self {
        Self {
            id,
            text: form.text.clone(),
            recurrence: form.recurrence(),
            time: form.time.clone(),
        }
    }

    fn to_form(&self) -> RecurringEventForm {
        let time = match self.time.as_deref() {
            Some(time) if !time.is_empty() => time.to_string(),
            _ => DEFAULT_EVENT_TIME.to_string(),
        };
        RecurringEventForm {
            text: self.text.clone(),
            periodicity: self.recurrence.periodicity(),
            day_of_week: self.recurrence.day_of_week().map(str::to_string),
            specific_date: self.recurrence.specific_date().map(str::to_string),
            time: Some(time),
        }
    }

    fn apply_form(&self, form: &RecurringEventForm) -> Self {
        Self {
            text: form.text.clone(),
            recurrence: form.recurrence(),
            time: form.time.clone(),
            ..self.clone()
        }
    }
}
