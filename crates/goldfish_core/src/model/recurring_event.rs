//! Recurring event record.
//!
//! # Responsibility
//! - Model the recurrence class as a tagged variant carrying only the
//!   fields relevant to it.
//! - Preserve the flat on-disk shape: a `periodicity` tag next to optional
//!   `dayOfWeek` / `specificDate` keys.
//!
//! # Invariants
//! - A weekly event never carries a specific date and vice versa.
//! - Keys left over from another periodicity are dropped when loading.

use super::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Weekday names offered by the event editor, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Default time pre-filled by the event editor.
pub const DEFAULT_EVENT_TIME: &str = "09:00";

/// Recurrence class of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Periodicity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl Display for Periodicity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("unknown periodicity `{s}`; expected daily|weekly|monthly|yearly")
        })
    }
}

/// Periodicity together with the auxiliary field it uses.
///
/// Payload fields are optional because the editor allows saving a weekly
/// event before a day is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "periodicity", rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    Daily,
    Weekly {
        #[serde(rename = "dayOfWeek", default, skip_serializing_if = "Option::is_none")]
        day_of_week: Option<String>,
    },
    /// `specific_date` is a day of month (`DD`) as entered in the editor.
    Monthly {
        #[serde(rename = "specificDate", default, skip_serializing_if = "Option::is_none")]
        specific_date: Option<String>,
    },
    /// `specific_date` is `DD/MM`.
    Yearly {
        #[serde(rename = "specificDate", default, skip_serializing_if = "Option::is_none")]
        specific_date: Option<String>,
    },
}

impl Recurrence {
    /// Builds the variant for `periodicity`, discarding whichever of the
    /// supplied fields does not apply to it.
    pub fn normalized(
        periodicity: Periodicity,
        day_of_week: Option<String>,
        specific_date: Option<String>,
    ) -> Self {
        match periodicity {
            Periodicity::Daily => Self::Daily,
            Periodicity::Weekly => Self::Weekly { day_of_week },
            Periodicity::Monthly => Self::Monthly { specific_date },
            Periodicity::Yearly => Self::Yearly { specific_date },
        }
    }

    pub fn periodicity(&self) -> Periodicity {
        match self {
            Self::Daily => Periodicity::Daily,
            Self::Weekly { .. } => Periodicity::Weekly,
            Self::Monthly { .. } => Periodicity::Monthly,
            Self::Yearly { .. } => Periodicity::Yearly,
        }
    }

    pub fn day_of_week(&self) -> Option<&str> {
        match self {
            Self::Weekly { day_of_week } => day_of_week.as_deref(),
            _ => None,
        }
    }

    pub fn specific_date(&self) -> Option<&str> {
        match self {
            Self::Monthly { specific_date } | Self::Yearly { specific_date } => {
                specific_date.as_deref()
            }
            _ => None,
        }
    }
}

/// An event repeating on a fixed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringEvent {
    pub id: RecordId,
    pub text: String,
    #[serde(flatten)]
    pub recurrence: Recurrence,
    /// `HH:MM`, 24-hour clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl RecurringEvent {
    /// Human-readable schedule, e.g. `Every Monday at 09:00`.
    pub fn schedule_label(&self) -> String {
        let base = match &self.recurrence {
            Recurrence::Daily => "Every day".to_string(),
            Recurrence::Weekly {
                day_of_week: Some(day),
            } => format!("Every {day}"),
            Recurrence::Weekly { day_of_week: None } => "Every week".to_string(),
            Recurrence::Monthly {
                specific_date: Some(date),
            } => format!("Monthly on {date}"),
            Recurrence::Monthly {
                specific_date: None,
            } => "Monthly".to_string(),
            Recurrence::Yearly {
                specific_date: Some(date),
            } => format!("Yearly on {date}"),
            Recurrence::Yearly {
                specific_date: None,
            } => "Yearly".to_string(),
        };

        match self.time.as_deref() {
            Some(time) if !time.is_empty() => format!("{base} at {time}"),
            _ => base,
        }
    }
}
