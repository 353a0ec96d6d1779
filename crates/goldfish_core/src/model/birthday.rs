//! Birthday record.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// A yearly birthday reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthday {
    pub id: RecordId,
    /// Person name, free text.
    pub name: String,
    /// Day and month as `DD/MM`, without a year. Not validated.
    pub date: String,
}
