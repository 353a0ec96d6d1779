//! Birthdays screen.

use super::{CollectionView, Record};
use crate::model::birthday::Birthday;
use crate::model::RecordId;
use crate::store::CollectionKey;

/// Editable birthday fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayForm {
    pub name: String,
    /// `DD/MM`, stored as typed.
    pub date: String,
}

pub type BirthdaysView<'store, S> = CollectionView<'store, Birthday, S>;

impl Record for Birthday {
    type Form = BirthdayForm;

    const KEY: CollectionKey = CollectionKey::Birthdays;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_form(id: RecordId, form: &BirthdayForm) -> Self {
        Self {
            id,
            name: form.name.clone(),
            date: form.date.clone(),
        }
    }

    fn to_form(&self) -> BirthdayForm {
        BirthdayForm {
            name: self.name.clone(),
            date: self.date.clone(),
        }
    }

    fn apply_form(&self, form: &BirthdayForm) -> Self {
        Self {
            name: form.name.clone(),
            date: form.date.clone(),
            ..self.clone()
        }
    }
}
