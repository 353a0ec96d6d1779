//! Tasks screen.

use super::{CollectionView, Record};
use crate::model::task::{Task, Urgency};
use crate::model::RecordId;
use crate::store::CollectionKey;

/// Editable task fields. A blank form has `low` urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub text: String,
    pub notes: String,
    pub urgency: Urgency,
    /// Empty when no target date is set.
    pub target_date: String,
}

impl TaskForm {
    fn target_date(&self) -> Option<String> {
        if self.target_date.trim().is_empty() {
            None
        } else {
            Some(self.target_date.clone())
        }
    }
}

pub type TasksView<'store, S> = CollectionView<'store, Task, S>;

impl Record for Task {
    type Form = TaskForm;

    const KEY: CollectionKey = CollectionKey::Tasks;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_form(id: RecordId, form: &TaskForm) -> Self {
        Self {
            id,
            text: form.text.clone(),
            notes: form.notes.clone(),
            urgency: form.urgency,
            target_date: form.target_date(),
        }
    }

    fn to_form(&self) -> TaskForm {
        TaskForm {
            text: self.text.clone(),
            notes: self.notes.clone(),
            urgency: self.urgency,
            target_date: self.target_date.clone().unwrap_or_default(),
        }
    }

    fn apply_form(&self, form: &TaskForm) -> Self {
        Self {
            text: form.text.clone(),
            notes: form.notes.clone(),
            urgency: form.urgency,
            target_date: form.target_date(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskForm;
    use crate::model::task::{Task, Urgency};
    use crate::view::Record;

    #[test]
    fn blank_target_date_is_stored_as_absent() {
        let form = TaskForm {
            text: "Water plants".to_string(),
            target_date: "   ".to_string(),
            ..TaskForm::default()
        };

        let task = Task::from_form("t1".to_string(), &form);
        assert_eq!(task.urgency, Urgency::Low);
        assert_eq!(task.target_date, None);
        assert_eq!(task.to_form().target_date, "");
    }
}
