//! List-management screens over one record collection.
//!
//! # Responsibility
//! - Drive the Idle / Adding / Editing form lifecycle shared by the
//!   birthdays, tasks and recurring-events screens.
//! - Write the full collection back after every mutation.
//!
//! # Invariants
//! - The collection is loaded once, when the view is opened, and is owned
//!   by the view until it is dropped.
//! - In-memory state only changes after the store accepted the write.
//! - Unknown ids turn edits and deletes into no-ops on the list content.

use crate::model::RecordId;
use crate::store::{new_id, CollectionKey, CollectionStore, KeyValueStore, StoreResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod birthdays;
pub mod recurring_events;
pub mod tasks;

pub use birthdays::{BirthdayForm, BirthdaysView};
pub use recurring_events::{RecurringEventForm, RecurringEventsView};
pub use tasks::{TaskForm, TasksView};

/// A record kind that can be managed by a [`CollectionView`].
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Editable fields shown in the add/edit form.
    type Form: Clone + Default;

    /// Collection this kind is persisted in.
    const KEY: CollectionKey;

    fn id(&self) -> &str;

    /// Builds a new record from form values.
    fn from_form(id: RecordId, form: &Self::Form) -> Self;

    /// Pre-fills a form from this record.
    fn to_form(&self) -> Self::Form;

    /// Returns this record with every form-backed field overwritten.
    fn apply_form(&self, form: &Self::Form) -> Self;
}

/// Form lifecycle state of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode<R> {
    /// List shown, no form open.
    Idle,
    /// Blank form open for a new record.
    Adding,
    /// Form pre-filled from the contained record.
    Editing(R),
}

/// One collection screen: its records, its open form and the store it
/// writes to.
pub struct CollectionView<'store, R: Record, S: KeyValueStore> {
    store: &'store CollectionStore<S>,
    items: Vec<R>,
    mode: ViewMode<R>,
    form: R::Form,
}

impl<'store, R: Record, S: KeyValueStore> CollectionView<'store, R, S> {
    /// Loads the collection and opens the view in `Idle` state.
    pub fn open(store: &'store CollectionStore<S>) -> Self {
        let items = store.load::<R>(R::KEY);
        debug!(
            "event=view_open module=view status=ok key={} count={}",
            R::KEY,
            items.len()
        );
        Self {
            store,
            items,
            mode: ViewMode::Idle,
            form: R::Form::default(),
        }
    }

    /// Records in collection order.
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn mode(&self) -> &ViewMode<R> {
        &self.mode
    }

    pub fn is_form_open(&self) -> bool {
        !matches!(self.mode, ViewMode::Idle)
    }

    pub fn form(&self) -> &R::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut R::Form {
        &mut self.form
    }

    /// Opens a blank form, replacing any form already open.
    pub fn begin_add(&mut self) {
        self.form = R::Form::default();
        self.mode = ViewMode::Adding;
    }

    /// Opens the form pre-filled from record `id`.
    ///
    /// Returns `false` and leaves the view untouched when `id` is unknown.
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(record) = self.find(id).cloned() else {
            return false;
        };
        self.form = record.to_form();
        self.mode = ViewMode::Editing(record);
        true
    }

    /// Closes the form without touching the collection.
    pub fn cancel(&mut self) {
        self.close_form();
    }

    /// Applies the open form, persists the collection and returns to `Idle`.
    ///
    /// Returns the id of the created or edited record, or `None` when no
    /// form was open. On a store error the form stays open and the list
    /// is left as it was.
    pub fn save(&mut self) -> StoreResult<Option<RecordId>> {
        let (id, updated) = match &self.mode {
            ViewMode::Idle => return Ok(None),
            ViewMode::Adding => {
                let id = new_id();
                let mut updated = self.items.clone();
                updated.push(R::from_form(id.clone(), &self.form));
                (id, updated)
            }
            ViewMode::Editing(record) => {
                let id = record.id().to_string();
                let updated = self
                    .items
                    .iter()
                    .map(|item| {
                        if item.id() == id {
                            item.apply_form(&self.form)
                        } else {
                            item.clone()
                        }
                    })
                    .collect::<Vec<_>>();
                (id, updated)
            }
        };

        self.store.save(R::KEY, &updated)?;
        debug!(
            "event=view_save module=view status=ok key={} mode={} count={}",
            R::KEY,
            mode_label(&self.mode),
            updated.len()
        );
        self.items = updated;
        self.close_form();
        Ok(Some(id))
    }

    /// Removes record `id` and persists the collection.
    ///
    /// Returns whether a record was removed. The form state is unchanged.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let updated = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect::<Vec<_>>();
        let removed = updated.len() != self.items.len();

        self.store.save(R::KEY, &updated)?;
        debug!(
            "event=view_delete module=view status=ok key={} removed={} count={}",
            R::KEY,
            removed,
            updated.len()
        );
        self.items = updated;
        Ok(removed)
    }

    fn close_form(&mut self) {
        self.mode = ViewMode::Idle;
        self.form = R::Form::default();
    }
}

fn mode_label<R>(mode: &ViewMode<R>) -> &'static str {
    match mode {
        ViewMode::Idle => "idle",
        ViewMode::Adding => "add",
        ViewMode::Editing(_) => "edit",
    }
}
