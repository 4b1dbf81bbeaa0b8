//! Local list state mirrored from a resource endpoint.
//!
//! A [`RecordList`] starts out loading, is filled by the first fetch and afterwards only
//! changes when a create, update or delete request settles successfully. Every settled
//! request produces a [`Notice`] for the toast area. Failed requests never touch the list.

use std::fmt::Display;

/// A row with a stable identifier
pub trait Record {
    fn id(&self) -> i32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Outcome of a settled request, shown to the user as a toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Sucesso".to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Erro".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Per-resource notice texts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Messages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub fetch_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordList<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl<T: Record> RecordList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the list with freshly fetched rows, already ordered newest first
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// Settles the initial fetch; only a failure produces a notice
    pub fn settle_fetch<E: Display>(
        &mut self,
        result: Result<Vec<T>, E>,
        messages: &Messages,
    ) -> Option<Notice> {
        match result {
            Ok(items) => {
                self.replace_all(items);
                None
            }
            Err(err) => {
                self.loading = false;
                Some(Notice::error(format!("{}: {}", messages.fetch_failed, err)))
            }
        }
    }

    /// Prepends the created row on success
    pub fn settle_create<E: Display>(&mut self, result: Result<T, E>, messages: &Messages) -> Notice {
        match result {
            Ok(item) => {
                self.items.insert(0, item);
                Notice::success(messages.created)
            }
            Err(err) => Notice::error(format!("{}: {}", messages.create_failed, err)),
        }
    }

    /// Swaps the row with the same id on success, keeping its position
    pub fn settle_update<E: Display>(&mut self, result: Result<T, E>, messages: &Messages) -> Notice {
        match result {
            Ok(item) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.id() == item.id()) {
                    *existing = item;
                }
                Notice::success(messages.updated)
            }
            Err(err) => Notice::error(format!("{}: {}", messages.update_failed, err)),
        }
    }

    /// Drops the row with `id` on success
    pub fn settle_delete<E: Display>(
        &mut self,
        id: i32,
        result: Result<(), E>,
        messages: &Messages,
    ) -> Notice {
        match result {
            Ok(()) => {
                self.items.retain(|i| i.id() != id);
                Notice::success(messages.deleted)
            }
            Err(err) => Notice::error(format!("{}: {}", messages.delete_failed, err)),
        }
    }
}
