//! List state shared by the rooms and menu panels.
//!
//! DESIGN
//! ======
//! Rendering is driven only by `loading` and the item count. A failed load
//! still settles to an empty list; the error is kept for logging and never
//! blocks the empty-state copy.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use crate::net::error::ApiError;

/// What a list panel should draw right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Items,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None }
    }
}

impl<T> ResourceState<T> {
    /// Apply the final outcome of a load. Always clears `loading`.
    pub fn settle(&mut self, outcome: Result<Vec<T>, ApiError>) {
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        if self.loading {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items
        }
    }
}
