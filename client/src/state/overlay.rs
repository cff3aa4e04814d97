//! Open/closed state for the AR overlay owned by a panel.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::components::surfaces::ModelDescriptor;

/// `None` while closed; the model to present while open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    pub model: Option<ModelDescriptor>,
}

impl OverlayState {
    pub fn open(&mut self, model: ModelDescriptor) {
        self.model = Some(model);
    }

    pub fn close(&mut self) {
        self.model = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.model.is_some()
    }
}
