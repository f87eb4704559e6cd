#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Page-level UI state provided via context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}

impl UiState {
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
