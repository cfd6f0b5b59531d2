pub const UNSAVED_CHANGES_MESSAGE: &str =
    "You have unsaved changes. Are you sure you want to leave?";

/// Tracks whether the user has entered anything since the page was loaded.
///
/// Once marked, the state stays marked for the lifetime of the page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnsavedChanges(bool);

impl UnsavedChanges {
    pub fn mark(&mut self) {
        self.0 = true;
    }

    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.0
    }

    /// Message to request a confirmation with before the page is left, if any.
    #[must_use]
    pub fn before_unload(&self) -> Option<&'static str> {
        self.0.then_some(UNSAVED_CHANGES_MESSAGE)
    }
}
