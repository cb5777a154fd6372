//! The destructive-actions section at the bottom of the edit form.

use faculty_profiles_core::config::PageConfig;

use super::delete_modal::DeleteProfileModal;

/// Groups the destructive actions behind their permission gates. The section
/// renders when the user holds any destructive permission; the delete action
/// itself additionally needs `can_delete` and a persisted profile.
#[derive(Debug)]
pub struct DangerZone {
    can_rename: bool,
    delete_modal: DeleteProfileModal,
}

impl DangerZone {
    #[must_use]
    pub fn new(page: &PageConfig) -> Self {
        Self {
            can_rename: page.permissions.can_rename,
            delete_modal: DeleteProfileModal::new(page),
        }
    }

    /// Whether the section renders at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.can_rename || self.delete_modal.is_available()
    }

    /// Whether the delete action renders inside the section.
    #[must_use]
    pub fn delete_available(&self) -> bool {
        self.delete_modal.is_available()
    }

    #[must_use]
    pub fn delete_modal(&self) -> &DeleteProfileModal {
        &self.delete_modal
    }

    pub fn delete_modal_mut(&mut self) -> &mut DeleteProfileModal {
        &mut self.delete_modal
    }
}
