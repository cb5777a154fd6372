//! Delete-confirmation modal.
//!
//! Deleting a profile is gated on the user typing the profile's full name
//! exactly; the confirm control stays disabled until the input matches.

use faculty_profiles_client::api::{ProfileApi, RequestOptions};
use faculty_profiles_client::cancel::CancelGuard;
use faculty_profiles_client::error::serialize_error;
use faculty_profiles_core::config::PageConfig;
use faculty_profiles_core::constants::PROFILES_LANDING_PATH;

/// Where keyboard focus should land after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The confirmation text input, right after the modal opens.
    ConfirmInput,
    /// The button that opened the modal, after it closes.
    OpenButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Just opened, waiting for the host to finish mounting so focus can
    /// land on the confirmation input.
    Loading,
    /// Waiting for the user to type the confirmation and confirm.
    Ready,
    /// The delete request is in flight; confirm is a no-op.
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open {
        phase: ModalPhase,
        input: String,
        error: Option<String>,
    },
}

/// What the host shell should do after a confirm attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The profile is gone; navigate away from its pages.
    Deleted { redirect: String },
    /// Nothing changed: the gate was not satisfied, a delete was already in
    /// flight, the request was cancelled, or it failed (the failure message
    /// is shown inside the modal).
    Ignored,
}

/// Controller for the delete-confirmation modal.
#[derive(Debug)]
pub struct DeleteProfileModal {
    profile_id: Option<String>,
    full_name: String,
    can_delete: bool,
    state: ModalState,
    guard: CancelGuard,
}

impl DeleteProfileModal {
    #[must_use]
    pub fn new(page: &PageConfig) -> Self {
        Self {
            profile_id: page.profile.id.clone(),
            full_name: page.profile.full_name(),
            can_delete: page.permissions.can_delete,
            state: ModalState::Closed,
            guard: CancelGuard::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// The name the user must type to arm the confirm control.
    #[must_use]
    pub fn expected_name(&self) -> &str {
        &self.full_name
    }

    /// Whether the open button renders at all. Only persisted profiles the
    /// user may delete get one.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.can_delete && self.profile_id.is_some()
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open {
            phase: ModalPhase::Loading,
            input: String::new(),
            error: None,
        };
    }

    /// Called once the host has mounted the modal; moves it to ready and
    /// tells the host where focus belongs.
    pub fn mounted(&mut self) -> FocusTarget {
        if let ModalState::Open { phase, .. } = &mut self.state
            && *phase == ModalPhase::Loading
        {
            *phase = ModalPhase::Ready;
        }
        FocusTarget::ConfirmInput
    }

    /// Closes and resets the modal, discarding any typed input.
    pub fn close(&mut self) -> FocusTarget {
        self.state = ModalState::Closed;
        FocusTarget::OpenButton
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        if let ModalState::Open { phase, input, .. } = &mut self.state
            && *phase == ModalPhase::Ready
        {
            *input = value.into();
        }
    }

    /// The typed name must match the full name exactly, case included.
    #[must_use]
    pub fn confirm_enabled(&self) -> bool {
        matches!(
            &self.state,
            ModalState::Open {
                phase: ModalPhase::Ready,
                input,
                ..
            } if *input == self.full_name
        )
    }

    /// Runs the delete if the confirmation gate is satisfied.
    ///
    /// On success the modal closes and the caller navigates to the returned
    /// redirect. On failure the modal stays open with the failure message; a
    /// cancelled request leaves no trace.
    pub async fn confirm(&mut self, api: &ProfileApi) -> DeleteOutcome {
        if !self.confirm_enabled() {
            return DeleteOutcome::Ignored;
        }
        let Some(id) = self.profile_id.clone() else {
            return DeleteOutcome::Ignored;
        };

        if let ModalState::Open { phase, error, .. } = &mut self.state {
            *phase = ModalPhase::Deleting;
            *error = None;
        }

        let token = self.guard.token();
        match token.wrap(api.delete(&id, &RequestOptions::new())).await {
            Ok(()) => {
                tracing::info!(profile_id = %id, "profile deleted");
                self.state = ModalState::Closed;
                DeleteOutcome::Deleted {
                    redirect: PROFILES_LANDING_PATH.to_string(),
                }
            }
            Err(error) if error.is_cancelled() => DeleteOutcome::Ignored,
            Err(error) => {
                tracing::error!(profile_id = %id, %error, "profile delete failed");
                let message = serialize_error(&error)
                    .message
                    .unwrap_or_else(|| "The profile could not be deleted.".to_string());
                if let ModalState::Open { phase, error, .. } = &mut self.state {
                    *phase = ModalPhase::Ready;
                    *error = Some(message);
                }
                DeleteOutcome::Ignored
            }
        }
    }
}
