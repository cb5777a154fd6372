pub mod danger_zone;
pub mod delete_modal;
pub mod identifiers;
pub mod profile;
pub mod uploader;

pub use danger_zone::DangerZone;
pub use delete_modal::{DeleteOutcome, DeleteProfileModal, FocusTarget, ModalPhase, ModalState};
pub use identifiers::IdentifiersField;
pub use profile::{
    ProfileForm, ProfileFormValues, SubmissionState, SubmitOutcome, deserialize_profile,
    serialize_profile,
};
pub use uploader::{ArtifactKind, ArtifactUploader, UploadStatus};
