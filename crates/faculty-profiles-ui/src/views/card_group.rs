//! The frontpage "latest profiles" card group.
//!
//! Read-only: one paged fetch on mount, five newest profiles rendered as
//! cards, a placeholder grid while loading and an info message when the
//! result set is empty.

use faculty_profiles_client::api::{ListQuery, ProfileApi, RequestOptions};
use faculty_profiles_client::cancel::CancelGuard;
use faculty_profiles_core::constants::PROFILES_LANDING_PATH;
use faculty_profiles_core::types::Profile;

/// Truncates to at most `length` characters, ellipsis included.
fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let kept: String = text.chars().take(length.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub id: String,
    /// Landing-page detail URL, derived from the id.
    pub href: String,
    pub photo_url: String,
    /// Full name, truncated to fit the card header.
    pub header: String,
    pub biography: Option<String>,
}

impl ProfileCard {
    #[must_use]
    pub fn from_profile(profile: &Profile, default_photo: &str) -> Self {
        let id = profile.id.clone().unwrap_or_default();
        Self {
            href: format!("{PROFILES_LANDING_PATH}/{id}"),
            id,
            photo_url: profile
                .links
                .photo
                .clone()
                .unwrap_or_else(|| default_photo.to_string()),
            header: truncate(&profile.full_name(), 30),
            biography: profile.metadata.biography.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardGroupState {
    /// Placeholder grid. Also the terminal state when the fetch fails; the
    /// failure is logged, never rendered.
    Loading,
    Loaded(Vec<ProfileCard>),
}

/// Controller for the card group. Fetch once after construction; the guard
/// cancels a fetch still in flight when the group unmounts.
#[derive(Debug)]
pub struct CardGroup {
    empty_message: String,
    default_photo: String,
    state: CardGroupState,
    guard: CancelGuard,
}

impl CardGroup {
    #[must_use]
    pub fn new(empty_message: impl Into<String>, default_photo: impl Into<String>) -> Self {
        Self {
            empty_message: empty_message.into(),
            default_photo: default_photo.into(),
            state: CardGroupState::Loading,
            guard: CancelGuard::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &CardGroupState {
        &self.state
    }

    /// The info message rendered when the loaded result set is empty.
    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        match &self.state {
            CardGroupState::Loaded(cards) if cards.is_empty() => Some(&self.empty_message),
            _ => None,
        }
    }

    /// Fetches the newest profiles and builds the cards.
    ///
    /// A failed fetch is logged and leaves the placeholder in place; a
    /// cancelled one changes nothing.
    pub async fn fetch(&mut self, api: &ProfileApi) {
        self.state = CardGroupState::Loading;
        let token = self.guard.token();
        match token
            .wrap(api.list(&ListQuery::default(), &RequestOptions::new()))
            .await
        {
            Ok(response) => {
                let cards = response
                    .hits
                    .hits
                    .iter()
                    .map(|profile| ProfileCard::from_profile(profile, &self.default_photo))
                    .collect();
                self.state = CardGroupState::Loaded(cards);
            }
            Err(error) if error.is_cancelled() => {}
            Err(error) => {
                tracing::warn!(%error, "latest-profiles fetch failed");
            }
        }
    }
}
