//! Profile state container — app-owned, SDK-provided update logic.

use crate::domain::profile::CompanyProfile;

/// The profile shown for the currently selected company.
///
/// `fetched` marks that a fetch completed, even one that found no profile,
/// so the view can tell "still loading" from "provider has nothing".
/// Cleared on symbol change so a stale profile is never shown against the
/// new symbol.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    profile: Option<CompanyProfile>,
    fetched: bool,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<&CompanyProfile> {
        self.profile.as_ref()
    }

    pub fn is_fetched(&self) -> bool {
        self.fetched
    }

    /// Record the outcome of a completed fetch.
    pub fn set(&mut self, profile: Option<CompanyProfile>) {
        self.profile = profile;
        self.fetched = true;
    }

    pub fn clear(&mut self) {
        self.profile = None;
        self.fetched = false;
    }
}
