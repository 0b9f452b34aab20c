//! Profile service: update the student's profile and delete the account.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Failures a profile service can report
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not supported: {0}")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub university: String,
}

/// Editable fields of [`Profile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    University,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Name, ProfileField::Email, ProfileField::University];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email Address",
            ProfileField::University => "University",
        }
    }
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::University => &self.university,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::University => self.university = value,
        }
    }

    pub fn field_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::University => &mut self.university,
        }
    }
}

/// Persistence boundary for account data
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Store the profile, returning the stored record
    async fn update_profile(&self, profile: &Profile) -> Result<Profile, ServiceError>;

    /// Permanently delete the account
    async fn delete_account(&self) -> Result<(), ServiceError>;
}

/// In-process service without a backing store.
///
/// Updates are always acknowledged and kept in memory for the session.
/// Account deletion is reported as unsupported since there is no account
/// store to delete from.
#[derive(Debug, Default)]
pub struct LocalProfileService {
    saved: Mutex<Option<Profile>>,
}

impl LocalProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last acknowledged profile, if any
    pub fn saved_profile(&self) -> Option<Profile> {
        self.saved.lock().ok().and_then(|saved| saved.clone())
    }
}

#[async_trait]
impl ProfileService for LocalProfileService {
    async fn update_profile(&self, profile: &Profile) -> Result<Profile, ServiceError> {
        if let Ok(mut saved) = self.saved.lock() {
            *saved = Some(profile.clone());
        }
        log::info!("Profile acknowledged for '{}'", profile.name);
        Ok(profile.clone())
    }

    async fn delete_account(&self) -> Result<(), ServiceError> {
        log::warn!("Account deletion requested but no account store is configured");
        Err(ServiceError::Unsupported(
            "account deletion is not available without an account service".to_string(),
        ))
    }
}
