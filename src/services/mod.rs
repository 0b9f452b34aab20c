//! External service boundaries.
//!
//! The UI never writes profile data itself; it hands the staged record to a
//! [`ProfileService`](profile::ProfileService) and renders whatever result
//! comes back.

pub mod profile;

pub use profile::{LocalProfileService, Profile, ProfileField, ProfileService, ServiceError};
