//! DocVault Application Orchestration Layer
//!
//! Use cases over the storage, identity and profile ports, plus the
//! per-session document view that reconciles remote listings with local
//! search and sort state.

pub mod deps;
pub mod error;
pub mod identity;
pub mod session;
pub mod usecases;

#[cfg(test)]
mod test_support;

pub use deps::AppDeps;
pub use error::{DocumentError, ProfileError};
pub use identity::IdentityContext;
pub use session::DocumentViewSession;
