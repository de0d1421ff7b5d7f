//! External collaborator boundaries for CineShelf.
//!
//! The auth provider and the profile document store live outside this
//! codebase. These modules define their consumed interfaces plus in-process
//! implementations used by the demo binary and the test suite.

pub mod auth;
pub mod memory;
pub mod profile_store;
pub mod subscription;

pub use subscription::Subscription;
