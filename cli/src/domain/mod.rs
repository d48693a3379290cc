//! Domain types and pure validation functions.
//!
//! This layer is free of I/O, async, and imports from `crate::infra`,
//! `crate::commands`, or `crate::output`. All functions take data in and
//! return data out.

pub mod error;
pub mod resource;
pub mod state;

pub use resource::{Deletable, ResourceGroup};
pub use state::{DeploymentState, Director, Jumpbox};
