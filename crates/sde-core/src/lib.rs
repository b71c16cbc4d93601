//! # SDE Core
//!
//! Entity schema and repository operations for the sequence editor backend.
//!
//! Each diagram entity (participant, package, class, DAO) lives in its own
//! module: the model file defines the create/full shapes and the node
//! property mapping, the module root implements list/create against the
//! graph store.

pub mod class;
pub mod dao;
pub mod error;
pub mod method;
pub mod package;
pub mod participant;

pub use error::{SdeError, SdeResult};
