//! Append-only content-addressed substrate registry
//!
//! The registry binds identities to substrates, refuses to rebind a known
//! identity to a distinct substrate object, and can be frozen: a one-way
//! transition after which every registration fails. It is an explicit
//! context object: callers construct and share their own instances, and
//! independent registries coexist freely.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod registry;

pub use registry::{Reference, Registry};
