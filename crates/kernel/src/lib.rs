//! Substrates, decomposition, lenses, and observation
//!
//! This crate holds the operational half of the Substratum kernel:
//! - Substrate: an identity paired with a pure expression
//! - divide/Decomposition: the fixed nine-slot structural decomposition
//! - manifold: recomposition of value sequences toward unity
//! - ReturnEngine: the caller-driven residue refinement loop
//! - Lens: pure projections with their own identities
//! - Operator: the enumerable projection catalogue
//! - Observer: invocation + projection wrapped into Observation records
//!
//! Substrates and lenses are immutable and cheap to clone (`Arc`-backed
//! expressions); the observer is an explicit context object holding only an
//! atomic call counter.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dimensional;
pub mod lens;
pub mod manifold;
pub mod observer;
pub mod operators;
pub mod return_engine;
pub mod substrate;

pub use dimensional::{divide, Decomposition};
pub use lens::Lens;
pub use manifold::{multiply, UNITY};
pub use observer::{Observation, Observer};
pub use operators::{lookup_operator, operator_names, Operator};
pub use return_engine::{refine, return_to_unity, Refinement, RefinementStep};
pub use substrate::{Expression, Request, Substrate};
