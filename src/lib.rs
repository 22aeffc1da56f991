//! Core engines for SDG-aligned project planning tools.
//!
//! The crate relates free-text project descriptions to the seventeen
//! Sustainable Development Goals and ranks competing project activities
//! under budget, time, and personnel ceilings. A presentation layer owns
//! all input collection and rendering; it calls in with plain data and
//! displays whatever comes back.

pub mod alignment;
pub mod allocation;
pub mod engagement;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod timeline;

pub use error::PlannerError;
pub use taxonomy::Taxonomy;
