//! # Program Rules
//!
//! The "Rulebook" crate - the closed vocabulary and the curated tables that
//! describe which behavioral program runs in which situation. This crate is the
//! single source of truth for the knowledge base data and performs no I/O.

pub mod catalog;
pub mod error;
pub mod escalation;
pub mod triggers;
pub mod vocabulary;

pub use catalog::*;
pub use error::*;
pub use escalation::*;
pub use triggers::*;
pub use vocabulary::*;
