//! # Program Core (Inner Program)
//!
//! The query side of the knowledge base. This crate takes the curated tables
//! from `program_rules`, validates them once into a frozen knowledge base, and
//! answers read-only questions about them.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Validated, immutable bundle of the pattern catalog and trigger map
//! - **query**: Composite queries and the full per-trigger report
//! - **browser**: Headless card browser that pages through a trigger's records
//!
//! ## Design Philosophy
//!
//! - **Construct-and-freeze**: Tables are checked at load time and never written afterwards
//! - **Fail fast**: A broken table surfaces as an error at load, never as a half-built state
//! - **Presentation-agnostic**: Every answer is plain data or plain text

pub mod browser;
pub mod knowledge_base;
pub mod query;

pub use browser::*;
pub use knowledge_base::*;
pub use query::*;

pub use program_rules::{RulesError, RulesResult};
