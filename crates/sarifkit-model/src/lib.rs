//! Builder entities for SARIF 2.1.0 logs.
//!
//! Entities are constructed leaf-first and attached to their parents:
//! `Rule` -> `Tool` -> `Result` -> `Run` -> `Log`. Every `add_*` operation
//! clones the child's materialized record into the parent, so a child can
//! keep being used (or mutated) without retroactively changing the parent.
//!
//! The two pieces of real logic live here:
//! - [`Run::add_result`] deduplicates results by `message.text`, merging
//!   locations and occurrence counts into the first matching entry.
//! - [`Tool::add_rule`] replaces rules by `id`, last write wins, with the
//!   replacement moving to the end of the rule sequence.
//!
//! Everything else is caller-driven construction plus one IO edge,
//! [`Log::from_file`].

#![forbid(unsafe_code)]

mod entity;
mod log;
mod result;
mod rule;
mod run;
mod tool;

pub use entity::{PropertyNotFound, SarifEntity};
pub use log::Log;
pub use result::Result;
pub use rule::Rule;
pub use run::Run;
pub use tool::Tool;
