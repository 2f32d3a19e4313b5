//! Stable SARIF 2.1.0 record types used across the sarifkit workspace.
//!
//! This crate is intentionally boring:
//! - serde DTOs for the SARIF subset the object model covers
//! - the canonical `$schema` / `version` constants
//! - the plain-text to `{text}` message normalization
//!
//! Behavior (merging, deduplication, property lookup) lives in
//! `sarifkit-model`.

#![forbid(unsafe_code)]

pub mod record;

pub use record::{
    ArtifactContent, ArtifactLocation, Level, Location, Log, Message, PhysicalLocation, Region,
    ReportingDescriptor, Result, Run, Tool, ToolComponent, SCHEMA_URI, SCHEMA_VERSION,
};
