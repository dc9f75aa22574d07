//! # cdpmap core
//!
//! Rebuilds a physical topology from CDP neighbor captures.
//!
//! * **[`scanner`]**: one capture's text to a device name and directed adjacencies.
//! * **[`registry`]**: accumulation across captures and symmetric deduplication.
//! * **[`source`]** / **[`render`]**: implementations of the collaborator traits
//!   declared in `cdpmap_common`.
//! * **[`service`]**: wires the above into a single run.

pub mod registry;
pub mod render;
pub mod scanner;
pub mod service;
pub mod source;
