//! # cdpmap common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`topology`]**: endpoints, directed adjacencies, canonical links and the
//!   insertion-ordered mapping they are accumulated in.
//! * **[`source`]** / **[`render`]**: the collaborator seams. The core reads captures
//!   through [`source::CaptureSource`] and hands results to [`render::TopologyRenderer`].
//! * **[`error`]**: the error taxonomy for the collaborators.
//! * **[`config`]**: run configuration, filled in by the CLI.

pub mod config;
pub mod error;
pub mod render;
pub mod source;
pub mod topology;
