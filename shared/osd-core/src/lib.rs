//! Render context: configuration, resource registries, and decoded-state
//! ownership. This crate owns the single record shared by the frame
//! orchestrator and the widget set; it has no FFI surface of its own and
//! no knowledge of the host's memory layout.

pub mod config;
pub mod context;
pub mod history;
pub mod navball;
pub mod registries;
pub mod resources;

pub use config::Config;
pub use context::RenderContext;
pub use resources::{Fonts, ResourceError, ResourceLoader, VectorIcons};
