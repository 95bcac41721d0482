//! # uplift - Terminal Affirmation Card Deck
//!
//! A small terminal application that renders a scrolling deck of affirmation
//! cards. Each card stacks a bundled ASCII-art panel above a localized text
//! label; the deck contents are a fixed, compile-time table.
//!
//! ## Features
//!
//! - **Windowed Rendering**: only cards intersecting the viewport are
//!   materialized, so memory and per-frame work stay O(visible)
//! - **Bundled Resources**: string tables (TOML) and art panels are compiled
//!   into the binary; no files are read at runtime beyond optional config
//! - **Localization**: locale-tagged string tables with standard fallback
//! - **Theming**: color and typography tokens with default, monochrome, and
//!   high-contrast schemes
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`model`] - The affirmation record (a pair of resource ids)
//! - [`datasource`] - The fixed in-memory deck table
//! - [`resources`] - Bundled string/art tables behind a resolver trait
//! - [`ui`] - Card rendering, windowing math, and the terminal interface
//! - [`config`] - Optional user configuration file
//! - [`app`] - Application core and component coordination

// Core modules
pub mod datasource;
pub mod error;
pub mod model;
pub mod resources;

// Interface modules
pub mod config;
pub mod ui;

// Core components
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, UpliftError};

// Public API surface for external usage
pub use app::Application;
pub use datasource::load_affirmations;
pub use model::Affirmation;
pub use resources::{ArtId, ResourceResolver, Resources, StringId};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
