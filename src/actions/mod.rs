//! Actions — external operations the model may request by name.
//!
//! Submodules:
//! - `registry`: the `Action` trait and the name → action lookup table
//! - `seo`: the bundled `get_seo_page_report` action (RapidAPI SEO audit)
//! - `errors`: action error types
//!
//! The registry is built once at startup and handed to the agent engine,
//! so tests can swap the bundled action for a double.

pub mod errors;
pub mod registry;
pub mod seo;

pub use errors::ActionError;
pub use registry::{Action, ActionRegistry};
pub use seo::SeoPageReport;
