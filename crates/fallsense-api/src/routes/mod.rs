//! # API Route Modules
//!
//! - `roi`: calculator defaults, projection and derived-field sync.
//! - `content`: keyed page sections.
//! - `publications`: research list and metrics, read from the
//!   `publications` section.

pub mod content;
pub mod publications;
pub mod roi;
