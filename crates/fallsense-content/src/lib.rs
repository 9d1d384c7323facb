//! # fallsense-content: Page Section Content
//!
//! Marketing and research pages are assembled from keyed JSON sections. This
//! crate stores them and exposes typed views over the sections the service
//! itself interprets.
//!
//! ## Modules
//!
//! - [`store`]: the `ContentStore` get/upsert seam and its in-memory
//!   implementation.
//! - [`sections`]: typed reads, including the ROI calculator copy and its
//!   configurable default inputs.
//! - [`publications`]: research publication list, recency ordering and
//!   h-index metrics.
//! - [`error`]: `ContentError`.

pub mod error;
pub mod publications;
pub mod sections;
pub mod store;

pub use error::ContentError;
pub use publications::{
    h_index, load_publications, sorted_by_recency, Publication, PublicationMetrics,
};
pub use sections::{load_typed, normalize_section, require, roi_defaults, RoiSectionContent};
pub use store::{ContentStore, InMemoryContentStore, SectionContent};
