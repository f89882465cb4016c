//! Core library for `issue-activity-report`.
//!
//! Raw Jira search hits come in (fetched over REST or loaded from a file),
//! get normalized into canonical [`model::Issue`] records, and flow out as
//! one of five JSON reports: collection stats, week buckets, month buckets,
//! a label index, or a product split. The core performs no I/O of its own
//! beyond the explicit fetch collaborator in [`jira`].

pub mod cli;
pub mod error;
pub mod ext;
pub mod group;
pub mod jira;
pub mod labels;
pub mod model;
pub mod normalize;
pub mod render;
pub mod stats;
pub mod util;
pub mod window;

pub use error::Error;
pub use model::Issue;
