//! Google video sitemap extension entries: validation and XML rendering.
//!
//! Build a [`VideoEntry`] from its required fields plus [`VideoParameters`],
//! adjust it through the validating setters, then render it with
//! [`render::render`] (or [`VideoEntry::to_xml`]) for embedding in a
//! sitemap `<url>` element.

pub mod encoding;
pub mod error;
pub mod parameters;
pub mod render;
pub mod types;
pub mod video;

pub use error::CoreError;
pub use parameters::VideoParameters;
pub use video::{Price, VideoEntry, YesNo};
