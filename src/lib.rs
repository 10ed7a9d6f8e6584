//! Static template dependency extraction for view cache invalidation.
//!
//! Given a template's logical name and source text, discover which other
//! templates it renders, so a caching layer can recompute digests when a
//! dependency changes. Extraction is lexical and heuristic — common render
//! idioms are recognized by pattern, not by parsing the template language —
//! and single-level: walking dependencies-of-dependencies is the caller's
//! concern.
//!
//! ```
//! use viewdeps::{SourceTemplate, TrackerRegistry};
//!
//! let registry = TrackerRegistry::with_defaults();
//! let template = SourceTemplate::erb(r#"<%= render "comments/comments" %>"#);
//! let deps = registry.find_dependencies("posts/show", &template)?;
//! assert_eq!(deps, vec!["comments/comments"]);
//! # Ok::<(), viewdeps::ViewdepsError>(())
//! ```

pub mod errors;
pub mod inflect;
pub mod registry;
pub mod template;
pub mod track;

pub use errors::{Result, TemplateNotFound, ViewdepsError};
pub use inflect::{EnglishInflector, Inflect};
pub use registry::TrackerRegistry;
pub use template::{SourceTemplate, Template};
pub use track::{ErbTracker, Tracker};
