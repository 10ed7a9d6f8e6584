pub mod erb;

pub use erb::ErbTracker;

use crate::template::Template;

/// Extraction strategy trait — each template dialect implements this.
pub trait Tracker: Send + Sync {
    /// Extract the dependency identifiers referenced by `template`, in source
    /// order, render-derived references first and explicit declarations after.
    ///
    /// Infallible by contract: a template whose source cannot be read simply
    /// contributes no dependencies.
    fn dependencies(&self, name: &str, template: &dyn Template) -> Vec<String>;
}
