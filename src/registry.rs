use crate::errors::{Result, ViewdepsError};
use crate::template::Template;
use crate::track::{ErbTracker, Tracker};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Dispatch table from handler tag to extraction strategy.
///
/// Owned by the caller; typical hosts build one at startup, install the
/// trackers they support, and share it behind an `Arc`. Registration is rare
/// and lookup is hot, hence the `RwLock`.
pub struct TrackerRegistry {
    trackers: RwLock<HashMap<String, Arc<dyn Tracker>>>,
}

impl TrackerRegistry {
    /// Empty registry with no strategies installed.
    pub fn new() -> Self {
        Self {
            trackers: RwLock::new(HashMap::new()),
        }
    }

    /// Registry with the built-in ERB strategy installed under the `erb` tag.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register("erb", Arc::new(ErbTracker::new()));
        registry
    }

    /// Store or replace the tracker for `handler`. Last registration wins;
    /// overwriting is silent and intentional.
    pub fn register(&self, handler: impl Into<String>, tracker: Arc<dyn Tracker>) {
        let handler = handler.into();
        tracing::debug!(%handler, "registering tracker");
        self.trackers
            .write()
            .expect("tracker registry lock poisoned")
            .insert(handler, tracker);
    }

    /// Remove the tracker for `handler`; no-op if none is registered.
    pub fn unregister(&self, handler: &str) {
        self.trackers
            .write()
            .expect("tracker registry lock poisoned")
            .remove(handler);
    }

    /// Dispatch to the tracker registered for `template`'s handler tag.
    ///
    /// Fails with [`ViewdepsError::UnknownHandler`] when no tracker is
    /// registered for that tag — a wiring gap the caller must see, not a
    /// template-content problem.
    pub fn find_dependencies(&self, name: &str, template: &dyn Template) -> Result<Vec<String>> {
        let trackers = self.trackers.read().expect("tracker registry lock poisoned");
        match trackers.get(template.handler()) {
            Some(tracker) => {
                tracing::debug!(name, handler = template.handler(), "finding dependencies");
                Ok(tracker.dependencies(name, template))
            }
            None => Err(ViewdepsError::UnknownHandler {
                handler: template.handler().to_string(),
            }),
        }
    }
}

impl Default for TrackerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
