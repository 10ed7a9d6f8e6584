use crate::errors::TemplateNotFound;

/// A renderable view known to the host: a handler tag selecting the extraction
/// strategy, plus an accessor for the raw source text.
///
/// The crate never constructs templates itself; hosts hand one in per lookup
/// and nothing is retained afterwards.
pub trait Template {
    /// Tag naming the template dialect, e.g. `"erb"`.
    fn handler(&self) -> &str;

    /// The raw source text, or [`TemplateNotFound`] if the template no longer
    /// exists in the host's store.
    fn source(&self) -> Result<String, TemplateNotFound>;
}

/// In-memory template, for hosts that already hold the source text.
#[derive(Debug, Clone)]
pub struct SourceTemplate {
    handler: String,
    source: String,
}

impl SourceTemplate {
    pub fn new(handler: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            handler: handler.into(),
            source: source.into(),
        }
    }

    /// Shorthand for an ERB-style template.
    pub fn erb(source: impl Into<String>) -> Self {
        Self::new("erb", source)
    }
}

impl Template for SourceTemplate {
    fn handler(&self) -> &str {
        &self.handler
    }

    fn source(&self) -> Result<String, TemplateNotFound> {
        Ok(self.source.clone())
    }
}
