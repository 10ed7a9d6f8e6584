use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ViewdepsError {
    #[error("No tracker registered for handler: {handler}")]
    #[diagnostic(code(viewdeps::unknown_handler))]
    UnknownHandler { handler: String },
}

pub type Result<T> = std::result::Result<T, ViewdepsError>;

/// Signal returned by [`Template::source`](crate::template::Template::source)
/// when the named template no longer exists. Trackers convert it into an empty
/// dependency list; it never crosses the extractor boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("template source not found")]
pub struct TemplateNotFound;
