use crate::errors::TemplateNotFound;
use crate::inflect::{EnglishInflector, Inflect};
use crate::template::Template;
use crate::track::Tracker;
use regex::Regex;
use std::sync::LazyLock;

// Matches:
//   render partial: "comments/comment", collection: commentable.comments
//   render "comments/comments"
//   render 'comments/comments'
//   render('comments/comments')
//
//   render(@topic)         => render("topics/topic")
//   render(topics)         => render("topics/topic")
//   render(message.topics) => render("topics/topic")
static RENDER_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"render\s*\(?(?:partial:|:partial\s+=>)?\s*([@a-z"'][@a-z_/."']+)"#)
        .expect("render reference pattern is valid")
});

// A reference that reduces to a single bare lowercase word once the leading
// `@` and any dotted attribute chain are stripped. Only these get the
// plural/singular rewrite; slashed paths and quoted literals fall through.
static BARE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@?(?:[a-z]+\.)*([a-z_]+)$").expect("bare reference pattern is valid")
});

static EXPLICIT_DEPENDENCY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"# Template Dependency: (\S+)").expect("explicit dependency pattern is valid")
});

/// Heuristic dependency scanner for ERB-style templates.
///
/// Not a parser: render calls are recognized lexically, so anything built from
/// runtime expressions goes undetected. The `# Template Dependency:` comment
/// marker is the escape hatch for those.
pub struct ErbTracker {
    inflector: Box<dyn Inflect>,
}

impl ErbTracker {
    pub fn new() -> Self {
        Self {
            inflector: Box::new(EnglishInflector),
        }
    }

    /// Use a caller-supplied inflection engine instead of the built-in rules.
    pub fn with_inflector(inflector: Box<dyn Inflect>) -> Self {
        Self { inflector }
    }

    fn render_dependencies(&self, name: &str, source: &str) -> Vec<String> {
        let directory = directory_of(name);

        // Dedup raw captures by first occurrence before any normalization;
        // two references that only converge after the rewrite both survive.
        let mut raw: Vec<&str> = Vec::new();
        for caps in RENDER_REFERENCE.captures_iter(source) {
            if let Some(m) = caps.get(1) {
                if !raw.contains(&m.as_str()) {
                    raw.push(m.as_str());
                }
            }
        }

        raw.into_iter()
            .map(|reference| self.rewrite_bare(reference))
            .map(|reference| scope_to_directory(reference, directory))
            .map(|reference| reference.replace(['"', '\''], ""))
            .collect()
    }

    // render(@topic) / render(topics) / render(message.topics) all name the
    // template "topics/topic".
    fn rewrite_bare(&self, reference: &str) -> String {
        match BARE_REFERENCE.captures(reference).and_then(|c| c.get(1)) {
            Some(word) => {
                let rewritten = format!(
                    "{}/{}",
                    self.inflector.pluralize(word.as_str()),
                    self.inflector.singularize(word.as_str())
                );
                tracing::trace!(reference, %rewritten, "rewrote bare reference");
                rewritten
            }
            None => reference.to_string(),
        }
    }

    fn explicit_dependencies(&self, source: &str) -> Vec<String> {
        let mut deps: Vec<String> = Vec::new();
        for caps in EXPLICIT_DEPENDENCY.captures_iter(source) {
            if let Some(m) = caps.get(1) {
                if !deps.iter().any(|d| d == m.as_str()) {
                    deps.push(m.as_str().to_string());
                }
            }
        }
        deps
    }
}

impl Default for ErbTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracker for ErbTracker {
    fn dependencies(&self, name: &str, template: &dyn Template) -> Vec<String> {
        let source = match template.source() {
            Ok(source) => source,
            // Template no longer exists, so it contributes no dependencies.
            Err(TemplateNotFound) => return Vec::new(),
        };
        let mut deps = self.render_dependencies(name, &source);
        deps.extend(self.explicit_dependencies(&source));
        tracing::debug!(name, count = deps.len(), "extracted dependencies");
        deps
    }
}

/// The template name's path with its final segment removed; empty for
/// top-level names.
fn directory_of(name: &str) -> &str {
    name.rsplit_once('/').map_or("", |(directory, _)| directory)
}

// render("headline") inside "posts/show" names "posts/headline".
fn scope_to_directory(reference: String, directory: &str) -> String {
    if reference.contains('/') {
        reference
    } else {
        format!("{directory}/{reference}")
    }
}
