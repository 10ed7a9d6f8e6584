use proptest::prelude::*;
use viewdeps::{EnglishInflector, ErbTracker, Inflect, SourceTemplate, Tracker};

/// Nouns the rule-based inflector handles cleanly, singular and plural.
const NOUNS: &[&str] = &[
    "topic", "comment", "message", "story", "box", "class", "day", "person", "child", "post",
    "reply", "author",
];

fn extract(name: &str, source: &str) -> Vec<String> {
    ErbTracker::new().dependencies(name, &SourceTemplate::erb(source))
}

fn quoted_render_source(paths: &[String]) -> String {
    paths
        .iter()
        .map(|p| format!("<%= render \"{p}\" %>\n"))
        .collect()
}

proptest! {
    #[test]
    fn extraction_is_idempotent(
        paths in prop::collection::vec("[a-z]{2,5}/[a-z]{2,5}", 0..12)
    ) {
        let source = quoted_render_source(&paths);
        let first = extract("posts/show", &source);
        let second = extract("posts/show", &source);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn quoted_paths_pass_through_deduplicated(
        paths in prop::collection::vec("[a-z]{2,5}/[a-z]{2,5}", 0..12)
    ) {
        let source = quoted_render_source(&paths);
        let deps = extract("posts/show", &source);

        let mut expected: Vec<&String> = Vec::new();
        for path in &paths {
            if !expected.contains(&path) {
                expected.push(path);
            }
        }
        prop_assert_eq!(deps, expected.into_iter().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn bare_noun_forms_converge(index in 0..12usize) {
        let noun = NOUNS[index];
        let inflector = EnglishInflector;
        let plural = inflector.pluralize(noun);
        let expected = format!("{}/{}", inflector.pluralize(noun), inflector.singularize(noun));

        // Singular instance variable, bare plural, and dotted attribute forms
        // all name the same template.
        let forms = [
            format!("<%= render(@{noun}) %>"),
            format!("<%= render({plural}) %>"),
            format!("<%= render(message.{plural}) %>"),
        ];
        for source in &forms {
            let deps = extract("messages/show", source);
            prop_assert_eq!(&deps, &vec![expected.clone()], "source: {}", source);
        }
    }

    #[test]
    fn explicit_marker_never_disturbs_render_prefix(
        paths in prop::collection::vec("[a-z]{2,5}/[a-z]{2,5}", 0..8),
        extra in "[a-z]{2,5}/[a-z]{2,5}"
    ) {
        let base = quoted_render_source(&paths);
        let with_marker = format!("{base}<%# Template Dependency: {extra} %>\n");

        let before = extract("posts/show", &base);
        let after = extract("posts/show", &with_marker);

        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(after.last().map(String::as_str), Some(extra.as_str()));
    }

    #[test]
    fn unquoted_bare_words_scope_into_plural_directory(index in 0..12usize) {
        let noun = NOUNS[index];
        let inflector = EnglishInflector;
        let deps = extract("posts/show", &format!("<%= render({noun}) %>"));
        prop_assert_eq!(
            deps,
            vec![format!("{}/{}", inflector.pluralize(noun), inflector.singularize(noun))]
        );
    }
}
