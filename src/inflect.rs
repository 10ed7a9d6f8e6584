/// Linguistic inflection collaborator used by bare-word normalization.
///
/// Hosts with a full inflection engine can plug their own implementation into
/// [`ErbTracker::with_inflector`](crate::track::ErbTracker::with_inflector);
/// [`EnglishInflector`] is a small rule-based stand-in covering regular nouns
/// and a handful of irregulars.
pub trait Inflect: Send + Sync {
    fn pluralize(&self, word: &str) -> String;
    fn singularize(&self, word: &str) -> String;
}

const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
];

/// Rule-based English noun inflection. Suffix rules only; nouns outside the
/// common `-s`/`-es`/`-ies` families (e.g. latinate plurals) come out wrong,
/// which is acceptable for a heuristic scanner.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflect for EnglishInflector {
    fn pluralize(&self, word: &str) -> String {
        let singular = self.singularize(word);
        if let Some((_, plural)) = IRREGULARS.iter().find(|(s, _)| *s == singular) {
            return (*plural).to_string();
        }
        if let Some(stem) = singular.strip_suffix('y') {
            if !stem.is_empty() && !ends_with_vowel(stem) {
                return format!("{stem}ies");
            }
        }
        if ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| singular.ends_with(suffix))
        {
            format!("{singular}es")
        } else {
            format!("{singular}s")
        }
    }

    fn singularize(&self, word: &str) -> String {
        if let Some((singular, _)) = IRREGULARS.iter().find(|(_, p)| *p == word) {
            return (*singular).to_string();
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if !stem.is_empty() {
                return format!("{stem}y");
            }
        }
        for suffix in ["sses", "shes", "ches", "xes", "zes"] {
            if word.ends_with(suffix) {
                return word[..word.len() - 2].to_string();
            }
        }
        if word.ends_with('s') && !word.ends_with("ss") {
            return word[..word.len() - 1].to_string();
        }
        word.to_string()
    }
}

fn ends_with_vowel(s: &str) -> bool {
    s.chars()
        .last()
        .is_some_and(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}
