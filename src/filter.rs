// src/filter.rs
use once_cell::sync::OnceCell;
use regex::Regex;

/// Normalize extracted text: collapse whitespace runs (including newlines)
/// to a single space, then trim. Case is preserved; lowercasing happens only
/// at comparison time.
pub fn normalize(s: &str) -> String {
    static RE_WS: OnceCell<Regex> = OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());
    re_ws.replace_all(s, " ").trim().to_string()
}

/// Case-insensitive substring match of a title against a fixed keyword list.
/// Keywords are lowercased once at construction.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// True iff the normalized, lowercased title contains any keyword.
    /// No tokenization, no scoring; first hit wins.
    pub fn matches(&self, title: &str) -> bool {
        let t = normalize(title).to_lowercase();
        self.keywords.iter().any(|k| t.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_runs_and_trims() {
        assert_eq!(normalize("  a\n\t b   c "), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["  YouTube   영상 \n 제작", "plain", "  x  "] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn matches_is_case_and_whitespace_insensitive() {
        let f = KeywordFilter::new(["영상", "design"]);
        assert!(f.matches("YouTube  영상"));
        assert!(f.matches("Brand DESIGN\n공모"));
        assert!(!f.matches("도로 보수 공사"));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let f = KeywordFilter::new(Vec::<String>::new());
        assert!(!f.matches("유튜브 제작 공고"));
    }
}
