/// Case-insensitive substring search with an activation threshold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
    min_chars: usize,
}

impl SearchQuery {
    /// `min_chars` is the query length (after trimming) below which the
    /// search matches everything.
    pub fn new(text: &str, min_chars: usize) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
            min_chars: min_chars.max(1),
        }
    }

    pub fn is_active(&self) -> bool {
        self.needle.chars().count() >= self.min_chars
    }

    /// True when inactive, or when any field contains the query.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.is_active() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_match_everything() {
        let query = SearchQuery::new("t", 2);
        assert!(!query.is_active());
        assert!(query.matches_any(["Sato"]));
        assert!(query.matches_any(["Kimura"]));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let query = SearchQuery::new("  TaNa ", 2);
        assert!(query.is_active());
        assert!(query.matches_any(["E-102", "Tanaka Yui"]));
        assert!(!query.matches_any(["Suzuki", "s@example.com"]));
    }

    #[test]
    fn test_zero_minimum_still_ignores_empty_query() {
        let query = SearchQuery::new("", 0);
        assert!(!query.is_active());
        let query = SearchQuery::new("q", 0);
        assert!(query.is_active());
    }
}
