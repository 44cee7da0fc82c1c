/// Snippet - a named text entry, the unit of storage
///
/// The keyword is unique across the table. A hidden snippet still occupies its
/// keyword but is not returned by keyword lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Unique name identifying this snippet
    pub keyword: String,

    /// Stored text body; may be empty
    pub message: String,

    /// Visibility flag - if true, lookups by keyword report not found
    pub hidden: bool,
}

impl Snippet {
    /// Create a visible snippet
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
            hidden: false,
        }
    }

    /// Builder-style setter for the hidden flag
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snippet_defaults_to_shown() {
        let snippet = Snippet::new("greeting", "hello");
        assert_eq!(snippet.keyword, "greeting");
        assert_eq!(snippet.message, "hello");
        assert!(!snippet.hidden);
    }

    #[test]
    fn test_with_hidden() {
        let snippet = Snippet::new("secret", "").with_hidden(true);
        assert!(snippet.hidden);
        assert!(snippet.message.is_empty());
    }
}
