use std::fmt;

/// Category list used when nothing has been stored yet.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["仕事", "プライベート", "買い物", "その他"];

/// Category written into tasks whose category was deleted.
///
/// May be absent from the category list itself.
pub const FALLBACK_CATEGORY: &str = "その他";

/// Label shown for the "every category" filter choice
pub const ALL_LABEL: &str = "all";

/// Current filter selection. Session state only, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Whether this filter selects exactly the named category
    pub fn is_category(&self, name: &str) -> bool {
        matches!(self, Filter::Category(c) if c == name)
    }

    pub fn label(&self) -> &str {
        match self {
            Filter::All => ALL_LABEL,
            Filter::Category(name) => name,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The default category set as owned strings
pub fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_labels() {
        assert_eq!(Filter::All.to_string(), "all");
        assert_eq!(Filter::Category("仕事".into()).to_string(), "仕事");
    }

    #[test]
    fn category_named_all_is_not_the_all_filter() {
        let f = Filter::Category("all".into());
        assert_ne!(f, Filter::All);
        assert!(f.is_category("all"));
        assert!(!Filter::All.is_category("all"));
    }

    #[test]
    fn fallback_is_in_default_set() {
        assert!(DEFAULT_CATEGORIES.contains(&FALLBACK_CATEGORY));
        assert_eq!(default_categories().len(), 4);
    }
}
