//! Category matching rule for the project gallery filter.

/// Selection value that matches every item.
pub const WILDCARD: &str = "all";

/// Whether an item with the given category tag matches the selected filter.
///
/// Items may carry several categories concatenated into one attribute value,
/// so a non-wildcard selection also matches by substring containment. An item
/// without a category only matches the wildcard.
pub fn matches(selection: &str, category: Option<&str>) -> bool {
    if selection == WILDCARD {
        return true;
    }
    match category {
        Some(cat) => cat == selection || cat.contains(selection),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        assert!(matches(WILDCARD, Some("web")));
        assert!(matches(WILDCARD, Some("")));
        assert!(matches(WILDCARD, None));
    }

    #[test]
    fn exact_category_matches() {
        assert!(matches("web", Some("web")));
        assert!(!matches("web", Some("systems")));
    }

    #[test]
    fn concatenated_tags_match_by_containment() {
        assert!(matches("web", Some("web design")));
        assert!(matches("design", Some("web design")));
        assert!(!matches("tools", Some("web design")));
    }

    #[test]
    fn missing_category_only_matches_wildcard() {
        assert!(!matches("web", None));
        assert!(matches(WILDCARD, None));
    }
}
