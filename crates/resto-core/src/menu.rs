//! Category tabs and filtering for the QR menu.

use crate::types::MenuItem;
use crate::ALL_CATEGORIES;

/// Category tabs: `"All"` followed by each distinct category in the order
/// it first appears on the menu.
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut tabs = vec![ALL_CATEGORIES.to_string()];
    for item in items {
        if !tabs.iter().skip(1).any(|c| *c == item.category) {
            tabs.push(item.category.clone());
        }
    }
    tabs
}

/// Dishes shown under a category tab. `"All"` shows everything.
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|m| category == ALL_CATEGORIES || m.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn spice_garden() -> Vec<MenuItem> {
        defaults::menu_items()
            .into_iter()
            .filter(|m| m.restaurant_id == "r1")
            .collect()
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&spice_garden()),
            vec!["All", "Main Course", "Starters", "Breads"]
        );
    }

    #[test]
    fn test_categories_deduplicates() {
        let mut menu = spice_garden();
        let mut extra = menu[0].clone();
        extra.id = "m9".to_string();
        menu.push(extra);
        assert_eq!(categories(&menu).len(), 4);
    }

    #[test]
    fn test_filter_by_category() {
        let menu = spice_garden();
        assert_eq!(filter_by_category(&menu, "All").len(), 3);

        let breads = filter_by_category(&menu, "Breads");
        assert_eq!(breads.len(), 1);
        assert_eq!(breads[0].name, "Garlic Naan");

        assert!(filter_by_category(&menu, "Desserts").is_empty());
    }
}
