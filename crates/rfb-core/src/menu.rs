use serde::{Deserialize, Serialize};

/// Menu categories in the order the menu page offers them as filters.
pub const MENU_CATEGORIES: &[&str] = &[
    "SWEETS",
    "SNACKS",
    "SAVOURIES",
    "COOKIES",
    "PODI",
    "THOKKU",
    "PICKLE",
    "GIFT_HAMPER",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuBranch {
    pub id: String,
    pub name: String,
}

/// A dish returned by `GET /api/menus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Present when the dish is only sold at one branch.
    #[serde(default)]
    pub branch: Option<MenuBranch>,
}

/// Group dishes by category.
///
/// Categories appear in the order they are first seen and dishes keep their
/// input order within a category.
#[must_use]
pub fn group_by_category(items: Vec<MenuItem>) -> Vec<(String, Vec<MenuItem>)> {
    let mut groups: Vec<(String, Vec<MenuItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, dishes)) => dishes.push(item),
            None => groups.push((item.category.clone(), vec![item])),
        }
    }
    groups
}
