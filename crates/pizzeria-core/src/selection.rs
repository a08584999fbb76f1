//! # Selection State
//!
//! The category filter and sort choice the product grid is showing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::sort::SortCriterion;
use crate::types::CategoryId;

/// The active sort: which criterion, plus the id of the UI menu item that
/// chose it. The id is opaque to the store and only echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SortSelection {
    pub name: SortCriterion,
    pub id: u32,
}

impl SortSelection {
    pub const fn new(name: SortCriterion, id: u32) -> Self {
        SortSelection { name, id }
    }
}

/// What the product grid is filtered and ordered by.
///
/// Starts as "all categories, sorted by rating (menu item 0)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    /// Active category filter; `None` shows every category.
    pub category: Option<CategoryId>,

    /// Active sort.
    pub sort_by: SortSelection,
}

impl Selection {
    /// Replaces the category filter.
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.category = category;
    }

    /// Records the sort the product list was just reordered by.
    pub fn set_sort(&mut self, sort_by: SortSelection) {
        self.sort_by = sort_by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_selection() {
        let selection = Selection::default();
        assert_eq!(selection.category, None);
        assert_eq!(selection.sort_by, SortSelection::new(SortCriterion::Rating, 0));
    }

    #[test]
    fn test_serialized_shape() {
        let mut selection = Selection::default();
        selection.set_category(Some(2));
        selection.set_sort(SortSelection::new(SortCriterion::Price, 2));

        let json = serde_json::to_value(selection).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": 2,
                "sortBy": { "name": "price", "id": 2 }
            })
        );
    }
}
