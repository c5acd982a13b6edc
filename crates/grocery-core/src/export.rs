//! Grocery list export helpers shared by the app layer and CLI.

use serde::{Deserialize, Serialize};

use crate::models::GroceryListItem;

/// Serializable list-item representation used in JSON exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportListItem {
    pub id: String,
    pub grocery_list_id: String,
    pub product_id: String,
    pub amount: u32,
}

/// Convert a list item into an export record.
#[must_use]
pub fn list_item_to_export_item(item: &GroceryListItem) -> ExportListItem {
    ExportListItem {
        id: item.id.to_string(),
        grocery_list_id: item.grocery_list_id.to_string(),
        product_id: item.product_id.to_string(),
        amount: item.amount,
    }
}

/// Render list items as a pretty-printed JSON array.
pub fn render_json_export(items: &[GroceryListItem]) -> serde_json::Result<String> {
    let records = items
        .iter()
        .map(list_item_to_export_item)
        .collect::<Vec<ExportListItem>>();
    serde_json::to_string_pretty(&records)
}

/// Build a default export file name from the list name.
///
/// The name is slugged to lowercase ASCII; an unsluggable name falls back to
/// `grocery-list.json`.
#[must_use]
pub fn suggested_export_file_name(list_name: &str) -> String {
    let mut slug = String::new();
    for c in list_name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "grocery-list.json".to_string()
    } else {
        format!("{slug}.json")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{GroceryListId, ProductId};

    #[test]
    fn export_item_carries_all_fields() {
        let item = GroceryListItem::new(GroceryListId::new(), ProductId::new(), 2);

        let export = list_item_to_export_item(&item);
        assert_eq!(export.id, item.id.to_string());
        assert_eq!(export.grocery_list_id, item.grocery_list_id.to_string());
        assert_eq!(export.product_id, item.product_id.to_string());
        assert_eq!(export.amount, 2);
    }

    #[test]
    fn render_json_export_is_a_plain_array() {
        let items = vec![
            GroceryListItem::new(GroceryListId::new(), ProductId::new(), 1),
            GroceryListItem::new(GroceryListId::new(), ProductId::new(), 3),
        ];

        let rendered = render_json_export(&items).unwrap();
        let parsed: Vec<ExportListItem> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].amount, 1);
        assert_eq!(parsed[1].amount, 3);
    }

    #[test]
    fn render_json_export_of_empty_list_is_empty_array() {
        let rendered = render_json_export(&[]).unwrap();
        assert_eq!(rendered, "[]");
    }

    #[test]
    fn suggested_file_name_slugs_the_list_name() {
        assert_eq!(suggested_export_file_name("Weekly shop"), "weekly-shop.json");
        assert_eq!(
            suggested_export_file_name("  Kerst & Oud/Nieuw  "),
            "kerst-oud-nieuw.json"
        );
    }

    #[test]
    fn suggested_file_name_falls_back_for_unsluggable_names() {
        assert_eq!(suggested_export_file_name(""), "grocery-list.json");
        assert_eq!(suggested_export_file_name("!!!"), "grocery-list.json");
    }
}
