//! Available-product derivation and search filtering.

use crate::models::{GroceryListItem, Product};

/// Return the products eligible for addition to the current list:
/// in stock and not already referenced by one of the list's items.
///
/// Order follows the catalog order.
#[must_use]
pub fn available_products(catalog: &[Product], items: &[GroceryListItem]) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| product.in_stock())
        .filter(|product| !items.iter().any(|item| item.product_id == product.id))
        .cloned()
        .collect()
}

/// Filter products by a case-insensitive substring match on the name.
///
/// An empty or whitespace-only query returns the input unfiltered.
#[must_use]
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let normalized_query = normalize_query(query);
    products
        .iter()
        .filter(|product| product_matches_query(product, &normalized_query))
        .cloned()
        .collect()
}

fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn product_matches_query(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{GroceryListId, GroceryListItem};

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn excludes_out_of_stock_products() {
        let catalog = vec![Product::new("Milk", 3), Product::new("Eggs", 0)];

        let available = available_products(&catalog, &[]);
        assert_eq!(names(&available), vec!["Milk"]);
    }

    #[test]
    fn excludes_products_already_on_the_list() {
        let catalog = vec![Product::new("Milk", 3), Product::new("Bread", 5)];
        let list_id = GroceryListId::new();
        let items = vec![GroceryListItem::new(list_id, catalog[1].id, 1)];

        let available = available_products(&catalog, &items);
        assert_eq!(names(&available), vec!["Milk"]);
    }

    #[test]
    fn keeps_catalog_order() {
        let catalog = vec![
            Product::new("Bread", 5),
            Product::new("Apples", 2),
            Product::new("Milk", 3),
        ];

        let available = available_products(&catalog, &[]);
        assert_eq!(names(&available), vec!["Bread", "Apples", "Milk"]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let products = vec![Product::new("Milk", 3), Product::new("Bread", 5)];

        assert_eq!(filter_products(&products, ""), products);
        assert_eq!(filter_products(&products, "   "), products);
    }

    #[test]
    fn matches_substring_anywhere_case_insensitively() {
        let products = vec![
            Product::new("Whole Milk", 3),
            Product::new("Buttermilk", 2),
            Product::new("Bread", 5),
        ];

        let filtered = filter_products(&products, "MILK");
        assert_eq!(names(&filtered), vec!["Whole Milk", "Buttermilk"]);
    }

    #[test]
    fn trims_query_before_matching() {
        let products = vec![Product::new("Milk", 3), Product::new("Bread", 5)];

        let filtered = filter_products(&products, "  milk ");
        assert_eq!(names(&filtered), vec!["Milk"]);
    }

    #[test]
    fn no_match_yields_empty_set() {
        let products = vec![Product::new("Milk", 3)];

        assert!(filter_products(&products, "egg").is_empty());
    }
}
