//! Seed data for the in-memory services.
//!
//! The CLI has no storage engine; every invocation starts from the embedded
//! seed (or a JSON seed file given with `--data`) and mutates it in memory.

use std::path::Path;

use serde::{Deserialize, Serialize};

use grocery_core::models::{
    normalize_color, ClientId, GroceryList, GroceryListItem, Product,
};

use crate::error::CliError;

/// Seed file root: a product catalog plus lists referencing it by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    pub products: Vec<SeedProduct>,
    pub lists: Vec<SeedList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedProduct {
    pub name: String,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedList {
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub items: Vec<SeedItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub product: String,
    #[serde(default = "default_amount")]
    pub amount: u32,
}

const fn default_amount() -> u32 {
    1
}

/// Built dataset ready to hand to the in-memory services.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub lists: Vec<GroceryList>,
    pub products: Vec<Product>,
    pub items: Vec<GroceryListItem>,
}

/// Load seed data from a JSON file, or fall back to the embedded seed.
pub fn load_seed(path: Option<&Path>) -> Result<SeedData, CliError> {
    let seed_file = match path {
        Some(path) => parse_seed(&std::fs::read_to_string(path)?)?,
        None => default_seed(),
    };
    build_seed(seed_file)
}

/// Parse a seed file from raw JSON.
pub fn parse_seed(payload: &str) -> Result<SeedFile, CliError> {
    serde_json::from_str(payload)
        .map_err(|error| CliError::Seed(format!("invalid seed JSON: {error}")))
}

/// Resolve seed names into model instances with fresh ids.
pub fn build_seed(file: SeedFile) -> Result<SeedData, CliError> {
    let owner = ClientId::new();
    let products: Vec<Product> = file
        .products
        .iter()
        .map(|product| Product::new(&product.name, product.stock))
        .collect();

    let mut lists = Vec::new();
    let mut items = Vec::new();
    for seed_list in file.lists {
        let color = normalize_color(&seed_list.color).ok_or_else(|| {
            CliError::Seed(format!(
                "invalid color for list {}: {}",
                seed_list.name, seed_list.color
            ))
        })?;
        let list = GroceryList::new(&seed_list.name, color, owner);

        for seed_item in seed_list.items {
            if seed_item.amount == 0 {
                return Err(CliError::Seed(format!(
                    "zero amount for {} on list {}",
                    seed_item.product, seed_list.name
                )));
            }
            let product = products
                .iter()
                .find(|product| product.name.eq_ignore_ascii_case(&seed_item.product))
                .ok_or_else(|| {
                    CliError::Seed(format!(
                        "list {} references unknown product: {}",
                        seed_list.name, seed_item.product
                    ))
                })?;
            items.push(GroceryListItem::new(list.id, product.id, seed_item.amount));
        }
        lists.push(list);
    }

    Ok(SeedData {
        lists,
        products,
        items,
    })
}

/// The dataset used when no seed file is given.
pub fn default_seed() -> SeedFile {
    SeedFile {
        products: vec![
            seed_product("Milk", 6),
            seed_product("Eggs", 0),
            seed_product("Bread", 4),
            seed_product("Butter", 3),
            seed_product("Apples", 10),
            seed_product("Coffee", 2),
            seed_product("Cheese", 5),
        ],
        lists: vec![
            SeedList {
                name: "Weekly shop".to_string(),
                color: "#2F6B4F".to_string(),
                items: vec![SeedItem {
                    product: "Bread".to_string(),
                    amount: 2,
                }],
            },
            SeedList {
                name: "Birthday party".to_string(),
                color: "#B03A2E".to_string(),
                items: Vec::new(),
            },
        ],
    }
}

fn seed_product(name: &str, stock: u32) -> SeedProduct {
    SeedProduct {
        name: name.to_string(),
        stock,
    }
}
