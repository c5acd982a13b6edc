//! Grocery list model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique identifier for a grocery list, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroceryListId(Uuid);

impl GroceryListId {
    /// Create a new unique list ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for GroceryListId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GroceryListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GroceryListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A unique identifier for the client owning a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new unique client ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A grocery list owned by a client
///
/// The identity is immutable; name and color are the display attributes the
/// color editor may change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    /// Unique identifier
    pub id: GroceryListId,
    /// Display name
    pub name: String,
    /// Creation date
    pub created_on: NaiveDate,
    /// Display color as `#RRGGBB`
    pub color: String,
    /// Owning client
    pub owner_id: ClientId,
}

impl GroceryList {
    /// Create a new list dated today.
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>, owner_id: ClientId) -> Self {
        Self {
            id: GroceryListId::new(),
            name: name.into(),
            created_on: chrono::Utc::now().date_naive(),
            color: color.into(),
            owner_id,
        }
    }

    /// Replace the display name.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the display color.
    pub fn recolor(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }
}

/// Normalize a `#RRGGBB` color string to uppercase hex.
///
/// Returns `None` when the input is not a hash-prefixed 6-digit hex color.
#[must_use]
pub fn normalize_color(raw: &str) -> Option<String> {
    let digits = raw.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_id_unique() {
        let id1 = GroceryListId::new();
        let id2 = GroceryListId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_list_id_parse() {
        let id = GroceryListId::new();
        let parsed: GroceryListId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_new_list() {
        let owner = ClientId::new();
        let list = GroceryList::new("Weekly shop", "#2F6B4F", owner);
        assert_eq!(list.name, "Weekly shop");
        assert_eq!(list.color, "#2F6B4F");
        assert_eq!(list.owner_id, owner);
        assert_eq!(list.created_on, chrono::Utc::now().date_naive());
    }

    #[test]
    fn test_rename_and_recolor() {
        let mut list = GroceryList::new("Weekly shop", "#2F6B4F", ClientId::new());
        let id = list.id;

        list.rename("Weekend shop");
        list.recolor("#AA0000");

        assert_eq!(list.id, id);
        assert_eq!(list.name, "Weekend shop");
        assert_eq!(list.color, "#AA0000");
    }

    #[test]
    fn test_normalize_color_accepts_hex() {
        assert_eq!(normalize_color("#2f6b4f"), Some("#2F6B4F".to_string()));
        assert_eq!(normalize_color("  #AABBCC "), Some("#AABBCC".to_string()));
    }

    #[test]
    fn test_normalize_color_rejects_malformed() {
        assert_eq!(normalize_color("2F6B4F"), None);
        assert_eq!(normalize_color("#2F6B4"), None);
        assert_eq!(normalize_color("#2F6B4FA"), None);
        assert_eq!(normalize_color("#2F6B4G"), None);
        assert_eq!(normalize_color(""), None);
    }
}
