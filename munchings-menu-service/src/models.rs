use std::fmt::Display;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use munchings_common::sync::{Collection, Record};
use munchings_common::{ValidationError, Validator};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "Starters")]
    Starters,
    #[serde(alias = "Mains")]
    Mains,
    #[serde(alias = "Desserts")]
    Desserts,
    #[serde(alias = "Mocktail", alias = "mocktail", alias = "Mocktails")]
    Mocktails,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Mocktails => "mocktails",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "starters" => Ok(Category::Starters),
            "mains" => Ok(Category::Mains),
            "desserts" => Ok(Category::Desserts),
            "mocktail" | "mocktails" => Ok(Category::Mocktails),
            other => Err(format!("Unrecognized category `{}`", other)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: BigDecimal,
    pub category: Category,
    #[serde(default)]
    pub image: String,
}

impl Record for MenuItem {
    const COLLECTION: Collection = Collection::MenuItems;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort(records: &mut [Self]) {
        records.sort_by_key(|i| i.category);
    }
}

/// Menu item fields as entered in the admin form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: Category,
    pub image: String,
}

impl NewMenuItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .require(&self.name, "name", "Name")
            .check(
                self.price >= BigDecimal::zero(),
                "price",
                "Price cannot be negative",
            )
            .finish()
    }
}

impl From<&MenuItem> for NewMenuItem {
    fn from(item: &MenuItem) -> Self {
        NewMenuItem {
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.clone(),
            category: item.category,
            image: item.image.clone(),
        }
    }
}

/// Distinct categories in the order they first appear.
pub fn categories(items: &[MenuItem]) -> Vec<Category> {
    let mut seen = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

/// `None` keeps every item ("all").
pub fn filter_by_category(items: &[MenuItem], category: Option<Category>) -> Vec<&MenuItem> {
    items
        .iter()
        .filter(|i| category.map_or(true, |c| i.category == c))
        .collect()
}
