use std::{fmt, ops::Deref, str::FromStr};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Meal-weight tier used to narrow the catalog before a draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Heavy,
    Moderate,
    Light,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Heavy, Category::Moderate, Category::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Heavy => "heavy",
            Category::Moderate => "moderate",
            Category::Light => "light",
        }
    }

    /// Label shown on the picker button.
    pub fn picker_label(&self) -> &'static str {
        match self {
            Category::Heavy => "しっかり食べたい",
            Category::Moderate => "ほどよく食べたい",
            Category::Light => "軽く済ませたい",
        }
    }

    /// Dish group shown above the title on the result card.
    pub fn group_label(&self) -> &'static str {
        match self {
            Category::Heavy => "肉・米のおかず",
            Category::Moderate => "魚・野菜のおかず",
            Category::Light => "汁物・ヘルシー",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Moderate
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "heavy" => Ok(Category::Heavy),
            "moderate" => Ok(Category::Moderate),
            "light" => Ok(Category::Light),
            other => Err(anyhow!("unknown category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

/// A compiled-in recipe. Records live for the whole program and are never
/// created or mutated at runtime.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub image: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    #[serde(flatten)]
    pub nutrition: Nutrition,
    pub tags: &'static [&'static str],
}

impl Recipe {
    /// First tag, used as the caption on favorites tiles.
    pub fn headline_tag(&self) -> Option<&'static str> {
        self.tags.first().copied()
    }
}

/// A recipe as the view layer receives it, with the labels derived from the
/// catalog record so the webview never keeps its own copy.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    #[serde(flatten)]
    recipe: Recipe,
    pub group_label: &'static str,
    pub headline_tag: Option<&'static str>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe: recipe.clone(),
            group_label: recipe.category.group_label(),
            headline_tag: recipe.headline_tag(),
        }
    }
}

impl Deref for RecipeCard {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        &self.recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_its_own_name() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("known category");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_rejects_unknown_names() {
        let err = "dessert".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("dessert"));
    }

    #[test]
    fn card_carries_view_labels() {
        let card = RecipeCard::from(crate::catalog::find("2").expect("recipe 2"));
        let json = serde_json::to_value(&card).expect("serialize");

        assert_eq!(json["id"], "2");
        assert_eq!(json["category"], "heavy");
        assert_eq!(json["groupLabel"], "肉・米のおかず");
        assert_eq!(json["headlineTag"], "#肉");
        assert_eq!(json["calories"], 650.0);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Light).expect("serialize");
        assert_eq!(json, "\"light\"");
    }
}
