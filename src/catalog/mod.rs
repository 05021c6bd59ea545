//! Compiled-in recipe catalog.
//!
//! The catalog is the only source of recipe data. Lookups borrow `'static`
//! records; nothing here allocates recipes at runtime.

mod data;
pub mod recipe;

pub use recipe::{Category, Nutrition, Recipe, RecipeCard};

use crate::sources::RandomSource;

/// Every recipe, in catalog order.
pub fn all() -> &'static [Recipe] {
    data::RECIPES
}

pub fn find(id: &str) -> Option<&'static Recipe> {
    data::RECIPES.iter().find(|recipe| recipe.id == id)
}

pub fn by_category(category: Category) -> Vec<&'static Recipe> {
    data::RECIPES
        .iter()
        .filter(|recipe| recipe.category == category)
        .collect()
}

/// Draws one recipe of `category` uniformly through `rng`.
///
/// An empty subset falls back to the first catalog record instead of failing.
pub fn draw(category: Category, rng: &mut dyn RandomSource) -> Option<&'static Recipe> {
    draw_from(data::RECIPES, category, rng)
}

pub(crate) fn draw_from<'a>(
    recipes: &'a [Recipe],
    category: Category,
    rng: &mut dyn RandomSource,
) -> Option<&'a Recipe> {
    let candidates: Vec<&Recipe> = recipes
        .iter()
        .filter(|recipe| recipe.category == category)
        .collect();

    if candidates.is_empty() {
        return recipes.first();
    }

    // Clamp so a misbehaving source can never index out of range.
    let index = rng.pick_index(candidates.len()).min(candidates.len() - 1);
    Some(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::sources::{FixedIndex, ThreadRandom};

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = all().iter().map(|recipe| recipe.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn every_recipe_has_tags_and_sane_nutrition() {
        for recipe in all() {
            assert!(!recipe.tags.is_empty(), "recipe {} has no tags", recipe.id);
            let n = recipe.nutrition;
            assert!(n.calories >= 0.0 && n.protein >= 0.0 && n.fat >= 0.0 && n.carbs >= 0.0);
        }
    }

    #[test]
    fn find_resolves_known_ids_only() {
        assert_eq!(find("2").map(|r| r.category), Some(Category::Heavy));
        assert!(find("99").is_none());
    }

    #[test]
    fn draw_always_matches_category() {
        let mut rng = ThreadRandom::default();
        for category in Category::ALL {
            for _ in 0..50 {
                let recipe = draw(category, &mut rng).expect("catalog is not empty");
                assert_eq!(recipe.category, category);
            }
        }
    }

    #[test]
    fn draw_uses_the_source_index_within_the_subset() {
        let light = by_category(Category::Light);
        let recipe = draw(Category::Light, &mut FixedIndex(1)).expect("light recipes exist");
        assert_eq!(recipe.id, light[1].id);
    }

    #[test]
    fn draw_clamps_out_of_range_indices() {
        let recipe = draw(Category::Heavy, &mut FixedIndex(40)).expect("heavy recipe exists");
        assert_eq!(recipe.id, "2");
    }

    #[test]
    fn draw_falls_back_to_first_record_for_empty_subset() {
        let only_light: Vec<Recipe> = all()
            .iter()
            .filter(|recipe| recipe.category == Category::Light)
            .cloned()
            .collect();

        let recipe = draw_from(&only_light, Category::Heavy, &mut FixedIndex(0))
            .expect("fallback to first record");
        assert_eq!(recipe.id, only_light[0].id);
    }

    #[test]
    fn draw_from_empty_catalog_is_none() {
        assert!(draw_from(&[], Category::Light, &mut FixedIndex(0)).is_none());
    }
}
