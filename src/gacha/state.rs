use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    catalog::{self, Category, Recipe, RecipeCard},
    favorites::FavoriteSet,
    sources::RandomSource,
    storage::DailySelection,
};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Survey,
    Select,
    Loading,
    Result,
    Favorites,
    Details,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub category: Category,
    pub label: &'static str,
}

/// What the select screen offers: the three tiers, or a single button back to
/// the draw already made today.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SelectOptions {
    #[serde(rename_all = "camelCase")]
    Categories { options: Vec<CategoryOption> },
    #[serde(rename_all = "camelCase")]
    TodayResult { recipe_id: &'static str },
}

/// Everything the view layer needs to render the active screen.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GachaSnapshot {
    pub screen: Screen,
    pub selected_category: Category,
    pub current_recipe: Option<RecipeCard>,
    pub detail_recipe: Option<RecipeCard>,
    pub daily_locked: bool,
    pub select_options: SelectOptions,
    pub favorites: Vec<RecipeCard>,
    pub current_liked: bool,
    pub redo_available: bool,
}

/// The screen state machine. Transition methods return whether they were
/// accepted; rejected transitions leave every field untouched.
#[derive(Debug, Clone)]
pub struct GachaState {
    screen: Screen,
    selected_category: Category,
    current_recipe: Option<&'static Recipe>,
    detail_recipe: Option<&'static Recipe>,
    details_origin: Screen,
    daily_selection: Option<DailySelection>,
    favorites: FavoriteSet,
    loading_generation: u64,
}

impl GachaState {
    pub fn initial(
        survey_done: bool,
        daily_selection: Option<DailySelection>,
        today: NaiveDate,
    ) -> Self {
        let mut state = Self {
            screen: if survey_done {
                Screen::Select
            } else {
                Screen::Survey
            },
            selected_category: Category::default(),
            current_recipe: None,
            detail_recipe: None,
            details_origin: Screen::Result,
            daily_selection,
            favorites: FavoriteSet::new(),
            loading_generation: 0,
        };
        state.current_recipe = state.locked_recipe(today);
        state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn current_recipe(&self) -> Option<&'static Recipe> {
        self.current_recipe
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Recipe drawn today, if the stored draw is from `today` and still
    /// resolves in the catalog. An unknown id never locks.
    pub fn locked_recipe(&self, today: NaiveDate) -> Option<&'static Recipe> {
        self.daily_selection
            .as_ref()
            .filter(|selection| selection.date == today)
            .and_then(|selection| catalog::find(&selection.recipe_id))
    }

    pub fn is_locked(&self, today: NaiveDate) -> bool {
        self.locked_recipe(today).is_some()
    }

    pub fn complete_survey(&mut self) -> bool {
        if self.screen != Screen::Survey {
            return false;
        }
        self.screen = Screen::Select;
        true
    }

    /// Starts a draw. Returns the generation the loading timer must present
    /// to complete it.
    pub fn select_category(&mut self, category: Category, today: NaiveDate) -> Option<u64> {
        if self.screen != Screen::Select || self.is_locked(today) {
            return None;
        }
        self.selected_category = category;
        self.loading_generation = self.loading_generation.wrapping_add(1);
        self.screen = Screen::Loading;
        Some(self.loading_generation)
    }

    /// Completes the running draw and returns the record to persist.
    ///
    /// `generation` of `None` completes whatever draw is running; a stale
    /// generation is rejected.
    pub fn finish_loading(
        &mut self,
        generation: Option<u64>,
        rng: &mut dyn RandomSource,
        today: NaiveDate,
    ) -> Option<DailySelection> {
        if self.screen != Screen::Loading {
            return None;
        }
        if generation.is_some_and(|generation| generation != self.loading_generation) {
            return None;
        }

        let recipe = catalog::draw(self.selected_category, rng)?;
        let selection = DailySelection {
            date: today,
            recipe_id: recipe.id.to_string(),
        };

        self.current_recipe = Some(recipe);
        self.daily_selection = Some(selection.clone());
        self.screen = Screen::Result;
        Some(selection)
    }

    /// Jumps to the draw already made today from the select or favorites
    /// screen.
    pub fn show_today_result(&mut self, today: NaiveDate) -> bool {
        if !matches!(self.screen, Screen::Select | Screen::Favorites) {
            return false;
        }
        let Some(recipe) = self.locked_recipe(today) else {
            return false;
        };
        self.current_recipe = Some(recipe);
        self.screen = Screen::Result;
        true
    }

    /// Returns the new membership, or `None` when the toggle was rejected.
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> Option<bool> {
        if !matches!(
            self.screen,
            Screen::Result | Screen::Favorites | Screen::Details
        ) {
            return None;
        }
        let recipe = catalog::find(recipe_id)?;
        Some(self.favorites.toggle(recipe.id))
    }

    pub fn go_to_favorites(&mut self) -> bool {
        if !matches!(
            self.screen,
            Screen::Select | Screen::Result | Screen::Details
        ) {
            return false;
        }
        self.screen = Screen::Favorites;
        true
    }

    pub fn go_to_details(&mut self, recipe_id: &str) -> bool {
        if !matches!(self.screen, Screen::Result | Screen::Favorites) {
            return false;
        }
        let Some(recipe) = catalog::find(recipe_id) else {
            return false;
        };
        self.detail_recipe = Some(recipe);
        self.details_origin = self.screen;
        self.screen = Screen::Details;
        true
    }

    pub fn go_back(&mut self) -> bool {
        match self.screen {
            Screen::Details => {
                self.screen = self.details_origin;
                true
            }
            Screen::Favorites => {
                self.screen = Screen::Select;
                true
            }
            _ => false,
        }
    }

    pub fn go_home(&mut self) -> bool {
        if !matches!(
            self.screen,
            Screen::Result | Screen::Favorites | Screen::Details
        ) {
            return false;
        }
        self.screen = Screen::Select;
        true
    }

    /// Back to the picker for another draw. Only offered once the daily lock
    /// has lapsed.
    pub fn redo(&mut self, today: NaiveDate) -> bool {
        if self.screen != Screen::Result || self.is_locked(today) {
            return false;
        }
        self.screen = Screen::Select;
        true
    }

    pub fn snapshot(&self, today: NaiveDate) -> GachaSnapshot {
        let locked = self.locked_recipe(today);
        let select_options = match locked {
            Some(recipe) => SelectOptions::TodayResult {
                recipe_id: recipe.id,
            },
            None => SelectOptions::Categories {
                options: Category::ALL
                    .iter()
                    .map(|category| CategoryOption {
                        category: *category,
                        label: category.picker_label(),
                    })
                    .collect(),
            },
        };

        GachaSnapshot {
            screen: self.screen,
            selected_category: self.selected_category,
            current_recipe: self.current_recipe.map(RecipeCard::from),
            detail_recipe: self.detail_recipe.map(RecipeCard::from),
            daily_locked: locked.is_some(),
            select_options,
            favorites: self.favorites.list().into_iter().map(RecipeCard::from).collect(),
            current_liked: self
                .current_recipe
                .is_some_and(|recipe| self.favorites.is_favorite(recipe.id)),
            redo_available: self.screen == Screen::Result && locked.is_none(),
        }
    }
}
