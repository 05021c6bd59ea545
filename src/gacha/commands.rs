use log::error;
use tauri::{AppHandle, Emitter, State};

use crate::{
    catalog::{self, Category, RecipeCard},
    AppState,
};

use super::{GachaController, GachaSnapshot, StateObserver, SurveyAnswers};

const STATE_CHANGED_EVENT: &str = "gacha-state-changed";

/// Forwards every accepted transition to the webview.
pub struct WebviewObserver {
    app_handle: AppHandle,
}

impl WebviewObserver {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl StateObserver for WebviewObserver {
    fn state_changed(&self, snapshot: &GachaSnapshot) {
        if let Err(err) = self.app_handle.emit(STATE_CHANGED_EVENT, snapshot) {
            error!("Failed to emit {STATE_CHANGED_EVENT}: {err}");
        }
    }
}

fn controller_from_state(state: &State<'_, AppState>) -> GachaController {
    state.gacha.clone()
}

#[tauri::command]
pub async fn get_gacha_state(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).snapshot().await)
}

#[tauri::command]
pub async fn complete_survey(
    state: State<'_, AppState>,
    answers: Option<SurveyAnswers>,
) -> Result<GachaSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller
        .complete_survey(answers.unwrap_or_default())
        .await)
}

#[tauri::command]
pub async fn select_category(
    state: State<'_, AppState>,
    category: String,
) -> Result<GachaSnapshot, String> {
    let category: Category = category.parse().map_err(|e: anyhow::Error| e.to_string())?;
    Ok(controller_from_state(&state).select_category(category).await)
}

#[tauri::command]
pub async fn finish_loading(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).finish_loading().await)
}

#[tauri::command]
pub async fn show_today_result(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).show_today_result().await)
}

#[tauri::command]
pub async fn toggle_favorite(
    state: State<'_, AppState>,
    recipe_id: String,
) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state)
        .toggle_favorite(&recipe_id)
        .await)
}

#[tauri::command]
pub async fn list_favorites(state: State<'_, AppState>) -> Result<Vec<RecipeCard>, String> {
    let favorites = controller_from_state(&state).favorites().await;
    Ok(favorites.into_iter().map(RecipeCard::from).collect())
}

#[tauri::command]
pub async fn go_to_favorites(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).go_to_favorites().await)
}

#[tauri::command]
pub async fn go_to_details(
    state: State<'_, AppState>,
    recipe_id: String,
) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).go_to_details(&recipe_id).await)
}

#[tauri::command]
pub async fn go_back(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).go_back().await)
}

#[tauri::command]
pub async fn go_home(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).go_home().await)
}

#[tauri::command]
pub async fn redo(state: State<'_, AppState>) -> Result<GachaSnapshot, String> {
    Ok(controller_from_state(&state).redo().await)
}

#[tauri::command]
pub fn list_recipes() -> Vec<RecipeCard> {
    catalog::all().iter().map(RecipeCard::from).collect()
}

#[tauri::command]
pub fn get_recipe(recipe_id: String) -> Result<RecipeCard, String> {
    catalog::find(&recipe_id)
        .map(RecipeCard::from)
        .ok_or_else(|| format!("unknown recipe '{recipe_id}'"))
}
