pub mod catalog;
pub mod favorites;
pub mod gacha;
pub mod host;
pub mod logging;
pub mod settings;
pub mod sources;
pub mod storage;

#[cfg(feature = "desktop")]
pub use desktop::run;

#[cfg(feature = "desktop")]
pub(crate) use desktop::AppState;

#[cfg(feature = "desktop")]
mod desktop {
    use std::sync::{Arc, Mutex};

    use tauri::{Manager, State};
    use tauri_plugin_opener::OpenerExt;

    use crate::{
        gacha::{
            commands::{
                complete_survey, finish_loading, get_gacha_state, get_recipe, go_back,
                go_home, go_to_details, go_to_favorites, list_favorites, list_recipes, redo,
                select_category, show_today_result, toggle_favorite, WebviewObserver,
            },
            GachaController, Sources,
        },
        host::{self, HandshakeOutcome, HostContext},
        settings::{GachaSettings, SettingsStore},
        storage::{SelectionRecords, SqliteStore},
    };

    pub(crate) struct AppState {
        pub(crate) gacha: GachaController,
        pub(crate) settings: SettingsStore,
        pub(crate) host: Mutex<HostContext>,
    }

    #[tauri::command]
    fn host_handshake(outcome: HandshakeOutcome, state: State<AppState>) -> HostContext {
        let context = host::resolve(outcome);
        let mut guard = state
            .host
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = context.clone();
        context
    }

    #[tauri::command]
    fn get_host_context(state: State<AppState>) -> HostContext {
        state
            .host
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    #[tauri::command]
    fn get_settings(state: State<AppState>) -> GachaSettings {
        state.settings.current()
    }

    #[tauri::command]
    fn open_recipe_link(state: State<AppState>, app_handle: tauri::AppHandle) -> Result<(), String> {
        let url = state.settings.current().recipe_link_url;
        app_handle
            .opener()
            .open_url(url, None::<&str>)
            .map_err(|e| e.to_string())
    }

    #[cfg_attr(mobile, tauri::mobile_entry_point)]
    pub fn run() {
        crate::logging::init();

        log::info!("Recipe gacha starting up...");

        tauri::Builder::default()
            .plugin(tauri_plugin_opener::init())
            .setup(|app| {
                let result = (|| -> anyhow::Result<()> {
                    let app_data_dir = app
                        .path()
                        .app_data_dir()
                        .map_err(|err| anyhow::anyhow!(err))?;
                    std::fs::create_dir_all(&app_data_dir)?;

                    let settings_path = app_data_dir.join("settings.json");
                    let settings_store = SettingsStore::new(settings_path)?;
                    let loading_delay = settings_store.current().loading_delay();

                    let store = SqliteStore::open(app_data_dir.join("recipe_gacha.sqlite3"))?;
                    let records = SelectionRecords::new(Arc::new(store));
                    let observer = Arc::new(WebviewObserver::new(app.handle().clone()));

                    let gacha = tauri::async_runtime::block_on(GachaController::initialize(
                        records,
                        Sources::system(),
                        observer,
                        loading_delay,
                    ));

                    app.manage(AppState {
                        gacha,
                        settings: settings_store,
                        host: Mutex::new(HostContext::anonymous()),
                    });

                    Ok(())
                })();

                result.map_err(|err| err.into())
            })
            .invoke_handler(tauri::generate_handler![
                get_gacha_state,
                complete_survey,
                select_category,
                finish_loading,
                show_today_result,
                toggle_favorite,
                list_favorites,
                go_to_favorites,
                go_to_details,
                go_back,
                go_home,
                redo,
                list_recipes,
                get_recipe,
                open_recipe_link,
                host_handshake,
                get_host_context,
                get_settings,
            ])
            .run(tauri::generate_context!())
            .expect("error while running tauri application");
    }
}
