use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard},
    time::Duration,
};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

const LOADING_DELAY_ENV: &str = "RECIPE_GACHA_LOADING_MS";
const DEBUG_ENV: &str = "RECIPE_GACHA_DEBUG";
const DEBUG_LOADING_DELAY_MS: u64 = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct GachaSettings {
    /// How long the selecting animation runs before the draw completes.
    pub loading_delay_ms: u64,
    /// Destination opened by the "recipe details" buttons.
    pub recipe_link_url: String,
    /// App id handed to the messaging host during its init handshake.
    pub host_app_id: String,
}

impl Default for GachaSettings {
    fn default() -> Self {
        Self {
            loading_delay_ms: 1500,
            recipe_link_url: "https://more.asken.jp/".into(),
            host_app_id: "LIFF_ID_PLACEHOLDER".into(),
        }
    }
}

impl GachaSettings {
    /// Loading delay after environment overrides. An explicit delay wins over
    /// the debug shortcut.
    pub fn loading_delay(&self) -> Duration {
        let explicit = std::env::var(LOADING_DELAY_ENV)
            .ok()
            .and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(ms) => Some(ms),
                Err(err) => {
                    warn!("Ignoring {LOADING_DELAY_ENV}='{raw}': {err}");
                    None
                }
            });

        if let Some(ms) = explicit {
            return Duration::from_millis(ms);
        }

        let debug_mode = std::env::var(DEBUG_ENV)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        if debug_mode {
            Duration::from_millis(DEBUG_LOADING_DELAY_MS)
        } else {
            Duration::from_millis(self.loading_delay_ms)
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<GachaSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!("Settings at {} are unreadable, using defaults: {err}", path.display());
                GachaSettings::default()
            })
        } else {
            GachaSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn current(&self) -> GachaSettings {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, GachaSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
