use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use super::KeyValueStore;

pub const SURVEY_DONE_KEY: &str = "survey_done";
pub const DAILY_SELECTION_KEY: &str = "daily_selection";
/// Pre-migration layout that stored the date and id under separate keys.
pub const LEGACY_DATE_KEY: &str = "last_selection_date";
pub const LEGACY_RECIPE_ID_KEY: &str = "last_recipe_id";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The day's draw. Only the latest one is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySelection {
    pub date: NaiveDate,
    pub recipe_id: String,
}

/// Typed access to the persisted survey flag and daily selection.
#[derive(Clone)]
pub struct SelectionRecords {
    store: Arc<dyn KeyValueStore>,
}

impl SelectionRecords {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn survey_done(&self) -> Result<bool> {
        let value = self.store.get(SURVEY_DONE_KEY).await?;
        Ok(value.as_deref() == Some("true"))
    }

    pub async fn mark_survey_done(&self) -> Result<()> {
        self.store
            .set(SURVEY_DONE_KEY, "true")
            .await
            .context("failed to persist survey completion")
    }

    /// Latest daily selection, or `None` when nothing usable is stored.
    pub async fn daily_selection(&self) -> Result<Option<DailySelection>> {
        if let Some(raw) = self.store.get(DAILY_SELECTION_KEY).await? {
            return match serde_json::from_str::<DailySelection>(&raw) {
                Ok(selection) => Ok(Some(selection)),
                Err(err) => {
                    warn!("Ignoring unreadable daily selection record: {err}");
                    Ok(None)
                }
            };
        }

        self.legacy_selection().await
    }

    pub async fn save_daily_selection(&self, selection: &DailySelection) -> Result<()> {
        let serialized = serde_json::to_string(selection)?;
        self.store
            .set(DAILY_SELECTION_KEY, &serialized)
            .await
            .context("failed to persist daily selection")
    }

    async fn legacy_selection(&self) -> Result<Option<DailySelection>> {
        let date = self.store.get(LEGACY_DATE_KEY).await?;
        let recipe_id = self.store.get(LEGACY_RECIPE_ID_KEY).await?;

        let (Some(date), Some(recipe_id)) = (date, recipe_id) else {
            return Ok(None);
        };
        if recipe_id.is_empty() {
            return Ok(None);
        }

        match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
            Ok(date) => Ok(Some(DailySelection { date, recipe_id })),
            Err(err) => {
                warn!("Ignoring legacy selection date '{date}': {err}");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).expect("valid date")
    }

    fn records(store: MemoryStore) -> SelectionRecords {
        SelectionRecords::new(Arc::new(store))
    }

    #[tokio::test]
    async fn first_run_has_nothing() {
        let records = records(MemoryStore::new());
        assert!(!records.survey_done().await.expect("survey flag"));
        assert_eq!(records.daily_selection().await.expect("selection"), None);
    }

    #[tokio::test]
    async fn survey_flag_requires_true() {
        let records = records(MemoryStore::with_entries([(SURVEY_DONE_KEY, "yes")]));
        assert!(!records.survey_done().await.expect("survey flag"));

        records.mark_survey_done().await.expect("mark done");
        records.mark_survey_done().await.expect("mark done twice");
        assert!(records.survey_done().await.expect("survey flag"));
    }

    #[tokio::test]
    async fn selection_is_one_json_value() {
        let store = Arc::new(MemoryStore::new());
        let records = SelectionRecords::new(store.clone());
        let selection = DailySelection {
            date: day(19),
            recipe_id: "3".into(),
        };

        records.save_daily_selection(&selection).await.expect("save");

        let raw = store
            .get(DAILY_SELECTION_KEY)
            .await
            .expect("get")
            .expect("record stored");
        assert_eq!(raw, r#"{"date":"2026-10-19","recipeId":"3"}"#);
        assert_eq!(
            records.daily_selection().await.expect("load"),
            Some(selection)
        );
    }

    #[tokio::test]
    async fn later_selection_overwrites_earlier() {
        let records = records(MemoryStore::new());
        for (d, id) in [(18, "1"), (19, "4")] {
            records
                .save_daily_selection(&DailySelection {
                    date: day(d),
                    recipe_id: id.into(),
                })
                .await
                .expect("save");
        }

        let loaded = records.daily_selection().await.expect("load").expect("present");
        assert_eq!(loaded.date, day(19));
        assert_eq!(loaded.recipe_id, "4");
    }

    #[tokio::test]
    async fn corrupt_record_reads_as_absent() {
        let records = records(MemoryStore::with_entries([(DAILY_SELECTION_KEY, "{not json")]));
        assert_eq!(records.daily_selection().await.expect("load"), None);
    }

    #[tokio::test]
    async fn legacy_pair_is_read_when_present() {
        let records = records(MemoryStore::with_entries([
            (LEGACY_DATE_KEY, "2026-10-19"),
            (LEGACY_RECIPE_ID_KEY, "5"),
        ]));

        assert_eq!(
            records.daily_selection().await.expect("load"),
            Some(DailySelection {
                date: day(19),
                recipe_id: "5".into(),
            })
        );
    }

    #[tokio::test]
    async fn half_written_legacy_pair_is_absent() {
        let records = records(MemoryStore::with_entries([(LEGACY_DATE_KEY, "2026-10-19")]));
        assert_eq!(records.daily_selection().await.expect("load"), None);

        let records = records_with_bad_date();
        assert_eq!(records.daily_selection().await.expect("load"), None);
    }

    fn records_with_bad_date() -> SelectionRecords {
        records(MemoryStore::with_entries([
            (LEGACY_DATE_KEY, "19/10/2026"),
            (LEGACY_RECIPE_ID_KEY, "1"),
        ]))
    }
}
