use std::{sync::Arc, time::Duration};

use log::{debug, error, info, warn};
use tokio::{sync::Mutex, task::JoinHandle, time};

use crate::{
    catalog::{Category, Recipe},
    sources::{Clock, RandomSource, SystemClock, ThreadRandom},
    storage::SelectionRecords,
};

use super::{GachaSnapshot, GachaState, Screen, SurveyAnswers};

/// Receives a fresh snapshot after every accepted transition.
pub trait StateObserver: Send + Sync {
    fn state_changed(&self, snapshot: &GachaSnapshot);
}

#[derive(Debug, Default)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn state_changed(&self, _snapshot: &GachaSnapshot) {}
}

/// Time and randomness the controller draws with.
pub struct Sources {
    pub clock: Arc<dyn Clock>,
    pub rng: Box<dyn RandomSource>,
}

impl Sources {
    pub fn system() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            rng: Box::new(ThreadRandom),
        }
    }
}

/// Single owner of the screen state. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct GachaController {
    state: Arc<Mutex<GachaState>>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
    clock: Arc<dyn Clock>,
    records: SelectionRecords,
    observer: Arc<dyn StateObserver>,
    loader: Arc<Mutex<Option<JoinHandle<()>>>>,
    loading_delay: Duration,
}

impl GachaController {
    /// Restores the survey flag and today's draw from storage. Unreadable
    /// storage starts from a first run.
    pub async fn initialize(
        records: SelectionRecords,
        sources: Sources,
        observer: Arc<dyn StateObserver>,
        loading_delay: Duration,
    ) -> Self {
        let today = sources.clock.today();

        let survey_done = records.survey_done().await.unwrap_or_else(|err| {
            warn!("Failed to read survey flag, treating as absent: {err:#}");
            false
        });
        let daily_selection = records.daily_selection().await.unwrap_or_else(|err| {
            warn!("Failed to read daily selection, treating as absent: {err:#}");
            None
        });

        let state = GachaState::initial(survey_done, daily_selection, today);
        info!(
            "Gacha initialized on {:?} (locked today: {})",
            state.screen(),
            state.is_locked(today)
        );

        Self {
            state: Arc::new(Mutex::new(state)),
            rng: Arc::new(Mutex::new(sources.rng)),
            clock: sources.clock,
            records,
            observer,
            loader: Arc::new(Mutex::new(None)),
            loading_delay,
        }
    }

    pub async fn snapshot(&self) -> GachaSnapshot {
        let today = self.clock.today();
        self.state.lock().await.snapshot(today)
    }

    pub async fn screen(&self) -> Screen {
        self.state.lock().await.screen()
    }

    pub async fn favorites(&self) -> Vec<&'static Recipe> {
        self.state.lock().await.favorites().list()
    }

    pub async fn complete_survey(&self, answers: SurveyAnswers) -> GachaSnapshot {
        debug!("Survey answers: {answers:?}");

        // Re-persisting on repeat calls is harmless and keeps the flag in sync.
        if let Err(err) = self.records.mark_survey_done().await {
            error!("{err:#}");
        }

        self.transition("complete_survey", |state, _| state.complete_survey())
            .await
    }

    pub async fn select_category(&self, category: Category) -> GachaSnapshot {
        let today = self.clock.today();
        let (generation, snapshot) = {
            let mut state = self.state.lock().await;
            let generation = state.select_category(category, today);
            (generation, state.snapshot(today))
        };

        match generation {
            Some(generation) => {
                info!("Drawing a {category} recipe");
                self.spawn_loader(generation).await;
                self.observer.state_changed(&snapshot);
            }
            None => debug!("select_category({category}) ignored on {:?}", snapshot.screen),
        }

        snapshot
    }

    /// Completes the running draw immediately.
    ///
    /// The pending timer is detached rather than aborted: it may already be
    /// saving the draw, and once the screen leaves Loading its own completion
    /// is ignored.
    pub async fn finish_loading(&self) -> GachaSnapshot {
        self.detach_loader().await;
        self.complete_loading(None).await
    }

    pub async fn show_today_result(&self) -> GachaSnapshot {
        self.transition("show_today_result", |state, today| {
            state.show_today_result(today)
        })
        .await
    }

    pub async fn toggle_favorite(&self, recipe_id: &str) -> GachaSnapshot {
        self.transition("toggle_favorite", |state, _| {
            match state.toggle_favorite(recipe_id) {
                Some(liked) => {
                    info!("Recipe {recipe_id} liked: {liked}");
                    true
                }
                None => false,
            }
        })
        .await
    }

    pub async fn go_to_favorites(&self) -> GachaSnapshot {
        self.transition("go_to_favorites", |state, _| state.go_to_favorites())
            .await
    }

    pub async fn go_to_details(&self, recipe_id: &str) -> GachaSnapshot {
        self.transition("go_to_details", |state, _| state.go_to_details(recipe_id))
            .await
    }

    pub async fn go_back(&self) -> GachaSnapshot {
        self.transition("go_back", |state, _| state.go_back()).await
    }

    pub async fn go_home(&self) -> GachaSnapshot {
        self.transition("go_home", |state, _| state.go_home()).await
    }

    pub async fn redo(&self) -> GachaSnapshot {
        self.transition("redo", |state, today| state.redo(today))
            .await
    }

    async fn transition<F>(&self, name: &str, apply: F) -> GachaSnapshot
    where
        F: FnOnce(&mut GachaState, chrono::NaiveDate) -> bool,
    {
        let today = self.clock.today();
        let (accepted, snapshot) = {
            let mut state = self.state.lock().await;
            let accepted = apply(&mut *state, today);
            (accepted, state.snapshot(today))
        };

        if accepted {
            self.observer.state_changed(&snapshot);
        } else {
            debug!("{name} ignored on {:?}", snapshot.screen);
        }

        snapshot
    }

    async fn complete_loading(&self, generation: Option<u64>) -> GachaSnapshot {
        let today = self.clock.today();
        let mut state = self.state.lock().await;

        let selection = {
            let mut rng = self.rng.lock().await;
            state.finish_loading(generation, &mut **rng, today)
        };

        let Some(selection) = selection else {
            debug!("finish_loading ignored on {:?}", state.screen());
            return state.snapshot(today);
        };

        info!("Drew recipe {} for {}", selection.recipe_id, selection.date);

        // Persist while still holding the state so readers never see a Result
        // screen without its stored record.
        if let Err(err) = self.records.save_daily_selection(&selection).await {
            error!("{err:#}");
        }

        let snapshot = state.snapshot(today);
        drop(state);

        self.observer.state_changed(&snapshot);
        snapshot
    }

    async fn spawn_loader(&self, generation: u64) {
        // A previous timer can only be asleep here: a draw is completed under
        // the state lock, and a new one starts only from Select.
        let mut loader_guard = self.loader.lock().await;
        if let Some(handle) = loader_guard.take() {
            handle.abort();
        }

        let controller = self.clone();
        let delay = self.loading_delay;
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            controller.complete_loading(Some(generation)).await;
        });

        *loader_guard = Some(handle);
    }

    async fn detach_loader(&self) {
        self.loader.lock().await.take();
    }
}
