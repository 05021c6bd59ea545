//! Screen flow: survey, category pick, timed draw, result, details and
//! favorites, with a one-draw-per-day lock.

#[cfg(feature = "desktop")]
pub mod commands;
pub mod controller;
pub mod state;
pub mod survey;

pub use controller::{GachaController, NoopObserver, Sources, StateObserver};
pub use state::{CategoryOption, GachaSnapshot, GachaState, Screen, SelectOptions};
pub use survey::SurveyAnswers;
