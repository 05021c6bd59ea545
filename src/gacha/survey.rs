use serde::{Deserialize, Serialize};

/// Onboarding answers. Only the fact that the survey was completed is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SurveyAnswers {
    /// Whether the user already uses the companion app; `None` when skipped.
    pub has_app: Option<bool>,
    pub frequency: String,
    pub duration: String,
    pub concern: String,
}
