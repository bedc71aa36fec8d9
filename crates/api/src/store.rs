//! In-process plan history.
//!
//! The studio treats persistence as an opaque create/list/read object
//! store with no retry, caching, or conflict logic; this keeps the same
//! contract in memory. Plans are immutable once inserted.

use tokio::sync::RwLock;

use chrono::{DateTime, Utc};
use darkstudio_core::plan::GenerationPlan;
use darkstudio_core::request::NarrativeStyle;
use serde::Serialize;

/// Summary entry for the history list.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary {
    pub video_id: String,
    pub title: String,
    pub narrative_style: NarrativeStyle,
    pub duration_seconds: u32,
    pub timestamp: DateTime<Utc>,
}

/// Append-only store of generated plans, newest listed first.
#[derive(Default)]
pub struct PlanStore {
    plans: RwLock<Vec<GenerationPlan>>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly built plan.
    pub async fn insert(&self, plan: GenerationPlan) {
        self.plans.write().await.push(plan);
    }

    /// History summaries, newest first.
    pub async fn list(&self) -> Vec<PlanSummary> {
        self.plans
            .read()
            .await
            .iter()
            .rev()
            .map(|plan| PlanSummary {
                video_id: plan.video_id.clone(),
                title: plan.script.title.clone(),
                narrative_style: plan.script.style,
                duration_seconds: plan.script.total_duration_secs,
                timestamp: plan.timestamp,
            })
            .collect()
    }

    /// Look up one plan by video id.
    pub async fn get(&self, video_id: &str) -> Option<GenerationPlan> {
        self.plans
            .read()
            .await
            .iter()
            .find(|plan| plan.video_id == video_id)
            .cloned()
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
