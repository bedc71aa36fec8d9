//! Plan assembly: the [`GenerationPlan`] aggregate and the ordered
//! derivation that fills it.
//!
//! [`build_plan`] is referentially transparent: identifier and timestamp
//! are injected by the caller so the same request always yields the same
//! plan. [`generate_video_id`] exists for callers that want the
//! production id shape.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::assets::{build_manifest, Asset};
use crate::audio::{build_audio_script, AudioScript};
use crate::lipsync::{build_lipsync, LipSyncPack};
use crate::pipeline::{pipeline_steps, PipelineStep};
use crate::publishing::{build_metadata, build_thumbnails, PublishMetadata, Thumbnail};
use crate::quality::{build_quality_report, QualityReport};
use crate::render::{build_render_config, RenderConfig};
use crate::request::GenerationRequest;
use crate::script::{build_script, Script};
use crate::storyboard::{build_storyboard, Storyboard};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Prefix of every video identifier.
pub const VIDEO_ID_PREFIX: &str = "dark";

/// Length of the random identifier suffix.
pub const VIDEO_ID_SUFFIX_LEN: usize = 9;

/// Prefix of the downloadable plan file.
pub const EXPORT_FILE_PREFIX: &str = "darkstudio";

/// Produce a fresh video identifier: `dark_<unix_ms>_<9 alphanumeric>`.
pub fn generate_video_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(VIDEO_ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!(
        "{VIDEO_ID_PREFIX}_{}_{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}

/// Filename under which a plan is exported verbatim as JSON.
pub fn export_filename(video_id: &str) -> String {
    format!("{EXPORT_FILE_PREFIX}_{video_id}.json")
}

// ---------------------------------------------------------------------------
// Plan aggregate
// ---------------------------------------------------------------------------

/// The full structured generation plan. Created once per invocation and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationPlan {
    pub video_id: String,
    pub timestamp: DateTime<Utc>,
    pub input: GenerationRequest,
    #[serde(rename = "roteiro")]
    pub script: Script,
    pub storyboard: Storyboard,
    pub assets: Vec<Asset>,
    pub audio_script: AudioScript,
    pub lipsync_pack: LipSyncPack,
    pub render_config: RenderConfig,
    pub thumbnails: Vec<Thumbnail>,
    pub metadata: PublishMetadata,
    pub quality: QualityReport,
    pub pipeline: Vec<PipelineStep>,
    /// Rendered file references; always empty until a real render runs.
    pub output_files: Vec<String>,
}

/// Derive the complete generation plan for a request.
///
/// Pure and synchronous; each step feeds the next in a fixed order:
/// script, storyboard, assets, audio, lip-sync, render config,
/// thumbnails, publish metadata, quality checklist, pipeline.
pub fn build_plan(
    request: &GenerationRequest,
    video_id: String,
    timestamp: DateTime<Utc>,
) -> GenerationPlan {
    let script = build_script(request);
    let storyboard = build_storyboard(&script, &video_id);
    let assets = build_manifest(&script, &storyboard);
    let audio_script = build_audio_script(&script, request);
    let lipsync_pack = build_lipsync(&audio_script);
    let render_config = build_render_config(&request.export_formats);
    let thumbnails = build_thumbnails(
        &script.title,
        request.visual_preset,
        request.narrative_style,
    );
    let metadata = build_metadata(&script, request);
    let quality = build_quality_report(&lipsync_pack);
    let pipeline = pipeline_steps();

    GenerationPlan {
        video_id,
        timestamp,
        input: request.clone(),
        script,
        storyboard,
        assets,
        audio_script,
        lipsync_pack,
        render_config,
        thumbnails,
        metadata,
        quality,
        pipeline,
        output_files: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
