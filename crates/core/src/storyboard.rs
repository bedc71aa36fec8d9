//! Storyboard expansion: keyframe sampling and image-prompt derivation.
//!
//! The conceptual frame rate exists only to space keyframes: one frame is
//! sampled every [`KEYFRAME_INTERVAL_FRAMES`] underlying frames, i.e.
//! every third of a second.

use serde::Serialize;

use crate::request::NarrativeStyle;
use crate::script::{Scene, Script};

// ---------------------------------------------------------------------------
// Sampling constants
// ---------------------------------------------------------------------------

/// Conceptual frame rate of the storyboard timeline.
pub const STORYBOARD_FPS: u32 = 30;

/// Underlying frames between sampled keyframes.
pub const KEYFRAME_INTERVAL_FRAMES: u32 = 10;

/// Maximum keywords extracted from a scene description.
pub const MAX_FRAME_KEYWORDS: usize = 5;

/// Number of keyframes sampled from one scene.
pub fn frames_per_scene(scene_duration_secs: u32) -> u32 {
    scene_duration_secs * STORYBOARD_FPS / KEYFRAME_INTERVAL_FRAMES
}

// ---------------------------------------------------------------------------
// Prompt derivation
// ---------------------------------------------------------------------------

/// Intensity adjective for a frame: "crescente" before the scene's
/// temporal midpoint, "intensa" from the midpoint on.
pub fn intensity(frame_index: u32, frames_in_scene: u32) -> &'static str {
    if (frame_index as f64) < (frames_in_scene as f64) / 2.0 {
        "crescente"
    } else {
        "intensa"
    }
}

/// Image-generation prompt for one frame: scene description and lighting
/// plus the intensity adjective and fixed cinematic boilerplate.
pub fn image_prompt(scene: &Scene, frame_index: u32, frames_in_scene: u32) -> String {
    format!(
        "{}, {}, atmosfera {}, cinematográfico, 4K, ultra detalhado, {} camera",
        scene.description,
        scene.lighting,
        intensity(frame_index, frames_in_scene),
        scene.camera.kind.as_str(),
    )
}

/// Extract up to [`MAX_FRAME_KEYWORDS`] keywords from a scene
/// description: lowercase words longer than four characters, kept in
/// original order.
pub fn extract_keywords(description: &str) -> Vec<String> {
    description
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() > 4)
        .take(MAX_FRAME_KEYWORDS)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Storyboard types
// ---------------------------------------------------------------------------

/// One sampled instant within a scene.
#[derive(Debug, Clone, Serialize)]
pub struct StoryboardFrame {
    /// 1-based ordinal of the owning scene.
    #[serde(rename = "cena_id")]
    pub scene_index: u32,
    /// 0-based ordinal across the whole storyboard.
    #[serde(rename = "frame_numero")]
    pub frame_number: u32,
    /// Seconds from the start of the video.
    pub timestamp: f64,
    #[serde(rename = "prompt_imagem")]
    pub image_prompt: String,
    pub camera_angle: String,
    pub lighting: String,
    pub mood: NarrativeStyle,
    #[serde(rename = "elementos_chave")]
    pub keywords: Vec<String>,
}

/// The full storyboard for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct Storyboard {
    pub video_id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    pub frames: Vec<StoryboardFrame>,
    pub total_frames: u32,
    pub fps: u32,
}

/// Expand a script into its storyboard.
///
/// Frame timestamps are cumulative: each scene starts where the previous
/// one ended, and frames step by one keyframe interval within the scene.
pub fn build_storyboard(script: &Script, video_id: &str) -> Storyboard {
    let mut frames = Vec::new();
    let mut frame_number: u32 = 0;
    let mut scene_start_secs: f64 = 0.0;

    for scene in &script.scenes {
        let frames_in_scene = frames_per_scene(scene.duration_secs);
        for i in 0..frames_in_scene {
            frames.push(StoryboardFrame {
                scene_index: scene.index,
                frame_number,
                timestamp: scene_start_secs
                    + (i * KEYFRAME_INTERVAL_FRAMES) as f64 / STORYBOARD_FPS as f64,
                image_prompt: image_prompt(scene, i, frames_in_scene),
                camera_angle: scene.camera.kind.angle().to_string(),
                lighting: scene.lighting.clone(),
                mood: script.style,
                keywords: extract_keywords(&scene.description),
            });
            frame_number += 1;
        }
        scene_start_secs += scene.duration_secs as f64;
    }

    Storyboard {
        video_id: video_id.to_string(),
        title: script.title.clone(),
        total_frames: frames.len() as u32,
        frames,
        fps: STORYBOARD_FPS,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
