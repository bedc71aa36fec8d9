//! Asset manifest assembly and asset filename derivation.

use serde::Serialize;

use crate::script::Script;
use crate::storyboard::Storyboard;

// ---------------------------------------------------------------------------
// Filenames
// ---------------------------------------------------------------------------

/// Filename of the single background music track.
pub const BACKGROUND_TRACK_FILE: &str = "background_music.mp3";

/// Image asset filename for a storyboard frame.
pub fn frame_filename(frame_number: u32) -> String {
    format!("frame_{frame_number}.png")
}

/// Sound-effect asset filename derived from the effect label.
pub fn sfx_filename(effect: &str) -> String {
    format!("sfx_{}.mp3", effect.replace(' ', "_"))
}

// ---------------------------------------------------------------------------
// Asset types
// ---------------------------------------------------------------------------

/// Kind of a manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetKind {
    #[serde(rename = "imagem")]
    Image,
    #[serde(rename = "trilha")]
    Track,
    #[serde(rename = "efeito")]
    Effect,
}

/// One entry of the asset manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    #[serde(rename = "tipo")]
    pub kind: AssetKind,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(rename = "duracao", skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Manifest assembly
// ---------------------------------------------------------------------------

/// Collect the distinct sound-effect labels across all scenes, in first
/// appearance order.
pub fn distinct_sound_effects(script: &Script) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for scene in &script.scenes {
        for effect in &scene.sound_effects {
            if !result.contains(effect) {
                result.push(effect.clone());
            }
        }
    }
    result
}

/// Assemble the asset manifest: one image per storyboard frame, one
/// background track, and one effect entry per distinct sound-effect
/// label across all scenes.
pub fn build_manifest(script: &Script, storyboard: &Storyboard) -> Vec<Asset> {
    let mut assets = Vec::with_capacity(storyboard.frames.len() + 1);

    for frame in &storyboard.frames {
        assets.push(Asset {
            kind: AssetKind::Image,
            name: frame_filename(frame.frame_number),
            prompt: Some(frame.image_prompt.clone()),
            duration_secs: None,
            tags: frame.keywords.clone(),
        });
    }

    assets.push(Asset {
        kind: AssetKind::Track,
        name: BACKGROUND_TRACK_FILE.to_string(),
        prompt: Some(format!(
            "Trilha sonora dark {} para vídeo de terror",
            script.style.as_str()
        )),
        duration_secs: Some(script.total_duration_secs),
        tags: vec![
            "dark".to_string(),
            "cinematic".to_string(),
            script.style.as_str().to_string(),
        ],
    });

    for effect in distinct_sound_effects(script) {
        assets.push(Asset {
            kind: AssetKind::Effect,
            name: sfx_filename(&effect),
            prompt: None,
            duration_secs: None,
            tags: vec![effect, "sfx".to_string()],
        });
    }

    assets
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{
        ExportFormat, GenerationRequest, Language, NarrativeStyle, VisualPreset, VoiceStyle,
    };
    use crate::script::build_script;
    use crate::storyboard::build_storyboard;

    fn fixtures() -> (Script, Storyboard) {
        let script = build_script(&GenerationRequest {
            theme_title: "O porão".to_string(),
            duration_seconds: 60,
            language: Language::Pt,
            export_formats: vec![ExportFormat::VerticalTiktok],
            narrative_style: NarrativeStyle::Sinistro,
            voice_style: VoiceStyle::DeepMale,
            visual_preset: VisualPreset::VhsGrain,
            auto_publish: false,
            extra_description: None,
        });
        let storyboard = build_storyboard(&script, "dark_test");
        (script, storyboard)
    }

    // -- filenames --

    #[test]
    fn frame_filenames_use_global_frame_number() {
        assert_eq!(frame_filename(0), "frame_0.png");
        assert_eq!(frame_filename(42), "frame_42.png");
    }

    #[test]
    fn sfx_filenames_replace_spaces() {
        assert_eq!(sfx_filename("passos distantes"), "sfx_passos_distantes.mp3");
        assert_eq!(sfx_filename("eco"), "sfx_eco.mp3");
    }

    // -- distinct_sound_effects --

    #[test]
    fn effects_are_deduplicated_across_scenes() {
        let (script, _) = fixtures();
        // All 3 sinister scenes share the same 3 effect labels.
        let effects = distinct_sound_effects(&script);
        assert_eq!(effects, vec!["sussurros", "passos distantes", "vento frio"]);
    }

    // -- build_manifest --

    #[test]
    fn manifest_has_one_image_per_frame() {
        let (script, storyboard) = fixtures();
        let manifest = build_manifest(&script, &storyboard);

        let images = manifest
            .iter()
            .filter(|a| a.kind == AssetKind::Image)
            .count();
        assert_eq!(images as u32, storyboard.total_frames);
    }

    #[test]
    fn manifest_has_exactly_one_background_track() {
        let (script, storyboard) = fixtures();
        let manifest = build_manifest(&script, &storyboard);

        let tracks: Vec<&Asset> = manifest
            .iter()
            .filter(|a| a.kind == AssetKind::Track)
            .collect();
        assert_eq!(tracks.len(), 1);

        let track = tracks[0];
        assert_eq!(track.name, BACKGROUND_TRACK_FILE);
        assert_eq!(track.duration_secs, Some(60));
        assert!(track.tags.contains(&"sinistro".to_string()));
    }

    #[test]
    fn manifest_has_one_effect_per_distinct_label() {
        let (script, storyboard) = fixtures();
        let manifest = build_manifest(&script, &storyboard);

        let effects: Vec<&Asset> = manifest
            .iter()
            .filter(|a| a.kind == AssetKind::Effect)
            .collect();
        assert_eq!(effects.len(), 3);
        assert!(effects.iter().all(|a| a.tags.contains(&"sfx".to_string())));
        assert!(effects.iter().all(|a| a.prompt.is_none()));
    }

    #[test]
    fn image_assets_carry_frame_prompt_and_keywords() {
        let (script, storyboard) = fixtures();
        let manifest = build_manifest(&script, &storyboard);

        let first = &manifest[0];
        assert_eq!(first.kind, AssetKind::Image);
        assert_eq!(first.name, "frame_0.png");
        assert_eq!(first.prompt.as_deref(), Some(storyboard.frames[0].image_prompt.as_str()));
        assert_eq!(first.tags, storyboard.frames[0].keywords);
    }
}
