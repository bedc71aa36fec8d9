//! Audio script assembly: narration concatenation, contiguous segment
//! timing, and the style → emotion lookup.

use serde::Serialize;

use crate::request::{GenerationRequest, Language, NarrativeStyle, VoiceStyle};
use crate::script::Script;

// ---------------------------------------------------------------------------
// Emotion lookup
// ---------------------------------------------------------------------------

/// Narration emotion label for a style. Unknown styles are read neutrally
/// even though their scenes use the sinistro template bundle.
pub fn emotion(style: NarrativeStyle) -> &'static str {
    match style {
        NarrativeStyle::Sinistro => "tensa e ameaçadora",
        NarrativeStyle::Psicologico => "inquietante e introspectiva",
        NarrativeStyle::FoundFootage => "realista e urgente",
        NarrativeStyle::Documental => "séria e investigativa",
        NarrativeStyle::Surreal => "onírica e desconcertante",
        NarrativeStyle::Unknown => "neutra",
    }
}

// ---------------------------------------------------------------------------
// SSML
// ---------------------------------------------------------------------------

/// Wrap the narration text in the minimal SSML envelope used by the
/// downstream TTS step.
pub fn wrap_ssml(text: &str) -> String {
    format!("<speak><prosody rate=\"medium\" pitch=\"low\">{text}</prosody></speak>")
}

// ---------------------------------------------------------------------------
// Audio script types
// ---------------------------------------------------------------------------

/// One narration segment, aligned with one scene.
#[derive(Debug, Clone, Serialize)]
pub struct AudioSegment {
    #[serde(rename = "inicio")]
    pub start_secs: u32,
    #[serde(rename = "fim")]
    pub end_secs: u32,
    #[serde(rename = "texto")]
    pub text: String,
    #[serde(rename = "voz")]
    pub voice: VoiceStyle,
    #[serde(rename = "emocao")]
    pub emotion: &'static str,
}

/// The full narration script with TTS metadata.
#[derive(Debug, Clone, Serialize)]
pub struct AudioScript {
    #[serde(rename = "texto_completo")]
    pub full_text: String,
    #[serde(rename = "segmentos")]
    pub segments: Vec<AudioSegment>,
    #[serde(rename = "voz_principal")]
    pub main_voice: VoiceStyle,
    #[serde(rename = "idioma")]
    pub language: Language,
    pub ssml: String,
}

/// Assemble the audio script from the derived scenes.
///
/// Segment bounds are the cumulative scene-duration offsets: contiguous,
/// non-overlapping, starting at zero. The covered range ends at the sum
/// of truncated scene durations, which may fall short of the requested
/// total by the documented rounding slack.
pub fn build_audio_script(script: &Script, request: &GenerationRequest) -> AudioScript {
    let mut segments = Vec::with_capacity(script.scenes.len());
    let mut cursor_secs: u32 = 0;

    for scene in &script.scenes {
        segments.push(AudioSegment {
            start_secs: cursor_secs,
            end_secs: cursor_secs + scene.duration_secs,
            text: scene.narration.clone(),
            voice: request.voice_style,
            emotion: emotion(script.style),
        });
        cursor_secs += scene.duration_secs;
    }

    let full_text = script
        .scenes
        .iter()
        .map(|s| s.narration.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let ssml = wrap_ssml(&full_text);

    AudioScript {
        full_text,
        segments,
        main_voice: request.voice_style,
        language: request.language,
        ssml,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
