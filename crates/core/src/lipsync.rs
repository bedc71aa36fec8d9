//! Fabricated lip-sync timing: per-word visemes and a fixed target
//! synchronization error.
//!
//! This is placeholder data shaped like real TTS viseme output. The
//! classification is a binary first-letter vowel test and the error value
//! is a constant, not a measurement.

use serde::Serialize;

use crate::audio::AudioScript;

// ---------------------------------------------------------------------------
// Timing constants
// ---------------------------------------------------------------------------

/// Estimated narration time per character, in seconds (~80 ms).
pub const SECS_PER_CHAR: f64 = 0.08;

/// Fixed target synchronization error reported for every plan, in
/// milliseconds. Placeholder until a real TTS pass measures it.
pub const SYNC_ERROR_MS: u32 = 25;

/// Frame rate of the viseme track.
pub const LIPSYNC_FPS: u32 = 30;

// ---------------------------------------------------------------------------
// Viseme classification
// ---------------------------------------------------------------------------

/// Binary mouth-shape class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisemeShape {
    Open,
    Closed,
}

/// Classify a word by its first letter: vowels open the mouth, anything
/// else (consonants, digits, accented letters) keeps it closed.
pub fn classify_word(word: &str) -> VisemeShape {
    let first = word
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next());
    match first {
        Some('a' | 'e' | 'i' | 'o' | 'u') => VisemeShape::Open,
        _ => VisemeShape::Closed,
    }
}

/// Estimated duration of one spoken word, in seconds.
pub fn word_duration_secs(word: &str) -> f64 {
    word.chars().count() as f64 * SECS_PER_CHAR
}

// ---------------------------------------------------------------------------
// Lip-sync pack
// ---------------------------------------------------------------------------

/// One viseme entry on the fabricated timeline.
#[derive(Debug, Clone, Serialize)]
pub struct Viseme {
    /// Seconds from the start of narration.
    pub timestamp: f64,
    pub viseme: VisemeShape,
    #[serde(rename = "duracao")]
    pub duration_secs: f64,
}

/// The derived lip-sync package for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct LipSyncPack {
    /// Filled in after a real TTS pass; always empty here.
    pub audio_url: String,
    #[serde(rename = "duracao_total")]
    pub total_duration_secs: f64,
    pub visemes: Vec<Viseme>,
    pub fps: u32,
    #[serde(rename = "erro_sincronizacao_ms")]
    pub sync_error_ms: u32,
}

/// Derive the lip-sync pack from the narration text: one viseme per
/// whitespace-delimited word, each at the running timestamp of all words
/// before it.
pub fn build_lipsync(audio: &AudioScript) -> LipSyncPack {
    let mut visemes = Vec::new();
    let mut cursor_secs = 0.0;

    for word in audio.full_text.split_whitespace() {
        let duration_secs = word_duration_secs(word);
        visemes.push(Viseme {
            timestamp: cursor_secs,
            viseme: classify_word(word),
            duration_secs,
        });
        cursor_secs += duration_secs;
    }

    LipSyncPack {
        audio_url: String::new(),
        total_duration_secs: cursor_secs,
        visemes,
        fps: LIPSYNC_FPS,
        sync_error_ms: SYNC_ERROR_MS,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
