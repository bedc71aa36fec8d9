//! Generation request types, enum domains, and validation.
//!
//! Unknown wire values for every request enum deserialize to a documented
//! fallback instead of failing; this leniency is a deliberate policy of the
//! engine, not an accident. Only [`NarrativeStyle`] keeps a distinct
//! `Unknown` variant, because an unrecognized style selects the sinistro
//! template bundle while mapping to the neutral narration emotion.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Duration bounds
// ---------------------------------------------------------------------------

/// Minimum requested video duration in seconds.
pub const MIN_DURATION_SECS: u32 = 15;

/// Maximum requested video duration in seconds.
pub const MAX_DURATION_SECS: u32 = 600;

// ---------------------------------------------------------------------------
// Request enums
// ---------------------------------------------------------------------------

/// Narration language. Unknown values fall back to Portuguese, the
/// studio's primary locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Language {
    Pt,
    En,
    Es,
}

impl Language {
    /// Parse a wire label, falling back to [`Language::Pt`].
    pub fn parse(s: &str) -> Self {
        match s {
            "en" => Self::En,
            "es" => Self::Es,
            _ => Self::Pt,
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Narrative style driving the scene template bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum NarrativeStyle {
    Sinistro,
    #[serde(rename = "psicológico")]
    Psicologico,
    FoundFootage,
    Documental,
    Surreal,
    /// Unrecognized style; resolves to the sinistro template bundle but
    /// to the neutral narration emotion.
    Unknown,
}

impl NarrativeStyle {
    /// Parse a wire label. Anything outside the five known styles maps
    /// to [`NarrativeStyle::Unknown`].
    pub fn parse(s: &str) -> Self {
        match s {
            "sinistro" => Self::Sinistro,
            "psicológico" => Self::Psicologico,
            "found_footage" => Self::FoundFootage,
            "documental" => Self::Documental,
            "surreal" => Self::Surreal,
            _ => Self::Unknown,
        }
    }

    /// Wire label, used in prompts, hashtags, and publish copy.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sinistro => "sinistro",
            Self::Psicologico => "psicológico",
            Self::FoundFootage => "found_footage",
            Self::Documental => "documental",
            Self::Surreal => "surreal",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for NarrativeStyle {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Narration voice profile, passed through to the audio script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VoiceStyle {
    DeepMale,
    CalmFemale,
    Neutral,
    Whisper,
}

impl VoiceStyle {
    /// Parse a wire label, falling back to [`VoiceStyle::Neutral`].
    pub fn parse(s: &str) -> Self {
        match s {
            "deep_male" => Self::DeepMale,
            "calm_female" => Self::CalmFemale,
            "whisper" => Self::Whisper,
            _ => Self::Neutral,
        }
    }
}

impl From<String> for VoiceStyle {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Visual preset, used for thumbnail prompt phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VisualPreset {
    VhsGrain,
    CinematicDark,
    NoirHighcontrast,
    MinimalAnimated,
}

impl VisualPreset {
    /// Parse a wire label, falling back to [`VisualPreset::VhsGrain`].
    pub fn parse(s: &str) -> Self {
        match s {
            "cinematic_dark" => Self::CinematicDark,
            "noir_highcontrast" => Self::NoirHighcontrast,
            "minimal_animated" => Self::MinimalAnimated,
            _ => Self::VhsGrain,
        }
    }

    /// Wire label, used in thumbnail prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VhsGrain => "vhs_grain",
            Self::CinematicDark => "cinematic_dark",
            Self::NoirHighcontrast => "noir_highcontrast",
            Self::MinimalAnimated => "minimal_animated",
        }
    }
}

impl From<String> for VisualPreset {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

/// Target export format. Unknown values fall back to the vertical 9:16
/// profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ExportFormat {
    VerticalTiktok,
    WidescreenYoutube,
    SquareInstagram,
}

impl ExportFormat {
    /// Parse a wire label, falling back to [`ExportFormat::VerticalTiktok`].
    pub fn parse(s: &str) -> Self {
        match s {
            "widescreen_youtube" => Self::WidescreenYoutube,
            "square_instagram" => Self::SquareInstagram,
            _ => Self::VerticalTiktok,
        }
    }
}

impl From<String> for ExportFormat {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A validated request for one generation plan. Immutable once handed to
/// [`crate::plan::build_plan`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Theme or title of the video. Must be non-empty after trimming.
    pub theme_title: String,
    /// Total duration in seconds, UI-constrained to
    /// [`MIN_DURATION_SECS`]..=[`MAX_DURATION_SECS`].
    pub duration_seconds: u32,
    pub language: Language,
    /// Requested export formats; at least one.
    pub export_formats: Vec<ExportFormat>,
    pub narrative_style: NarrativeStyle,
    pub voice_style: VoiceStyle,
    pub visual_preset: VisualPreset,
    #[serde(default)]
    pub auto_publish: bool,
    #[serde(default)]
    pub extra_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a theme/title is non-empty after trimming whitespace.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "theme_title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate that a duration is within the UI-facing bounds.
///
/// The plan builder itself accepts any duration; this bound is enforced
/// at the request boundary only.
pub fn validate_duration(duration_seconds: u32) -> Result<(), CoreError> {
    if !(MIN_DURATION_SECS..=MAX_DURATION_SECS).contains(&duration_seconds) {
        return Err(CoreError::Validation(format!(
            "duration_seconds must be between {MIN_DURATION_SECS} and {MAX_DURATION_SECS}, got {duration_seconds}"
        )));
    }
    Ok(())
}

/// Validate that at least one export format was requested.
pub fn validate_export_formats(formats: &[ExportFormat]) -> Result<(), CoreError> {
    if formats.is_empty() {
        return Err(CoreError::Validation(
            "export_formats must contain at least one format".to_string(),
        ));
    }
    Ok(())
}

/// Validate a full request before it reaches the plan builder.
pub fn validate_request(request: &GenerationRequest) -> Result<(), CoreError> {
    validate_title(&request.theme_title)?;
    validate_duration(request.duration_seconds)?;
    validate_export_formats(&request.export_formats)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            theme_title: "A casa abandonada".to_string(),
            duration_seconds: 60,
            language: Language::Pt,
            export_formats: vec![ExportFormat::VerticalTiktok],
            narrative_style: NarrativeStyle::Sinistro,
            voice_style: VoiceStyle::DeepMale,
            visual_preset: VisualPreset::CinematicDark,
            auto_publish: false,
            extra_description: None,
        }
    }

    // -- validate_title --

    #[test]
    fn non_empty_title_accepted() {
        assert!(validate_title("Test").is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_title("").is_err());
    }

    #[test]
    fn whitespace_only_title_rejected() {
        assert!(validate_title("   \t ").is_err());
    }

    // -- validate_duration --

    #[test]
    fn duration_at_bounds_accepted() {
        assert!(validate_duration(MIN_DURATION_SECS).is_ok());
        assert!(validate_duration(MAX_DURATION_SECS).is_ok());
    }

    #[test]
    fn duration_outside_bounds_rejected() {
        assert!(validate_duration(MIN_DURATION_SECS - 1).is_err());
        assert!(validate_duration(MAX_DURATION_SECS + 1).is_err());
    }

    // -- validate_export_formats --

    #[test]
    fn empty_format_list_rejected() {
        assert!(validate_export_formats(&[]).is_err());
    }

    #[test]
    fn single_format_accepted() {
        assert!(validate_export_formats(&[ExportFormat::SquareInstagram]).is_ok());
    }

    // -- validate_request --

    #[test]
    fn valid_request_accepted() {
        assert!(validate_request(&request()).is_ok());
    }

    #[test]
    fn request_with_blank_title_rejected() {
        let mut req = request();
        req.theme_title = "  ".to_string();
        assert!(validate_request(&req).is_err());
    }

    // -- enum leniency --

    #[test]
    fn unknown_style_deserializes_to_unknown() {
        let style: NarrativeStyle = serde_json::from_str("\"unknown_style\"").unwrap();
        assert_eq!(style, NarrativeStyle::Unknown);
    }

    #[test]
    fn accented_style_round_trips() {
        let style: NarrativeStyle = serde_json::from_str("\"psicológico\"").unwrap();
        assert_eq!(style, NarrativeStyle::Psicologico);
        assert_eq!(serde_json::to_string(&style).unwrap(), "\"psicológico\"");
    }

    #[test]
    fn unknown_language_falls_back_to_pt() {
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::Pt);
    }

    #[test]
    fn unknown_format_falls_back_to_vertical() {
        let format: ExportFormat = serde_json::from_str("\"betamax\"").unwrap();
        assert_eq!(format, ExportFormat::VerticalTiktok);
    }

    #[test]
    fn unknown_voice_falls_back_to_neutral() {
        let voice: VoiceStyle = serde_json::from_str("\"robotic\"").unwrap();
        assert_eq!(voice, VoiceStyle::Neutral);
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{
            "theme_title": "Test",
            "duration_seconds": 60,
            "language": "pt",
            "export_formats": ["vertical_tiktok"],
            "narrative_style": "sinistro",
            "voice_style": "deep_male",
            "visual_preset": "cinematic_dark"
        }"#;
        let req: GenerationRequest = serde_json::from_str(json).unwrap();
        assert!(!req.auto_publish);
        assert!(req.extra_description.is_none());
    }
}
