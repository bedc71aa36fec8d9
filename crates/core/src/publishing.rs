//! Publish surface: thumbnail prompt suggestions, hashtags, and the
//! publication metadata record.

use serde::Serialize;

use crate::request::{GenerationRequest, Language, NarrativeStyle, VisualPreset};
use crate::script::Script;

// ---------------------------------------------------------------------------
// Thumbnails
// ---------------------------------------------------------------------------

/// One thumbnail prompt suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    pub prompt: String,
    #[serde(rename = "titulo_overlay")]
    pub title_overlay: String,
    #[serde(rename = "estilo")]
    pub style: String,
}

/// The three fixed thumbnail prompt templates, parameterized by title,
/// visual preset, and narrative style.
pub fn build_thumbnails(
    title: &str,
    preset: VisualPreset,
    style: NarrativeStyle,
) -> Vec<Thumbnail> {
    vec![
        Thumbnail {
            prompt: format!(
                "Thumbnail cinematográfica dark para vídeo \"{title}\", estilo {}, alta qualidade, 1920x1080",
                preset.as_str()
            ),
            title_overlay: title.to_string(),
            style: preset.as_str().to_string(),
        },
        Thumbnail {
            prompt: format!(
                "Thumbnail minimalista dark para \"{title}\", foco em atmosfera {}",
                style.as_str()
            ),
            title_overlay: title.to_string(),
            style: "minimal_dark".to_string(),
        },
        Thumbnail {
            prompt: format!(
                "Thumbnail impactante para vídeo de terror \"{title}\", cores vibrantes em fundo escuro"
            ),
            title_overlay: title.to_string(),
            style: "high_contrast".to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// Hashtags
// ---------------------------------------------------------------------------

/// Fixed base hashtags every plan starts with, in this order.
pub const BASE_HASHTAGS: &[&str] = &["terror", "misterio", "dark", "creepypasta"];

/// Derive the hashtag list: the fixed base tags, the style name, then
/// the first two words of the title. Tags are lower-cased, stripped of
/// internal whitespace, and prefixed with `#`.
pub fn build_hashtags(title: &str, style: NarrativeStyle) -> Vec<String> {
    let title_words = title.to_lowercase();
    let tags = BASE_HASHTAGS
        .iter()
        .copied()
        .chain(std::iter::once(style.as_str()))
        .chain(title_words.split(' ').take(2));

    tags.map(|tag| format!("#{}", tag.split_whitespace().collect::<String>()))
        .collect()
}

// ---------------------------------------------------------------------------
// Publish metadata
// ---------------------------------------------------------------------------

/// Fixed publish category.
pub const PUBLISH_CATEGORY: &str = "Entertainment";

/// Publication metadata record for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct PublishMetadata {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao")]
    pub description: String,
    pub hashtags: Vec<String>,
    #[serde(rename = "categoria")]
    pub category: &'static str,
    #[serde(rename = "idioma")]
    pub language: Language,
}

/// Multi-line publish description with style name and formatted duration.
pub fn build_description(title: &str, style: NarrativeStyle, total_duration_secs: u32) -> String {
    format!(
        "{title}\n\nUma história {} que vai te deixar sem dormir.\n\nDuração: {}min {}s\n\n🎬 Gerado com DarkStudio Engine",
        style.as_str(),
        total_duration_secs / 60,
        total_duration_secs % 60,
    )
}

/// Assemble the publish metadata from the derived script and request.
pub fn build_metadata(script: &Script, request: &GenerationRequest) -> PublishMetadata {
    PublishMetadata {
        title: script.title.clone(),
        description: build_description(&script.title, script.style, script.total_duration_secs),
        hashtags: build_hashtags(&script.title, script.style),
        category: PUBLISH_CATEGORY,
        language: request.language,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- build_thumbnails --

    #[test]
    fn exactly_three_thumbnail_suggestions() {
        let thumbs = build_thumbnails("O Farol", VisualPreset::CinematicDark, NarrativeStyle::Sinistro);
        assert_eq!(thumbs.len(), 3);
        assert!(thumbs.iter().all(|t| t.title_overlay == "O Farol"));
    }

    #[test]
    fn first_thumbnail_uses_the_visual_preset() {
        let thumbs = build_thumbnails("O Farol", VisualPreset::NoirHighcontrast, NarrativeStyle::Surreal);
        assert!(thumbs[0].prompt.contains("noir_highcontrast"));
        assert_eq!(thumbs[0].style, "noir_highcontrast");
    }

    #[test]
    fn second_thumbnail_uses_the_narrative_style() {
        let thumbs = build_thumbnails("O Farol", VisualPreset::VhsGrain, NarrativeStyle::Documental);
        assert!(thumbs[1].prompt.contains("atmosfera documental"));
        assert_eq!(thumbs[1].style, "minimal_dark");
        assert_eq!(thumbs[2].style, "high_contrast");
    }

    // -- build_hashtags --

    #[test]
    fn hashtags_always_start_with_the_fixed_base() {
        let tags = build_hashtags("Qualquer Coisa Estranha", NarrativeStyle::Surreal);
        assert_eq!(&tags[..4], ["#terror", "#misterio", "#dark", "#creepypasta"]);
    }

    #[test]
    fn style_and_first_two_title_words_follow_the_base() {
        let tags = build_hashtags("A Casa Abandonada", NarrativeStyle::Sinistro);
        assert_eq!(tags[4], "#sinistro");
        assert_eq!(tags[5], "#a");
        assert_eq!(tags[6], "#casa");
        assert_eq!(tags.len(), 7);
    }

    #[test]
    fn single_word_title_yields_six_hashtags() {
        let tags = build_hashtags("Porão", NarrativeStyle::FoundFootage);
        assert_eq!(tags.len(), 6);
        assert_eq!(tags[5], "#porão");
    }

    // -- build_description --

    #[test]
    fn description_formats_minutes_and_seconds() {
        let text = build_description("O Farol", NarrativeStyle::Sinistro, 185);
        assert!(text.contains("Duração: 3min 5s"));
        assert!(text.contains("Uma história sinistro"));
        assert!(text.starts_with("O Farol\n\n"));
    }
}
