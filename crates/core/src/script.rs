//! Script derivation: scene-count banding and style template bundles.
//!
//! Every scene attribute comes from a fixed per-style table keyed by
//! [`NarrativeStyle`]; an unknown style resolves to the sinistro bundle.
//! The sinistro narration rotates through three sentences per language,
//! selected by `scene index % 3` (1-based index, so the first scene gets
//! the second sentence — kept for output compatibility).

use serde::Serialize;

use crate::request::{GenerationRequest, Language, NarrativeStyle};

// ---------------------------------------------------------------------------
// Scene count banding
// ---------------------------------------------------------------------------

/// Hard ceiling on scenes per script for long durations.
pub const MAX_SCENES: u32 = 20;

/// Derive the scene count from total duration using the banded step
/// function. The bands are part of the output contract and must not be
/// replaced by a continuous formula.
pub fn scene_count(duration_secs: u32) -> u32 {
    if duration_secs <= 60 {
        3
    } else if duration_secs <= 180 {
        5
    } else if duration_secs <= 300 {
        8
    } else {
        (duration_secs / 40).min(MAX_SCENES)
    }
}

// ---------------------------------------------------------------------------
// Camera directives
// ---------------------------------------------------------------------------

/// Camera movement class for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraKind {
    Static,
    Pan,
    Zoom,
    Tracking,
}

impl CameraKind {
    /// Wire label, used inside storyboard image prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Pan => "pan",
            Self::Zoom => "zoom",
            Self::Tracking => "tracking",
        }
    }

    /// Storyboard camera-angle phrasing for this movement class.
    pub fn angle(self) -> &'static str {
        match self {
            Self::Static => "eye level, steady",
            Self::Pan => "slow pan, cinematic",
            Self::Zoom => "gradual zoom in, dramatic",
            Self::Tracking => "following movement, dynamic",
        }
    }
}

/// Camera directive for a scene: movement class plus optional motion copy.
#[derive(Debug, Clone, Serialize)]
pub struct CameraDirective {
    #[serde(rename = "tipo")]
    pub kind: CameraKind,
    #[serde(rename = "movimento", skip_serializing_if = "Option::is_none")]
    pub motion: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// Style template bundles
// ---------------------------------------------------------------------------

/// Resolve the style whose template bundle applies. Unknown styles use
/// the sinistro tables.
fn bundle_style(style: NarrativeStyle) -> NarrativeStyle {
    match style {
        NarrativeStyle::Unknown => NarrativeStyle::Sinistro,
        other => other,
    }
}

/// Visual description for one scene.
pub fn scene_description(style: NarrativeStyle, index: u32, theme: &str) -> String {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => {
            format!("Cena {index}: Tensão psicológica crescente em {theme}")
        }
        NarrativeStyle::FoundFootage => {
            format!("Cena {index}: Gravação amadora descobrindo {theme}")
        }
        NarrativeStyle::Documental => {
            format!("Cena {index}: Investigação documentada sobre {theme}")
        }
        NarrativeStyle::Surreal => {
            format!("Cena {index}: Realidade distorcida envolvendo {theme}")
        }
        _ => format!("Cena {index}: Ambiente sombrio e opressivo relacionado a {theme}"),
    }
}

/// Narration sentence for one scene.
///
/// Sinistro rotates three localized sentences by `index % 3`; the other
/// styles use one fixed sentence regardless of language.
pub fn narration(style: NarrativeStyle, index: u32, theme: &str, language: Language) -> String {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => {
            format!("A mente humana não estava preparada para compreender {theme}...")
        }
        NarrativeStyle::FoundFootage => {
            format!("[Gravação encontrada] Dia {index}: Descobrimos algo sobre {theme}...")
        }
        NarrativeStyle::Documental => {
            format!("Investigação revela detalhes perturbadores sobre {theme}...")
        }
        NarrativeStyle::Surreal => {
            format!("A realidade se distorce quando {theme} se manifesta...")
        }
        _ => sinister_narration(index, theme, language),
    }
}

fn sinister_narration(index: u32, theme: &str, language: Language) -> String {
    match (language, index % 3) {
        (Language::Pt, 0) => {
            format!("Ninguém esperava o que estava prestes a acontecer com {theme}...")
        }
        (Language::Pt, 1) => {
            format!("A verdade sobre {theme} é mais perturbadora do que você imagina.")
        }
        (Language::Pt, _) => format!("Aquela noite, {theme} mudou tudo para sempre."),
        (Language::En, 0) => {
            format!("No one expected what was about to happen with {theme}...")
        }
        (Language::En, 1) => {
            format!("The truth about {theme} is more disturbing than you think.")
        }
        (Language::En, _) => format!("That night, {theme} changed everything forever."),
        (Language::Es, 0) => {
            format!("Nadie esperaba lo que estaba a punto de suceder con {theme}...")
        }
        (Language::Es, 1) => {
            format!("La verdad sobre {theme} es más perturbadora de lo que imaginas.")
        }
        (Language::Es, _) => format!("Aquella noche, {theme} lo cambió todo para siempre."),
    }
}

/// Fixed ambient sound-effect labels for a style.
pub fn sound_effects(style: NarrativeStyle) -> &'static [&'static str] {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => {
            &["batimentos cardíacos", "respiração pesada", "silêncio tenso"]
        }
        NarrativeStyle::FoundFootage => &["estática", "interferência", "ruído de câmera"],
        NarrativeStyle::Documental => &["ambiente natural", "vozes distantes"],
        NarrativeStyle::Surreal => &["reverb profundo", "sons distorcidos", "eco"],
        _ => &["sussurros", "passos distantes", "vento frio"],
    }
}

/// Camera directive for a style.
pub fn camera(style: NarrativeStyle) -> CameraDirective {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => CameraDirective {
            kind: CameraKind::Zoom,
            motion: Some("aproximação gradual"),
        },
        NarrativeStyle::FoundFootage => CameraDirective {
            kind: CameraKind::Tracking,
            motion: Some("instável, tremido"),
        },
        NarrativeStyle::Documental => CameraDirective {
            kind: CameraKind::Static,
            motion: None,
        },
        NarrativeStyle::Surreal => CameraDirective {
            kind: CameraKind::Pan,
            motion: Some("flutuante, onírico"),
        },
        _ => CameraDirective {
            kind: CameraKind::Pan,
            motion: Some("lento e tenso"),
        },
    }
}

/// Lighting description for a style.
pub fn lighting(style: NarrativeStyle) -> &'static str {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => "contrastante, claros e escuros",
        NarrativeStyle::FoundFootage => "natural, imperfeita",
        NarrativeStyle::Documental => "profissional, controlada",
        NarrativeStyle::Surreal => "irreal, cores impossíveis",
        _ => "baixa, sombras profundas",
    }
}

/// Three-entry hex color palette for a style.
pub fn palette(style: NarrativeStyle) -> [&'static str; 3] {
    match bundle_style(style) {
        NarrativeStyle::Psicologico => ["#1a1a1a", "#3a3a3a", "#5a0000"],
        NarrativeStyle::FoundFootage => ["#2a2a2a", "#3a3a3a", "#1a1a0a"],
        NarrativeStyle::Documental => ["#1a1a1a", "#2a2a2a", "#3a3a3a"],
        NarrativeStyle::Surreal => ["#1a001a", "#001a1a", "#1a1a00"],
        _ => ["#0a0a0a", "#1a0000", "#2a1a1a"],
    }
}

// ---------------------------------------------------------------------------
// Scene & Script
// ---------------------------------------------------------------------------

/// One narrative beat of the script. All fields are derived from the
/// request plus the style tables; none is user-edited.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// 1-based ordinal.
    #[serde(rename = "numero")]
    pub index: u32,
    /// Duration share in seconds (truncating division of the total).
    #[serde(rename = "duracao")]
    pub duration_secs: u32,
    #[serde(rename = "descricao_visual")]
    pub description: String,
    #[serde(rename = "narracao")]
    pub narration: String,
    #[serde(rename = "efeitos_sonoros")]
    pub sound_effects: Vec<String>,
    pub camera: CameraDirective,
    #[serde(rename = "iluminacao")]
    pub lighting: String,
    #[serde(rename = "paleta_cores")]
    pub palette: Vec<String>,
}

/// The full derived script: title, timing, and scene breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Script {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "duracao_total")]
    pub total_duration_secs: u32,
    #[serde(rename = "num_cenas")]
    pub scene_count: u32,
    #[serde(rename = "cenas")]
    pub scenes: Vec<Scene>,
    #[serde(rename = "tema")]
    pub theme: String,
    #[serde(rename = "estilo")]
    pub style: NarrativeStyle,
    #[serde(rename = "idioma")]
    pub language: Language,
}

/// Derive the script from a request.
///
/// Scene durations are `total / scene_count` with truncating division;
/// the remainder (at most `scene_count - 1` seconds) is knowingly left
/// unassigned rather than redistributed.
pub fn build_script(request: &GenerationRequest) -> Script {
    let num_scenes = scene_count(request.duration_seconds);
    let duration_per_scene = request.duration_seconds / num_scenes;
    let style = request.narrative_style;

    let scenes = (1..=num_scenes)
        .map(|index| Scene {
            index,
            duration_secs: duration_per_scene,
            description: scene_description(style, index, &request.theme_title),
            narration: narration(style, index, &request.theme_title, request.language),
            sound_effects: sound_effects(style)
                .iter()
                .map(|s| s.to_string())
                .collect(),
            camera: camera(style),
            lighting: lighting(style).to_string(),
            palette: palette(style).iter().map(|s| s.to_string()).collect(),
        })
        .collect();

    Script {
        title: request.theme_title.clone(),
        total_duration_secs: request.duration_seconds,
        scene_count: num_scenes,
        scenes,
        theme: request.theme_title.clone(),
        style,
        language: request.language,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
