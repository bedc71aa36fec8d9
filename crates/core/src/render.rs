//! Render configuration: fixed base encode parameters plus one profile
//! per requested export format.

use serde::Serialize;

use crate::request::ExportFormat;

// ---------------------------------------------------------------------------
// Base encode parameters
// ---------------------------------------------------------------------------

/// Master render resolution.
pub const BASE_RESOLUTION: &str = "1920x1080";
/// Master render frame rate.
pub const BASE_FPS: u32 = 30;
/// Encode codec.
pub const BASE_CODEC: &str = "H.265";
/// Encode bitrate.
pub const BASE_BITRATE: &str = "8000k";

// ---------------------------------------------------------------------------
// Format profiles
// ---------------------------------------------------------------------------

/// Output profile for one export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatProfile {
    #[serde(rename = "tipo")]
    pub kind: &'static str,
    #[serde(rename = "resolucao")]
    pub resolution: &'static str,
    pub aspect_ratio: &'static str,
}

/// Fixed export-format → profile lookup.
pub fn format_profile(format: ExportFormat) -> FormatProfile {
    match format {
        ExportFormat::VerticalTiktok => FormatProfile {
            kind: "vertical",
            resolution: "1080x1920",
            aspect_ratio: "9:16",
        },
        ExportFormat::WidescreenYoutube => FormatProfile {
            kind: "widescreen",
            resolution: "1920x1080",
            aspect_ratio: "16:9",
        },
        ExportFormat::SquareInstagram => FormatProfile {
            kind: "square",
            resolution: "1080x1080",
            aspect_ratio: "1:1",
        },
    }
}

// ---------------------------------------------------------------------------
// Render config
// ---------------------------------------------------------------------------

/// The full render configuration for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct RenderConfig {
    #[serde(rename = "resolucao")]
    pub resolution: &'static str,
    pub fps: u32,
    pub codec: &'static str,
    pub bitrate: &'static str,
    #[serde(rename = "formatos")]
    pub formats: Vec<FormatProfile>,
}

/// Build the render configuration: fixed base parameters and one profile
/// per requested format, in request order.
pub fn build_render_config(formats: &[ExportFormat]) -> RenderConfig {
    RenderConfig {
        resolution: BASE_RESOLUTION,
        fps: BASE_FPS,
        codec: BASE_CODEC,
        bitrate: BASE_BITRATE,
        formats: formats.iter().copied().map(format_profile).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
