//! The descriptive pipeline step list.
//!
//! Nothing executes these steps; they are plan metadata describing the
//! production stages a real render would run, with the first stage
//! (script generation) already done by the builder itself.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Step status
// ---------------------------------------------------------------------------

/// Status of one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Pending,
}

// ---------------------------------------------------------------------------
// Pipeline step
// ---------------------------------------------------------------------------

/// One named production stage with a fixed time estimate.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStep {
    #[serde(rename = "ordem")]
    pub order: u32,
    #[serde(rename = "nome")]
    pub name: &'static str,
    #[serde(rename = "descricao")]
    pub description: &'static str,
    pub status: StepStatus,
    #[serde(rename = "duracao_estimada")]
    pub estimated_secs: u32,
}

/// The fixed seven-stage production pipeline. Only the script stage is
/// marked completed; everything downstream is pending.
pub fn pipeline_steps() -> Vec<PipelineStep> {
    vec![
        PipelineStep {
            order: 1,
            name: "Geração de Roteiro",
            description: "Criar narrativa e estrutura",
            status: StepStatus::Completed,
            estimated_secs: 30,
        },
        PipelineStep {
            order: 2,
            name: "Geração de Imagens",
            description: "Criar frames com Stable Diffusion XL",
            status: StepStatus::Pending,
            estimated_secs: 120,
        },
        PipelineStep {
            order: 3,
            name: "Geração de Áudio",
            description: "TTS ultra realista",
            status: StepStatus::Pending,
            estimated_secs: 45,
        },
        PipelineStep {
            order: 4,
            name: "Lip Sync",
            description: "Sincronização labial",
            status: StepStatus::Pending,
            estimated_secs: 30,
        },
        PipelineStep {
            order: 5,
            name: "Composição",
            description: "Montar timeline com FFmpeg",
            status: StepStatus::Pending,
            estimated_secs: 60,
        },
        PipelineStep {
            order: 6,
            name: "Color Grading",
            description: "Aplicar preset visual",
            status: StepStatus::Pending,
            estimated_secs: 20,
        },
        PipelineStep {
            order: 7,
            name: "Export",
            description: "Renderizar formatos finais",
            status: StepStatus::Pending,
            estimated_secs: 90,
        },
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
