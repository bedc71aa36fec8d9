//! DarkStudio core: deterministic generation-plan derivation.
//!
//! Every module here is pure computation over a validated
//! [`request::GenerationRequest`] plus fixed lookup tables. There is no
//! I/O, no async, and no shared state; [`plan::build_plan`] may be
//! called concurrently from any number of tasks.

pub mod assets;
pub mod audio;
pub mod error;
pub mod lipsync;
pub mod pipeline;
pub mod plan;
pub mod publishing;
pub mod quality;
pub mod render;
pub mod request;
pub mod script;
pub mod storyboard;
