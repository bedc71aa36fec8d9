//! Request handlers for the video generation API.
//!
//! Handlers delegate to the pure plan builder in `darkstudio_core` and
//! to the in-process [`crate::store::PlanStore`], mapping errors via
//! [`crate::error::AppError`].

pub mod videos;
