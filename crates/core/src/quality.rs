//! Quality checklist: fixed score constants plus the lip-sync error
//! threshold check.
//!
//! With the current fixed 25 ms sync error the issue branch never fires;
//! the threshold logic is kept for the day the error becomes a real
//! measurement.

use serde::Serialize;

use crate::lipsync::LipSyncPack;

// ---------------------------------------------------------------------------
// Fixed scores
// ---------------------------------------------------------------------------

/// Visual coherence score reported for every plan.
pub const VISUAL_COHERENCE_SCORE: u32 = 92;

/// Originality score reported for every plan.
pub const ORIGINALITY_SCORE: u32 = 95;

/// Estimated Mean Opinion Score reported for every plan.
pub const MOS_ESTIMATE: f64 = 4.5;

/// Lip-sync error above which an issue is raised, in milliseconds.
pub const SYNC_ISSUE_THRESHOLD_MS: u32 = 50;

// ---------------------------------------------------------------------------
// Issue derivation
// ---------------------------------------------------------------------------

/// Issue list for a given lip-sync error: one warning when the error
/// exceeds [`SYNC_ISSUE_THRESHOLD_MS`], otherwise empty.
pub fn sync_issues(sync_error_ms: u32) -> Vec<String> {
    if sync_error_ms > SYNC_ISSUE_THRESHOLD_MS {
        vec!["Lip sync acima do threshold".to_string()]
    } else {
        Vec::new()
    }
}

// ---------------------------------------------------------------------------
// Quality report
// ---------------------------------------------------------------------------

/// The quality checklist for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub visual_coherence: u32,
    pub audio_sync_ms: u32,
    pub originality_score: u32,
    pub mos_estimate: f64,
    pub safety_check: bool,
    pub issues: Vec<String>,
}

/// Build the quality report from the lip-sync pack. All scores except
/// `audio_sync_ms` and `issues` are constants.
pub fn build_quality_report(lipsync: &LipSyncPack) -> QualityReport {
    QualityReport {
        visual_coherence: VISUAL_COHERENCE_SCORE,
        audio_sync_ms: lipsync.sync_error_ms,
        originality_score: ORIGINALITY_SCORE,
        mos_estimate: MOS_ESTIMATE,
        safety_check: true,
        issues: sync_issues(lipsync.sync_error_ms),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lipsync::{LIPSYNC_FPS, SYNC_ERROR_MS};

    fn pack(sync_error_ms: u32) -> LipSyncPack {
        LipSyncPack {
            audio_url: String::new(),
            total_duration_secs: 1.0,
            visemes: Vec::new(),
            fps: LIPSYNC_FPS,
            sync_error_ms,
        }
    }

    // -- sync_issues --

    #[test]
    fn no_issue_at_or_below_threshold() {
        assert!(sync_issues(SYNC_ERROR_MS).is_empty());
        assert!(sync_issues(SYNC_ISSUE_THRESHOLD_MS).is_empty());
    }

    #[test]
    fn issue_raised_above_threshold() {
        let issues = sync_issues(SYNC_ISSUE_THRESHOLD_MS + 1);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("Lip sync"));
    }

    // -- build_quality_report --

    #[test]
    fn report_carries_fixed_scores() {
        let report = build_quality_report(&pack(SYNC_ERROR_MS));
        assert_eq!(report.visual_coherence, VISUAL_COHERENCE_SCORE);
        assert_eq!(report.originality_score, ORIGINALITY_SCORE);
        assert!((report.mos_estimate - MOS_ESTIMATE).abs() < f64::EPSILON);
        assert!(report.safety_check);
    }

    #[test]
    fn report_echoes_the_sync_error() {
        let report = build_quality_report(&pack(SYNC_ERROR_MS));
        assert_eq!(report.audio_sync_ms, SYNC_ERROR_MS);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn report_flags_excessive_sync_error() {
        // Unreachable through build_plan today (the error is a fixed
        // 25 ms constant) but exercised here against the threshold.
        let report = build_quality_report(&pack(80));
        assert_eq!(report.issues.len(), 1);
    }
}
