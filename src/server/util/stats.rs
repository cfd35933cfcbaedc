//! Audit history statistics.

use crate::model::{
    audit::{AuditDetailDto, AuditStatus},
    item::AuditStatsDto,
};

/// Percentage of passing audits rounded to the nearest integer, 0 when nothing was audited
pub fn pass_rate(passes: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }

    ((passes as f64 / total as f64) * 100.0).round() as u32
}

/// Summarizes an item's audit history
///
/// Counts the audits performed, the failed audits and the findings recorded across
/// all audits.
pub fn audit_stats<'a, I>(audits: I) -> AuditStatsDto
where
    I: IntoIterator<Item = &'a AuditDetailDto>,
{
    let mut stats = AuditStatsDto::default();
    let mut passes = 0;

    for audit in audits {
        stats.audits_performed += 1;
        stats.findings += audit.findings.len() as u64;

        match audit.status {
            AuditStatus::Pass => passes += 1,
            AuditStatus::Fail => stats.failures += 1,
        }
    }

    stats.pass_rate = pass_rate(passes, stats.audits_performed);
    stats
}
