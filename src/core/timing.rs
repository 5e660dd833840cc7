use crate::core::sort;
use crate::domain::model::{Record, SortAlgorithm, SortReport};
use std::time::Instant;

/// Runs one sort and records its wall time and comparison count.
pub fn measure(algorithm: SortAlgorithm, records: &mut [Record]) -> SortReport {
    let start = Instant::now();
    let comparisons = sort::run(algorithm, records);
    let elapsed = start.elapsed();

    let report = SortReport {
        algorithm,
        elapsed,
        comparisons,
    };

    tracing::debug!(
        "⏱️ {} over {} records: {:.6}s, {} comparisons",
        report.algorithm,
        records.len(),
        report.elapsed_seconds(),
        report.comparisons
    );

    report
}
