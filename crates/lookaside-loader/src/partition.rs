//! Id range partitioning across workers.

use std::ops::Range;

/// Splits `total` ids starting at `first_id` into `workers` contiguous,
/// disjoint ranges. The first `total % workers` ranges are one id longer.
///
/// Ranges are returned in id order; their union is exactly
/// `first_id..first_id + total`.
#[must_use]
pub fn partition(first_id: i64, total: u64, workers: usize) -> Vec<Range<i64>> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    let remainder = total % workers;

    let mut start = first_id;
    (0..workers)
        .map(|worker| {
            let len = base + u64::from(worker < remainder);
            let range = start..start + len as i64;
            start = range.end;
            range
        })
        .collect()
}
