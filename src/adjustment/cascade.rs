//! Month-length cascade planning.
//!
//! Pure functions over month-start tables. Nothing here mutates engine
//! state; the engine applies a plan only after it has been checked.

use std::collections::BTreeMap;

pub const MIN_MONTH_DAYS: i32 = 29;
pub const MAX_MONTH_DAYS: i32 = 30;

/// Returns true for a lunar month length of 29 or 30 days.
#[inline]
pub fn is_valid_month_length(days: i32) -> bool {
    (MIN_MONTH_DAYS..=MAX_MONTH_DAYS).contains(&days)
}

/// Month starts that must move if month `offset` starts on `start`.
///
/// Walks forward from `offset + 1`, pulling each later start to the nearest
/// valid length after its (possibly moved) predecessor, and stops at the
/// first month whose length is already valid.
pub fn forward_cascade(month_starts: &[i32], offset: usize, start: i32) -> Vec<(usize, i32)> {
    let mut moved = Vec::new();
    let mut previous = start;
    for (index, &current) in month_starts.iter().enumerate().skip(offset + 1) {
        let length = current - previous;
        let corrected = if length < MIN_MONTH_DAYS {
            previous + MIN_MONTH_DAYS
        } else if length > MAX_MONTH_DAYS {
            previous + MAX_MONTH_DAYS
        } else {
            break;
        };
        moved.push((index, corrected));
        previous = corrected;
    }
    moved
}

/// Offsets to revert when the override at `offset` is removed.
///
/// The forward scan reverts overridden successors that become invalid
/// against the reverted predecessor, and those holding exactly the start the
/// removed override forces on the published table, since that override is
/// what put them there. The backward scan reverts overridden predecessors
/// whose month would no longer have a valid length. Both scans stop at the
/// first entry they keep.
pub fn removal_plan(
    base: &[i32],
    month_starts: &[i32],
    overrides: &BTreeMap<usize, i32>,
    offset: usize,
) -> Vec<usize> {
    let forced: BTreeMap<usize, i32> = forward_cascade(base, offset, month_starts[offset])
        .into_iter()
        .collect();

    let mut starts = month_starts.to_vec();
    let mut reverted = vec![offset];
    starts[offset] = base[offset];

    let mut index = offset + 1;
    while let Some(&start) = overrides.get(&index) {
        let keeps_valid_length = is_valid_month_length(start - starts[index - 1]);
        if keeps_valid_length && forced.get(&index) != Some(&start) {
            break;
        }
        starts[index] = base[index];
        reverted.push(index);
        index += 1;
    }

    let mut index = offset - 1;
    while index > 0 && overrides.contains_key(&index) {
        if is_valid_month_length(starts[index + 1] - starts[index]) {
            break;
        }
        starts[index] = base[index];
        reverted.push(index);
        index -= 1;
    }

    reverted.sort_unstable();
    reverted
}

/// The base table with every override applied.
pub fn apply(base: &[i32], overrides: &BTreeMap<usize, i32>) -> Vec<i32> {
    let mut starts = base.to_vec();
    for (&offset, &start) in overrides {
        if let Some(slot) = starts.get_mut(offset) {
            *slot = start;
        }
    }
    starts
}

/// First month whose length is not 29 or 30 days, with that length.
pub fn first_invalid_month(month_starts: &[i32]) -> Option<(usize, i32)> {
    month_starts
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .enumerate()
        .find(|&(_, length)| !is_valid_month_length(length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_cascade_stops_at_valid_month() {
        let starts = [0, 30, 59, 89, 118];
        // Starting month 1 a day later leaves month 2 only 28 days.
        assert_eq!(forward_cascade(&starts, 1, 31), vec![(2, 60)]);
        // Starting it a day earlier is absorbed by month 1 itself.
        assert_eq!(forward_cascade(&starts, 1, 29), vec![]);
    }

    #[test]
    fn test_forward_cascade_chains() {
        let starts = [0, 30, 59, 88, 117, 147];
        assert_eq!(
            forward_cascade(&starts, 1, 31),
            vec![(2, 60), (3, 89), (4, 118)]
        );
    }

    #[test]
    fn test_removal_reverts_forced_successor() {
        let base = [0, 30, 59, 89];
        let mut overrides = BTreeMap::new();
        overrides.insert(1, 31);
        overrides.insert(2, 60);
        let live = apply(&base, &overrides);
        assert_eq!(removal_plan(&base, &live, &overrides, 1), vec![1, 2]);
    }

    #[test]
    fn test_removal_reverts_forced_chain() {
        let base = [0, 30, 59, 88, 117, 147];
        let overrides: BTreeMap<usize, i32> =
            [(1, 31), (2, 60), (3, 89), (4, 118)].into_iter().collect();
        let live = apply(&base, &overrides);
        assert_eq!(
            removal_plan(&base, &live, &overrides, 1),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn test_removal_keeps_unrelated_successor() {
        let base = [0, 29, 59, 89, 118];
        let mut overrides = BTreeMap::new();
        overrides.insert(1, 30);
        overrides.insert(3, 88);
        let live = apply(&base, &overrides);
        // Month 2 is not overridden, so the scan never reaches month 3.
        assert_eq!(removal_plan(&base, &live, &overrides, 1), vec![1]);
    }

    #[test]
    fn test_removal_reverts_invalid_predecessor() {
        let base = [0, 29, 58, 88];
        let mut overrides = BTreeMap::new();
        overrides.insert(1, 30);
        overrides.insert(2, 59);
        let live = apply(&base, &overrides);
        // Reverting month 2 to 58 would leave month 1 only 28 days.
        assert_eq!(removal_plan(&base, &live, &overrides, 2), vec![1, 2]);
    }

    #[test]
    fn test_first_invalid_month() {
        assert_eq!(first_invalid_month(&[0, 29, 59]), None);
        assert_eq!(first_invalid_month(&[0, 29, 60]), Some((1, 31)));
    }
}
