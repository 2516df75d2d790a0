//! Partition iterators.

/// Slot lengths of one candidate arrangement, non-decreasing.
pub type DurationPartition = Vec<u32>;

/// All partitions of `total` into exactly `length` parts, in lexicographic
/// order.
///
/// # Examples
///
/// ```
/// use conference_slots::partition::PartitionsOfLength;
///
/// let parts: Vec<_> = PartitionsOfLength::new(6, 3).collect();
/// assert_eq!(parts, vec![vec![1, 1, 4], vec![1, 2, 3], vec![2, 2, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionsOfLength {
    total: u32,
    current: Option<DurationPartition>,
}

impl PartitionsOfLength {
    /// Starts at the smallest partition `[1, .., 1, total - length + 1]`.
    ///
    /// Yields nothing when `length` is zero or exceeds `total`.
    pub fn new(total: u32, length: usize) -> Self {
        let current = match u32::try_from(length) {
            Ok(len) if (1..=total).contains(&len) => {
                let mut first = vec![1; length];
                first[length - 1] = total - (len - 1);
                Some(first)
            }
            _ => None,
        };
        Self { total, current }
    }
}

impl Iterator for PartitionsOfLength {
    type Item = DurationPartition;

    fn next(&mut self) -> Option<DurationPartition> {
        let current = self.current.take()?;
        self.current = successor(&current, self.total);
        Some(current)
    }
}

/// Lexicographic successor of `parts` among equal-length partitions of
/// `total`, or `None` if `parts` is the last one.
fn successor(parts: &[u32], total: u32) -> Option<DurationPartition> {
    let k = parts.len();
    if k < 2 {
        return None;
    }

    let total = u64::from(total);
    // Sum of parts[..j], maintained while j walks leftwards.
    let mut before: u64 = parts[..k - 1].iter().map(|&d| u64::from(d)).sum();

    for j in (0..k - 1).rev() {
        before -= u64::from(parts[j]);
        let grown = u64::from(parts[j]) + 1;
        let tail_len = (k - 1 - j) as u64;

        let Some(rest) = total.checked_sub(before + grown) else {
            continue;
        };
        if rest < tail_len * grown {
            continue;
        }

        // Everything here is bounded by `total`, which came from a u32.
        let grown_u32 = grown as u32;
        let last = (rest - (tail_len - 1) * grown) as u32;

        let mut next = Vec::with_capacity(k);
        next.extend_from_slice(&parts[..j]);
        next.push(grown_u32);
        next.resize(k - 1, grown_u32);
        next.push(last);
        return Some(next);
    }

    None
}

/// Slot counts in search order: `total_duration` down to 1.
pub fn slot_counts(total_duration: u32) -> impl Iterator<Item = usize> + Clone {
    (1..=total_duration as usize).rev()
}

/// Every duration partition of `total_duration`, most slots first.
///
/// The sequence is lazy and finite; call again to restart it.
///
/// # Examples
///
/// ```
/// use conference_slots::partition::generate;
///
/// let parts: Vec<_> = generate(4).collect();
/// assert_eq!(
///     parts,
///     vec![
///         vec![1, 1, 1, 1],
///         vec![1, 1, 2],
///         vec![1, 3],
///         vec![2, 2],
///         vec![4],
///     ]
/// );
/// ```
pub fn generate(total_duration: u32) -> impl Iterator<Item = DurationPartition> {
    slot_counts(total_duration).flat_map(move |k| PartitionsOfLength::new(total_duration, k))
}
