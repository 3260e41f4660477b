//! Flex distribution along the main axis.
//!
//! Axis-agnostic: the solver fills one `FlexScratch` per child for a single
//! placement pass, this module turns the difference between available and
//! allocated space into per-child offsets, and the records are dropped when
//! the pass ends.
//!
//! Distribution works in whole pixels. Each round hands the remaining delta
//! to the unclamped flexible children in proportion to their weight. A child
//! whose share would push it past its minimum or maximum is clamped and
//! frozen, and whatever it could not absorb goes back into the pool for the
//! next round. Every round either consumes the full delta or freezes at least
//! one more child, so the loop runs at most `children + 1` times.

/// Per-child working data for one placement pass (main axis only).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlexScratch {
    pub min: i32,
    pub max: i32,
    pub hint: i32,
    pub flex: f32,
    /// Signed adjustment to `hint` decided by distribution.
    pub offset: i32,
}

impl FlexScratch {
    pub fn new(min: i32, max: i32, hint: i32, flex: f32) -> Self {
        Self { min, max, hint, flex, offset: 0 }
    }

    /// Record for a child that never takes part in distribution.
    pub fn inflexible(hint: i32) -> Self {
        Self::new(hint, hint, hint, 0.0)
    }

    #[inline]
    pub fn is_flexible(&self) -> bool {
        self.flex > 0.0
    }

    /// Main-axis size after distribution.
    #[inline]
    pub fn size(&self) -> i32 {
        self.hint.saturating_add(self.offset)
    }
}

/// Fixed-point scale for flex weights, so shares can be computed exactly.
const WEIGHT_SCALE: f64 = 1024.0;
const MAX_WEIGHT: f64 = 1.0e12;

#[inline]
fn weight(flex: f32) -> i128 {
    (f64::from(flex) * WEIGHT_SCALE).round().clamp(1.0, MAX_WEIGHT) as i128
}

/// Distribute `available - allocated` across the flexible entries.
///
/// Inflexible entries are left untouched. Offsets of flexible entries are
/// overwritten. Returns the part of the delta that could not be absorbed
/// because every flexible child reached a bound (zero otherwise).
pub fn distribute_flex(entries: &mut [FlexScratch], available: i32, allocated: i64) -> i64 {
    let mut remaining = i64::from(available) - allocated;

    for entry in entries.iter_mut().filter(|e| e.is_flexible()) {
        entry.offset = 0;
    }

    let mut frozen: Vec<bool> = entries.iter().map(|e| !e.is_flexible()).collect();
    let mut active: Vec<usize> = Vec::with_capacity(entries.len());
    let mut shares: Vec<i64> = Vec::with_capacity(entries.len());

    tracing::trace!(delta = remaining, children = entries.len(), "distributing flex");

    while remaining != 0 {
        active.clear();
        active.extend((0..entries.len()).filter(|&i| !frozen[i]));
        if active.is_empty() {
            break;
        }

        // Proportional shares, truncated toward zero so the sum never
        // overshoots. The remainder goes out a pixel at a time in order.
        let total_weight: i128 = active.iter().map(|&i| weight(entries[i].flex)).sum();
        shares.clear();
        shares.extend(
            active
                .iter()
                .map(|&i| (i128::from(remaining) * weight(entries[i].flex) / total_weight) as i64),
        );
        let mut leftover = remaining - shares.iter().sum::<i64>();
        let step = leftover.signum();
        for share in shares.iter_mut() {
            if leftover == 0 {
                break;
            }
            *share += step;
            leftover -= step;
        }

        let mut consumed = 0i64;
        let mut clamped_any = false;
        for (&i, &share) in active.iter().zip(shares.iter()) {
            let entry = &mut entries[i];
            let current = i64::from(entry.hint) + i64::from(entry.offset);
            let target = current + share;
            let bounded = target.min(i64::from(entry.max)).max(i64::from(entry.min));
            if bounded != target {
                frozen[i] = true;
                clamped_any = true;
            }
            consumed += bounded - current;
            entry.offset = (bounded - i64::from(entry.hint)) as i32;
        }

        remaining -= consumed;
        if !clamped_any {
            break;
        }
    }

    if remaining != 0 {
        tracing::debug!(leftover = remaining, "flexible children clamped before delta was exhausted");
    }

    remaining
}

// =========================================================================
// Tests
// =========================================================================
