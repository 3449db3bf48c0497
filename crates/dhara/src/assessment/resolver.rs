use super::domain::{ResolvedCategory, ScoreMap};

/// Largest gap between the top two scores that still yields a dual category.
pub const DUAL_GAP: u32 = 1;

/// Derive the dominant category from a score map.
///
/// Only the top two scores are compared; the third never turns a pair into a triple.
/// Ties are broken by canonical category order, so the result does not depend on the
/// order in which scores were inserted.
pub fn resolve(scores: &ScoreMap) -> ResolvedCategory {
    if scores.is_empty() {
        return ResolvedCategory::Unscored;
    }

    if scores.iter().all(|(_, score)| score == 0) {
        return ResolvedCategory::Unknown;
    }

    let mut ranked: Vec<_> = scores.iter().collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1));

    let (primary, first) = ranked[0];
    match ranked.get(1) {
        Some(&(secondary, second)) if first - second <= DUAL_GAP && second > 0 => {
            ResolvedCategory::Dual { primary, secondary }
        }
        _ => ResolvedCategory::Single(primary),
    }
}
