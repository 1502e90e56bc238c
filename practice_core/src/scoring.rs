//! Candidate scoring for drill selection.
//!
//! Each criterion is independent additive evidence; the jitter ceiling is
//! deliberately smaller than any single positive weight so randomness can
//! break ties and add variety but never override a genuine match.

use crate::{DrillCategory, DrillDescriptor, SelectionContext};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Weight for a weakness-tag intersection
pub const WEAKNESS_MATCH_WEIGHT: f64 = 4.0;
/// Weight for a skill-band match
pub const BAND_MATCH_WEIGHT: f64 = 3.0;
/// Weight for matching the preferred category of the current pick
pub const CATEGORY_MATCH_WEIGHT: f64 = 2.5;
/// Soft penalty for a drill already used elsewhere in the plan being built
pub const IN_PLAN_PENALTY: f64 = -4.0;
/// Soft penalty for a drill seen in recent prior saved routines
pub const HISTORY_PENALTY: f64 = -2.0;
/// Exclusive upper bound of the uniform tie-breaking jitter
pub const JITTER_CEILING: f64 = 1.2;

/// Injected randomness source for tie-breaking jitter
///
/// Returns a uniform value in `[0, 1)`. Injecting the source keeps plan
/// generation deterministic under test (see [`SeededRandom`] and the
/// scripted sources in test modules).
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// Default randomness source backed by the thread-local RNG
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible randomness source for tests and replayable generation
#[derive(Clone, Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Score a drill's fitness for the current pick
///
/// Additive rule: weakness intersection +4, band match +3, preferred
/// category +2.5, already-in-plan -4 (soft, not an exclusion), recent
/// history -2 (soft), plus uniform jitter in `[0, 1.2)`.
pub fn score_drill(
    drill: &DrillDescriptor,
    ctx: &SelectionContext,
    preferred_category: DrillCategory,
    rng: &mut dyn RandomSource,
) -> f64 {
    let mut score = 0.0;

    if drill.matches_any_tag(&ctx.weakness_tags) {
        score += WEAKNESS_MATCH_WEIGHT;
    }
    if drill.bands.contains(&ctx.band) {
        score += BAND_MATCH_WEIGHT;
    }
    if drill.category == preferred_category {
        score += CATEGORY_MATCH_WEIGHT;
    }
    if ctx.used_in_plan.contains(&drill.id) {
        score += IN_PLAN_PENALTY;
    }
    if ctx.history.contains(&drill.id) {
        score += HISTORY_PENALTY;
    }

    score + rng.next() * JITTER_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillBand;
    use std::collections::HashSet;

    /// Scripted source replaying a fixed value sequence
    pub(crate) struct ScriptedRandom {
        values: Vec<f64>,
        idx: usize,
    }

    impl ScriptedRandom {
        pub(crate) fn new(values: Vec<f64>) -> Self {
            Self { values, idx: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next(&mut self) -> f64 {
            let v = self.values[self.idx % self.values.len()];
            self.idx += 1;
            v
        }
    }

    fn drill(id: &str, tags: &[&str], category: DrillCategory, bands: &[SkillBand]) -> DrillDescriptor {
        DrillDescriptor {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            weaknesses: tags.iter().map(|t| t.to_string()).collect(),
            category,
            bands: bands.to_vec(),
            universal: false,
        }
    }

    fn context() -> SelectionContext {
        SelectionContext {
            weakness_tags: HashSet::from(["lag_putting".to_string()]),
            band: SkillBand::Beginner,
            used_in_plan: HashSet::new(),
            history: HashSet::new(),
        }
    }

    #[test]
    fn test_full_match_beats_no_match_for_any_jitter() {
        let ctx = context();
        let matching = drill(
            "a",
            &["lag_putting"],
            DrillCategory::Technical,
            &[SkillBand::Beginner],
        );
        let unmatched = drill(
            "b",
            &["sand_technique"],
            DrillCategory::Warmup,
            &[SkillBand::Advanced],
        );

        // Worst jitter draw for the match, best possible for the miss
        let mut low = ScriptedRandom::new(vec![0.0]);
        let mut high = ScriptedRandom::new(vec![0.999_999]);

        let match_score = score_drill(&matching, &ctx, DrillCategory::Technical, &mut low);
        let miss_score = score_drill(&unmatched, &ctx, DrillCategory::Technical, &mut high);

        // 9.5 baseline advantage vs. a jitter ceiling of 1.2
        assert!(match_score > miss_score);
        assert!((match_score - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_penalties_are_soft_not_exclusions() {
        let mut ctx = context();
        ctx.used_in_plan.insert("a".into());
        ctx.history.insert("a".into());

        let d = drill(
            "a",
            &["lag_putting"],
            DrillCategory::Technical,
            &[SkillBand::Beginner],
        );

        let mut rng = ScriptedRandom::new(vec![0.0]);
        let score = score_drill(&d, &ctx, DrillCategory::Technical, &mut rng);

        // 4 + 3 + 2.5 - 4 - 2
        assert!((score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..10 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn test_thread_random_in_unit_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.next();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
