//! Drill selection: eligibility filtering plus best-score pick.

use crate::scoring::{score_drill, RandomSource};
use crate::{Catalog, DrillCategory, DrillDescriptor, SelectionContext};
use std::collections::HashSet;

/// Filter the catalog and pick the highest-scoring eligible drill
///
/// Eligibility: not in `excluded`, band set contains the active band, and
/// either a weakness-tag match or a universal (foundation) drill. Returns
/// `None` when nothing is eligible ("no candidate", not an error) —
/// callers supply their own fallback.
///
/// Candidates are scanned in id order so exact ties after jitter go to the
/// first-scanned drill.
pub fn select_drill<'a>(
    catalog: &'a Catalog,
    ctx: &SelectionContext,
    preferred_category: DrillCategory,
    excluded: &HashSet<String>,
    rng: &mut dyn RandomSource,
) -> Option<&'a DrillDescriptor> {
    let mut candidates: Vec<&DrillDescriptor> = catalog
        .drills
        .values()
        .filter(|d| !excluded.contains(&d.id))
        .filter(|d| d.bands.contains(&ctx.band))
        .filter(|d| d.universal || d.matches_any_tag(&ctx.weakness_tags))
        .collect();

    if candidates.is_empty() {
        tracing::debug!(
            "No eligible drills for {:?} pick (band {:?}, {} tags)",
            preferred_category,
            ctx.band,
            ctx.weakness_tags.len()
        );
        return None;
    }

    // Sort for deterministic scan order
    candidates.sort_by_key(|d| &d.id);

    let mut best: Option<(&DrillDescriptor, f64)> = None;
    for drill in candidates {
        let score = score_drill(drill, ctx, preferred_category, rng);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((drill, score)),
        }
    }

    best.map(|(drill, score)| {
        tracing::debug!(
            "Selected '{}' for {:?} pick (score {:.2})",
            drill.id,
            preferred_category,
            score
        );
        drill
    })
}
