//! Time-budgeted single-session planner (modern engine).
//!
//! A single greedy pass per stage in fixed order, not a globally optimal
//! packing: simplicity and explainability win over squeezing the last
//! minutes out of the budget.

use crate::taxonomy::resolve_weakness_tags;
use crate::{PlannerDrill, PlannerInput, Stage};
use std::collections::HashSet;

/// Composite ranking weight for a weakness-tag match
const FOCUS_MATCH_WEIGHT: f64 = 4.0;
/// Composite ranking weight for matching the current stage's category
const STAGE_MATCH_WEIGHT: f64 = 2.0;

/// Build an ordered drill sequence under a time budget
///
/// Deterministic (no randomness). Stages are visited in fixed order
/// (warm-up, skill, random, pressure) picking at most one drill each;
/// a stage with no valid pick is skipped, so the result can hold fewer
/// than 4 drills or be empty. The summed duration never exceeds
/// `time_budget_min` and no drill id appears twice.
pub fn build_session_plan(input: &PlannerInput) -> Vec<PlannerDrill> {
    let tags = resolve_weakness_tags(&input.weakness);

    // Skill range and history exclusion are hard filters
    let mut candidates: Vec<&PlannerDrill> = input
        .drills
        .iter()
        .filter(|d| d.fits_skill(input.skill))
        .filter(|d| !input.exclude.contains(&d.id))
        .collect();

    // Sort for deterministic scan order
    candidates.sort_by_key(|d| &d.id);

    tracing::debug!(
        "Planner: {} of {} drills eligible for skill {} (budget {} min)",
        candidates.len(),
        input.drills.len(),
        input.skill,
        input.time_budget_min
    );

    let mut plan: Vec<PlannerDrill> = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();
    let mut remaining = input.time_budget_min;

    for stage in Stage::ORDER {
        let pool: Vec<&PlannerDrill> = candidates
            .iter()
            .copied()
            .filter(|d| !used.contains(d.id.as_str()) && d.duration_min <= remaining)
            .collect();
        if pool.is_empty() {
            tracing::debug!("Planner: skipping {:?} (no drill fits)", stage);
            continue;
        }

        // Prefer drills of the stage's own category, then drills matching
        // the weakness, falling back to the wider pool each time
        let stage_pool: Vec<&PlannerDrill> = {
            let matching: Vec<&PlannerDrill> =
                pool.iter().copied().filter(|d| d.category == stage).collect();
            if matching.is_empty() { pool } else { matching }
        };
        let focus_pool: Vec<&PlannerDrill> = {
            let matching: Vec<&PlannerDrill> = stage_pool
                .iter()
                .copied()
                .filter(|d| d.focus.iter().any(|f| tags.contains(f)))
                .collect();
            if matching.is_empty() { stage_pool } else { matching }
        };

        let mut best: Option<(&PlannerDrill, f64)> = None;
        for drill in focus_pool {
            let score = rank(drill, stage, &tags);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((drill, score)),
            }
        }

        if let Some((drill, score)) = best {
            tracing::debug!(
                "Planner: {:?} -> '{}' ({} min, score {:.2})",
                stage,
                drill.id,
                drill.duration_min,
                score
            );
            remaining -= drill.duration_min;
            used.insert(drill.id.as_str());
            plan.push(drill.clone());
        }
    }

    plan
}

/// Composite rank: weakness match, stage-category match, and a small
/// inverse-duration efficiency term favouring shorter drills at equal fit
fn rank(drill: &PlannerDrill, stage: Stage, tags: &HashSet<String>) -> f64 {
    let mut score = 0.0;
    if drill.focus.iter().any(|f| tags.contains(f)) {
        score += FOCUS_MATCH_WEIGHT;
    }
    if drill.category == stage {
        score += STAGE_MATCH_WEIGHT;
    }
    score + 1.0 / f64::from(drill.duration_min.max(1))
}
