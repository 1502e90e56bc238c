//! Weekly routine assembly (legacy multi-week engine).
//!
//! Drives the selector and composer across 4 fixed weeks of
//! `days_per_week` sessions. Every session ends up with exactly 3 drill
//! ids via the fallback chain pressure -> technical -> warm-up -> fixed
//! default catalog entry.

use crate::history::{recent_drill_ids, DEFAULT_HISTORY_WINDOW};
use crate::scoring::RandomSource;
use crate::selector::select_drill;
use crate::session::compose_session;
use crate::taxonomy::{resolve_weakness_tags, week_theme};
use crate::{
    Catalog, DrillCategory, DrillDescriptor, Routine, RoutineSession, RoutineWeek,
    SelectionContext, SkillBand, UserProfile,
};
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

/// Fixed routine length in weeks
pub const ROUTINE_WEEKS: u32 = 4;

/// Build a 4-week rules-based routine for a normalized profile
///
/// Deterministic modulo the injected jitter source; never fails for
/// well-formed input. With a degenerate catalog (no fallback entry) the
/// returned routine has no weeks - callers treat an unexpectedly short or
/// empty routine as a failure mode to surface, not an error to catch.
pub fn build_rules_routine(
    profile: &UserProfile,
    recent_routines: &[Routine],
    catalog: &Catalog,
    rng: &mut dyn RandomSource,
) -> Routine {
    let history = recent_drill_ids(recent_routines, DEFAULT_HISTORY_WINDOW);
    tracing::info!(
        "Building routine for '{}' ({:?}, {} weaknesses, {} history ids)",
        profile.name,
        profile.skill_band,
        profile.weaknesses.len(),
        history.len()
    );

    // Shape-validated profiles always carry a weakness; degrade rather
    // than panic if a hand-built one doesn't
    let weaknesses: Vec<String> = if profile.weaknesses.is_empty() {
        vec!["consistency".to_string()]
    } else {
        profile.weaknesses.clone()
    };

    // Union of tags across the whole weakness list, used for warm-up picks
    let full_tags: HashSet<String> = weaknesses
        .iter()
        .flat_map(|w| resolve_weakness_tags(w))
        .collect();

    let session_minutes = (profile.hours_per_session * 60.0).round() as u32;
    let primary_weakness = weaknesses[0].clone();

    let mut routine = Routine {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        player: profile.name.clone(),
        skill_band: profile.skill_band,
        weaknesses: profile.weaknesses.clone(),
        weeks: Vec::new(),
    };

    let Some(default_drill) = catalog.drills.get(&catalog.fallback_drill_id) else {
        tracing::warn!(
            "Catalog has no fallback drill '{}'; returning empty routine",
            catalog.fallback_drill_id
        );
        return routine;
    };

    let mut used_in_plan: HashSet<String> = HashSet::new();

    for week in 1..=ROUTINE_WEEKS {
        let mut sessions = Vec::new();

        for day in 1..=profile.days_per_week {
            // Round-robin the session focus across the weakness list
            let focus = &weaknesses[((day - 1) as usize) % weaknesses.len()];
            let session_tags = resolve_weakness_tags(focus);

            let mut excluded: HashSet<String> = HashSet::new();

            let warmup = pick(
                catalog, &full_tags, profile.skill_band, &used_in_plan, &history,
                DrillCategory::Warmup, &excluded, rng,
            )
            .unwrap_or(default_drill);
            excluded.insert(warmup.id.clone());

            let technical = pick(
                catalog, &session_tags, profile.skill_band, &used_in_plan, &history,
                DrillCategory::Technical, &excluded, rng,
            )
            .unwrap_or(warmup);
            excluded.insert(technical.id.clone());

            let pressure = pick(
                catalog, &session_tags, profile.skill_band, &used_in_plan, &history,
                DrillCategory::Pressure, &excluded, rng,
            )
            .unwrap_or(technical);

            let prompt_index = ((week - 1) * profile.days_per_week + (day - 1)) as usize;
            let blocks = compose_session(warmup, technical, pressure, session_minutes, prompt_index);

            let drill_ids = vec![
                warmup.id.clone(),
                technical.id.clone(),
                pressure.id.clone(),
            ];
            // Affects later sessions' scoring, not their eligibility
            used_in_plan.extend(drill_ids.iter().cloned());

            sessions.push(RoutineSession {
                day,
                focus: focus.clone(),
                drill_ids,
                blocks,
            });
        }

        routine.weeks.push(RoutineWeek {
            number: week,
            theme: week_theme(&primary_weakness, week),
            sessions,
        });
    }

    routine
}

#[allow(clippy::too_many_arguments)]
fn pick<'a>(
    catalog: &'a Catalog,
    tags: &HashSet<String>,
    band: SkillBand,
    used_in_plan: &HashSet<String>,
    history: &HashSet<String>,
    category: DrillCategory,
    excluded: &HashSet<String>,
    rng: &mut dyn RandomSource,
) -> Option<&'a DrillDescriptor> {
    let ctx = SelectionContext {
        weakness_tags: tags.clone(),
        band,
        used_in_plan: used_in_plan.clone(),
        history: history.clone(),
    };
    select_drill(catalog, &ctx, category, excluded, rng)
}
