//! Built-in drill catalogs.
//!
//! Two catalogs live here: the weekly-routine catalog of
//! [`DrillDescriptor`]s and the richer planner catalog of
//! [`PlannerDrill`]s. Both are reference data, built once and cached;
//! loading custom catalogs is the caller's concern.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Cached default planner catalog
static DEFAULT_PLANNER_CATALOG: Lazy<Vec<PlannerDrill>> = Lazy::new(build_default_planner_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Get a reference to the cached default planner catalog
pub fn get_default_planner_catalog() -> &'static [PlannerDrill] {
    &DEFAULT_PLANNER_CATALOG
}

const ALL_BANDS: [SkillBand; 3] = [
    SkillBand::Beginner,
    SkillBand::Intermediate,
    SkillBand::Advanced,
];

fn drill(
    id: &str,
    name: &str,
    description: &str,
    weaknesses: &[&str],
    category: DrillCategory,
    bands: &[SkillBand],
    universal: bool,
) -> DrillDescriptor {
    DrillDescriptor {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        weaknesses: weaknesses.iter().map(|w| w.to_string()).collect(),
        category,
        bands: bands.to_vec(),
        universal,
    }
}

/// Builds the default weekly-routine catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which
/// returns a cached reference. This function is retained for testing and
/// custom catalog creation.
pub fn build_default_catalog() -> Catalog {
    let descriptors = vec![
        // ====================================================================
        // Warm-up
        // ====================================================================
        drill(
            "tempo_ladder_warmup",
            "Tempo Ladder",
            "Hit 9 balls with a wedge at 50/75/100% effort, three each, \
             holding your finish until the ball lands.",
            &["tempo_control", "pre_shot_routine", "strike_quality"],
            DrillCategory::Warmup,
            &ALL_BANDS,
            true,
        ),
        drill(
            "putting_arc_warmup",
            "Arc and Roll Warm-up",
            "Ten putts along a chalk line from 4 feet, then five lag putts \
             to the fringe, focusing on roll quality.",
            &["lag_putting", "short_putt_conversion"],
            DrillCategory::Warmup,
            &ALL_BANDS,
            false,
        ),
        drill(
            "nine_window_warmup",
            "Nine Windows",
            "With a mid-iron, hit low/normal/high starts at left/centre/right \
             windows. One ball per window.",
            &["start_line_control", "tee_shot_dispersion"],
            DrillCategory::Warmup,
            &[SkillBand::Intermediate, SkillBand::Advanced],
            false,
        ),
        drill(
            "wedge_clock_warmup",
            "Wedge Clock Warm-up",
            "Three backswing lengths (9, 10, 11 o'clock) with one wedge, \
             two balls each, calling carry before each shot.",
            &["pitch_distance_control", "chipping_contact"],
            DrillCategory::Warmup,
            &ALL_BANDS,
            false,
        ),
        // ====================================================================
        // Technical
        // ====================================================================
        drill(
            "gate_putting",
            "Gate Drill",
            "Putt through a tee gate a putterhead-width wide from 5 feet. \
             Sets of ten, count makes through the gate.",
            &["short_putt_conversion"],
            DrillCategory::Technical,
            &ALL_BANDS,
            false,
        ),
        drill(
            "lag_ladder",
            "Lag Ladder",
            "Putt to 20/30/40 feet in sequence, trying to leave each ball \
             inside a flagstick length. Restart the ladder on a miss.",
            &["lag_putting"],
            DrillCategory::Technical,
            &ALL_BANDS,
            false,
        ),
        drill(
            "alignment_stick_fairways",
            "Stick Fairways",
            "Two alignment sticks make a 20-yard fairway downrange. Ten \
             drivers, score each inside/outside, track your miss side.",
            &["tee_shot_dispersion", "start_line_control"],
            DrillCategory::Technical,
            &ALL_BANDS,
            false,
        ),
        drill(
            "strike_spray_ladder",
            "Strike Spray Ladder",
            "Foot spray on the face, five swings per club up the bag. Move \
             up only when four of five strikes are centred.",
            &["strike_quality", "swing_speed"],
            DrillCategory::Technical,
            &[SkillBand::Intermediate, SkillBand::Advanced],
            false,
        ),
        drill(
            "towel_chipping",
            "Towel Landing Zones",
            "Chip to a towel laid at your landing spot, ten balls from a \
             clean lie, then five from light rough.",
            &["chipping_contact", "greenside_touch"],
            DrillCategory::Technical,
            &ALL_BANDS,
            false,
        ),
        drill(
            "distance_wheel_irons",
            "Distance Wheel",
            "Pick five targets at odd distances, one ball each with the \
             matching club. Pace off or laser the proximity and log it.",
            &["approach_proximity", "distance_control"],
            DrillCategory::Technical,
            &ALL_BANDS,
            false,
        ),
        drill(
            "routine_rehearsal",
            "Routine Rehearsal",
            "Ten full-routine shots with different clubs: pick target, \
             rehearse, commit. Grade the routine, not the result.",
            &["pre_shot_routine", "tempo_control", "focus_reset"],
            DrillCategory::Technical,
            &ALL_BANDS,
            true,
        ),
        // ====================================================================
        // Pressure
        // ====================================================================
        drill(
            "three_foot_circuit",
            "Three-Foot Circuit",
            "Eight balls in a circle at 3 feet. Hole all eight to finish; \
             any miss restarts the circuit.",
            &["short_putt_conversion", "pressure_composure"],
            DrillCategory::Pressure,
            &ALL_BANDS,
            false,
        ),
        drill(
            "fairway_finder_game",
            "Fairway Finder",
            "Nine tee shots at an imagined par-4. Fairway = +1, light miss \
             = 0, double-cross = -2. Beat your last score.",
            &["tee_shot_dispersion", "decision_making"],
            DrillCategory::Pressure,
            &ALL_BANDS,
            false,
        ),
        drill(
            "up_down_gauntlet",
            "Up-and-Down Gauntlet",
            "Six short-game stations around one green. Chip then putt out; \
             score each up-and-down. Four of six passes.",
            &["chipping_contact", "greenside_touch"],
            DrillCategory::Pressure,
            &ALL_BANDS,
            false,
        ),
        drill(
            "ladder_of_doom",
            "Ladder of Doom",
            "Lag putt from 40 feet, then hole out. Three-putt ends the run; \
             ten holes survived wins.",
            &["lag_putting", "pressure_composure"],
            DrillCategory::Pressure,
            &[SkillBand::Intermediate, SkillBand::Advanced],
            false,
        ),
        drill(
            "par_eighteen",
            "Par Eighteen",
            "Nine up-and-downs from varied lies, par 2 each. Keep a real \
             scorecard against par 18.",
            &["decision_making", "shot_selection", "pressure_composure"],
            DrillCategory::Pressure,
            &ALL_BANDS,
            true,
        ),
        // ====================================================================
        // Transfer
        // ====================================================================
        drill(
            "random_nine_sim",
            "Random Nine",
            "Play nine imagined holes on the range: driver, approach, wedge \
             as the hole demands, new target every shot, full routine.",
            &["decision_making", "shot_selection", "pressure_composure"],
            DrillCategory::Transfer,
            &ALL_BANDS,
            true,
        ),
        drill(
            "one_ball_scoring",
            "One-Ball Scoring",
            "Five approach shots, one ball, one attempt each, to different \
             flags. Log proximity; no do-overs.",
            &["distance_control", "approach_proximity"],
            DrillCategory::Transfer,
            &ALL_BANDS,
            false,
        ),
        drill(
            "worst_ball_nine",
            "Worst Ball",
            "Play three holes hitting two balls and taking the worse one \
             every time. Brutal honesty about your stock shot.",
            &["tee_shot_dispersion", "strike_quality"],
            DrillCategory::Transfer,
            &[SkillBand::Advanced],
            false,
        ),
    ];

    let mut drills = HashMap::new();
    for d in descriptors {
        drills.insert(d.id.clone(), d);
    }

    Catalog {
        drills,
        fallback_drill_id: "tempo_ladder_warmup".into(),
    }
}

fn planner_drill(
    id: &str,
    name: &str,
    category: Stage,
    focus: &[&str],
    skill_range: (i32, i32),
    duration_min: u32,
    description: &str,
) -> PlannerDrill {
    PlannerDrill {
        id: id.into(),
        name: name.into(),
        category,
        focus: focus.iter().map(|f| f.to_string()).collect(),
        skill_min: skill_range.0,
        skill_max: skill_range.1,
        duration_min,
        description: description.into(),
    }
}

/// Builds the default planner catalog (richer schema, 0-10 skill scale)
pub fn build_default_planner_catalog() -> Vec<PlannerDrill> {
    vec![
        planner_drill(
            "p_tempo_wedges",
            "Tempo Wedges",
            Stage::Warmup,
            &["tempo_control", "strike_quality"],
            (0, 10),
            10,
            "Half-speed wedges building to full speed, holding every finish.",
        ),
        planner_drill(
            "p_roll_warmup",
            "Roll Warm-up",
            Stage::Warmup,
            &["lag_putting", "short_putt_conversion"],
            (0, 10),
            10,
            "Short putts on a line, then lags to the fringe.",
        ),
        planner_drill(
            "p_start_line_gate",
            "Start Line Gate",
            Stage::Skill,
            &["start_line_control", "tee_shot_dispersion"],
            (2, 10),
            20,
            "Drive through an alignment gate; track miss side per ball.",
        ),
        planner_drill(
            "p_putting_gate",
            "Putting Gate Reps",
            Stage::Skill,
            &["short_putt_conversion", "lag_putting"],
            (0, 10),
            15,
            "Gate putting from five feet in counted sets.",
        ),
        planner_drill(
            "p_wedge_matrix",
            "Wedge Matrix",
            Stage::Skill,
            &["pitch_distance_control", "chipping_contact"],
            (3, 10),
            20,
            "Three clubs by three backswing lengths, called carries.",
        ),
        planner_drill(
            "p_random_targets",
            "Random Target Shuffle",
            Stage::Random,
            &["decision_making", "shot_selection"],
            (0, 10),
            15,
            "New club, new target, full routine every ball.",
        ),
        planner_drill(
            "p_nine_hole_sim",
            "Nine Hole Simulation",
            Stage::Random,
            &["decision_making", "tee_shot_dispersion"],
            (4, 10),
            25,
            "Play your home nine on the range, shot by shot.",
        ),
        planner_drill(
            "p_circuit_closer",
            "Circuit Closer",
            Stage::Pressure,
            &["short_putt_conversion", "pressure_composure"],
            (0, 10),
            15,
            "Holing circuit that restarts on any miss.",
        ),
        planner_drill(
            "p_fairway_bet",
            "Fairway Bet",
            Stage::Pressure,
            &["tee_shot_dispersion", "pressure_composure"],
            (3, 10),
            15,
            "Nine drives scored against your own fairway line.",
        ),
    ]
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (id, drill) in &self.drills {
            if id.is_empty() || drill.id.is_empty() {
                errors.push("Drill has empty ID".to_string());
            }
            if id != &drill.id {
                errors.push(format!(
                    "Drill key '{}' doesn't match drill.id '{}'",
                    id, drill.id
                ));
            }
            if drill.name.is_empty() {
                errors.push(format!("Drill '{}' has empty name", id));
            }
            if drill.weaknesses.is_empty() {
                errors.push(format!("Drill '{}' has no weakness tags", id));
            }
            if drill.bands.is_empty() {
                errors.push(format!("Drill '{}' has empty band set", id));
            }
        }

        if !self.drills.contains_key(&self.fallback_drill_id) {
            errors.push(format!(
                "Fallback drill '{}' not present in catalog",
                self.fallback_drill_id
            ));
        }

        // Every category must be represented
        for category in [
            DrillCategory::Warmup,
            DrillCategory::Technical,
            DrillCategory::Pressure,
            DrillCategory::Transfer,
        ] {
            if !self.drills.values().any(|d| d.category == category) {
                errors.push(format!("Catalog has no {:?} drills", category));
            }
        }

        errors
    }
}
