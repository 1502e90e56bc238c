//! Weakness taxonomy: coarse labels to granular focus tags.
//!
//! Legacy profiles carry coarse weakness labels ("Putting confidence");
//! drills are tagged with granular focus tags (`lag_putting`). This module
//! bridges the two, plus the per-weakness week theme lists used for
//! routine headlines.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Static lookup from coarse weakness labels (normalized form) to focus tags
static TAXONOMY: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert(
        "putting_confidence",
        &["lag_putting", "short_putt_conversion"][..],
    );
    map.insert(
        "putting",
        &["lag_putting", "short_putt_conversion", "green_reading"][..],
    );
    map.insert(
        "driving_accuracy",
        &["tee_shot_dispersion", "start_line_control"][..],
    );
    map.insert("driving_distance", &["swing_speed", "strike_quality"][..]);
    map.insert(
        "short_game",
        &["chipping_contact", "pitch_distance_control"][..],
    );
    map.insert("bunker_play", &["sand_technique", "greenside_touch"][..]);
    map.insert(
        "iron_play",
        &["approach_proximity", "distance_control"][..],
    );
    map.insert(
        "approach_play",
        &["approach_proximity", "distance_control"][..],
    );
    map.insert(
        "course_management",
        &["decision_making", "shot_selection"][..],
    );
    map.insert("consistency", &["tempo_control", "pre_shot_routine"][..]);
    map.insert("mental_game", &["pressure_composure", "focus_reset"][..]);
    map
});

/// Generic 4-phase week themes used when a weakness has no dedicated list
static GENERIC_THEMES: [&str; 4] = [
    "Foundations and feel",
    "Calibration and control",
    "Pressure proofing",
    "Transfer to the course",
];

/// Dedicated week theme lists per weakness (normalized label)
static THEMES: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert(
        "putting_confidence",
        &[
            "Roll it: strokes that start on line",
            "Lag it: distance control from everywhere",
            "Hole it: short putts under pressure",
            "Trust it: the putter on the course",
        ][..],
    );
    map.insert(
        "driving_accuracy",
        &[
            "Start lines off the tee",
            "Shrinking the dispersion cone",
            "Fairway finding under pressure",
            "Picking targets like a caddie",
        ][..],
    );
    map.insert(
        "short_game",
        &[
            "Contact before cleverness",
            "Landing spots and rollout",
            "Up-and-down scoring games",
            "Short game on the scorecard",
        ][..],
    );
    map
});

/// Canonicalize a weakness label: trim, lowercase, whitespace/hyphen to
/// underscore
///
/// "Putting confidence", "putting confidence", and "putting_confidence"
/// all normalize to `putting_confidence`.
pub fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Resolve a weakness label to its non-empty set of canonical focus tags
///
/// Lookup order: raw trimmed label, normalized form, lowercase form. A
/// label with no taxonomy entry resolves to a singleton of its normalized
/// form, so downstream matching never faces an empty tag set. Resolving an
/// already-canonical tag returns a singleton of itself.
pub fn resolve_weakness_tags(label: &str) -> HashSet<String> {
    let trimmed = label.trim();
    let normalized = normalize_label(label);
    let lowercase = trimmed.to_lowercase();

    let entry = TAXONOMY
        .get(trimmed)
        .or_else(|| TAXONOMY.get(normalized.as_str()))
        .or_else(|| TAXONOMY.get(lowercase.as_str()));

    match entry {
        Some(tags) => tags.iter().map(|t| (*t).to_string()).collect(),
        None => {
            tracing::debug!("No taxonomy entry for '{}', using as atomic tag", trimmed);
            HashSet::from([normalized])
        }
    }
}

/// Headline theme for a given weakness and 1-based week number
///
/// Falls back to the generic 4-phase list for unrecognized weaknesses;
/// indexed `(week - 1) mod len` so long plans wrap around.
pub fn week_theme(weakness: &str, week: u32) -> String {
    let normalized = normalize_label(weakness);
    let themes = THEMES
        .get(normalized.as_str())
        .copied()
        .unwrap_or(&GENERIC_THEMES[..]);
    let idx = (week.saturating_sub(1) as usize) % themes.len();
    themes[idx].to_string()
}
