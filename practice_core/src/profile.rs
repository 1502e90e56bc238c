//! Profile validation and normalization.
//!
//! Raw input is first checked by [`validate_profile_shape`] (a rejection
//! predicate the caller must apply), then clamped into a canonical
//! [`UserProfile`] by [`normalize_profile`]. Normalization itself never
//! fails; on structurally unusual input it degrades to a best-effort
//! clamped structure.

use crate::taxonomy::normalize_label;
use crate::{RawProfile, SkillBand, UserProfile};

/// Maximum stored length of the player name
pub const MAX_NAME_LEN: usize = 100;
/// Maximum stored length of the skill indicator text
pub const MAX_SKILL_LEN: usize = 50;
/// Maximum stored length of each weakness label
pub const MAX_WEAKNESS_LEN: usize = 50;
/// Maximum stored length of free-text notes
pub const MAX_NOTES_LEN: usize = 2000;

/// Weakness assumed when input passes none (best-effort path only;
/// shape-validated input always carries at least one weakness)
const DEFAULT_WEAKNESS: &str = "consistency";

/// Shape precondition for [`normalize_profile`]
///
/// Requires a non-empty name, a non-empty skill indicator, at least one
/// non-empty weakness (single field or list), and positive days/hours.
/// Violation is a rejection, not a silent default.
pub fn validate_profile_shape(raw: &RawProfile) -> bool {
    if raw.name.trim().is_empty() || raw.skill.trim().is_empty() {
        return false;
    }

    let has_primary = raw
        .weakness
        .as_deref()
        .map(|w| !w.trim().is_empty())
        .unwrap_or(false);
    let has_list = raw
        .weaknesses
        .as_deref()
        .map(|ws| ws.iter().any(|w| !w.trim().is_empty()))
        .unwrap_or(false);

    if !has_primary && !has_list {
        return false;
    }

    raw.days_per_week > 0.0 && raw.hours_per_session > 0.0
}

/// Sanitize and clamp raw input into a canonical [`UserProfile`]
///
/// Strings are truncated to fixed maximums; `days_per_week` is rounded
/// then clamped to [1, 7]; `hours_per_session` is rounded to the nearest
/// half-hour then clamped to [0.5, 4.0]. The weakness list is collapsed to
/// at most 2 deduplicated entries with the primary single-weakness field
/// first.
pub fn normalize_profile(raw: &RawProfile) -> UserProfile {
    let name = truncate(raw.name.trim(), MAX_NAME_LEN);
    let skill_text = truncate(raw.skill.trim(), MAX_SKILL_LEN);

    let weaknesses = merge_weaknesses(raw);

    let days_per_week = raw.days_per_week.round().clamp(1.0, 7.0) as u32;
    let hours_per_session = ((raw.hours_per_session * 2.0).round() / 2.0).clamp(0.5, 4.0);

    let notes = raw
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| truncate(n, MAX_NOTES_LEN));

    UserProfile {
        skill_band: derive_skill_band(&skill_text),
        name,
        skill_text,
        weaknesses,
        days_per_week,
        hours_per_session,
        notes,
    }
}

/// Collapse the single-weakness field and the weakness list into at most 2
/// deduplicated entries, primary first
///
/// The primary field is unshifted to the front even when the list already
/// holds 2 entries; the merged list is then capped at exactly 2.
fn merge_weaknesses(raw: &RawProfile) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    let push = |label: &str, merged: &mut Vec<String>, seen: &mut Vec<String>| {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return;
        }
        let canonical = normalize_label(trimmed);
        if seen.contains(&canonical) {
            return;
        }
        seen.push(canonical);
        merged.push(truncate(trimmed, MAX_WEAKNESS_LEN));
    };

    if let Some(primary) = raw.weakness.as_deref() {
        push(primary, &mut merged, &mut seen);
    }
    for label in raw.weaknesses.as_deref().unwrap_or_default() {
        push(label, &mut merged, &mut seen);
    }

    merged.truncate(2);

    if merged.is_empty() {
        merged.push(DEFAULT_WEAKNESS.to_string());
    }

    merged
}

/// Derive a coarse skill band from a handicap-like free-text indicator
///
/// Keyword hints win over numbers; otherwise the first number in the text
/// is read as a handicap (<= 9 advanced, <= 18 intermediate, else
/// beginner). Text with neither lands in the middle band.
pub fn derive_skill_band(skill: &str) -> SkillBand {
    let lower = skill.to_lowercase();

    if ["beginner", "novice", "new to", "just start"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        return SkillBand::Beginner;
    }
    if ["advanced", "scratch", "plus", "low single"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        return SkillBand::Advanced;
    }

    match first_number(&lower) {
        Some(handicap) if handicap <= 9.0 => SkillBand::Advanced,
        Some(handicap) if handicap <= 18.0 => SkillBand::Intermediate,
        Some(_) => SkillBand::Beginner,
        None => SkillBand::Intermediate,
    }
}

/// First non-negative number embedded in the text, if any
fn first_number(text: &str) -> Option<f64> {
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || (c == '.' && start.is_some()) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start {
            return text[s..i].parse().ok();
        }
    }
    start.and_then(|s| text[s..].parse().ok())
}

/// Char-safe truncation to at most `max` characters
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
