//! Core domain types for the practice planning engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Drill descriptors and the catalog
//! - User profiles (raw and normalized)
//! - Selection context threaded through scoring
//! - Generated routines and time-budgeted session plans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

// ============================================================================
// Drill Types
// ============================================================================

/// Coarse skill tier derived from a handicap-like free-text indicator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillBand {
    Beginner,
    Intermediate,
    Advanced,
}

/// Structural role a drill plays within a session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DrillCategory {
    Warmup,
    Technical,
    Pressure,
    Transfer,
}

/// A drill definition in the weekly-routine catalog
///
/// `weaknesses` holds granular focus tags (see [`crate::taxonomy`]).
/// `universal` marks foundation drills that are eligible for any weakness
/// focus even without a tag match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DrillDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub weaknesses: Vec<String>,
    pub category: DrillCategory,
    pub bands: Vec<SkillBand>,
    #[serde(default)]
    pub universal: bool,
}

impl DrillDescriptor {
    /// Whether this drill serves any of the given focus tags
    pub fn matches_any_tag(&self, tags: &HashSet<String>) -> bool {
        self.weaknesses.iter().any(|w| tags.contains(w))
    }
}

// ============================================================================
// Profile Types
// ============================================================================

/// Raw profile input as submitted by the caller, prior to validation
///
/// All fields default so that partially-filled input still deserializes;
/// [`crate::profile::validate_profile_shape`] rejects it afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RawProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub weakness: Option<String>,
    #[serde(default)]
    pub weaknesses: Option<Vec<String>>,
    #[serde(default)]
    pub days_per_week: f64,
    #[serde(default)]
    pub hours_per_session: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A sanitized, clamped user profile
///
/// Invariants: `1 <= days_per_week <= 7`, `0.5 <= hours_per_session <= 4.0`
/// (half-hour steps), and `weaknesses` has 1 or 2 entries, primary first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub skill_text: String,
    pub skill_band: SkillBand,
    pub weaknesses: Vec<String>,
    pub days_per_week: u32,
    pub hours_per_session: f64,
    pub notes: Option<String>,
}

// ============================================================================
// Selection Context
// ============================================================================

/// Ephemeral per-pick state threaded through the scorer
///
/// Reconstructed for every plan-generation call; never persisted or shared.
#[derive(Clone, Debug)]
pub struct SelectionContext {
    /// Focus tags in play for the current pick
    pub weakness_tags: HashSet<String>,
    /// Active skill band
    pub band: SkillBand,
    /// Drill ids already chosen within the plan being built
    pub used_in_plan: HashSet<String>,
    /// Drill ids seen in recent prior saved routines
    pub history: HashSet<String>,
}

// ============================================================================
// Routine Output Types
// ============================================================================

/// One time-annotated instructional block within a session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionBlock {
    pub label: String,
    pub minutes: u32,
    pub detail: String,
}

/// A single practice session: exactly three drill ids plus rendered blocks
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutineSession {
    pub day: u32,
    pub focus: String,
    pub drill_ids: Vec<String>,
    pub blocks: Vec<SessionBlock>,
}

/// One themed week of sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoutineWeek {
    pub number: u32,
    pub theme: String,
    pub sessions: Vec<RoutineSession>,
}

/// A generated 4-week practice routine
///
/// Immutable once returned; persistence is the caller's concern
/// (see [`crate::store`]).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Routine {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub player: String,
    pub skill_band: SkillBand,
    pub weaknesses: Vec<String>,
    pub weeks: Vec<RoutineWeek>,
}

impl Routine {
    /// All drill ids appearing anywhere in this routine
    pub fn drill_ids(&self) -> impl Iterator<Item = &str> {
        self.weeks
            .iter()
            .flat_map(|w| w.sessions.iter())
            .flat_map(|s| s.drill_ids.iter())
            .map(String::as_str)
    }
}

// ============================================================================
// Planner Types (single-session, time-budgeted)
// ============================================================================

/// Stage of a time-budgeted session plan, in fixed execution order
///
/// The planner schema is deliberately separate from [`DrillCategory`]:
/// `Skill` corresponds to `Technical` and `Random` to `Transfer`; the two
/// catalogs do not share entries.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Warmup,
    Skill,
    Random,
    Pressure,
}

impl Stage {
    /// Fixed stage order for plan assembly
    pub const ORDER: [Stage; 4] = [Stage::Warmup, Stage::Skill, Stage::Random, Stage::Pressure];
}

/// A drill in the planner catalog (richer schema than [`DrillDescriptor`]):
/// numeric skill range, explicit duration, stage category, focus tags
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerDrill {
    pub id: String,
    pub name: String,
    pub category: Stage,
    pub focus: Vec<String>,
    pub skill_min: i32,
    pub skill_max: i32,
    pub duration_min: u32,
    pub description: String,
}

impl PlannerDrill {
    /// Whether the numeric skill range contains the given score
    pub fn fits_skill(&self, skill: i32) -> bool {
        skill >= self.skill_min && skill <= self.skill_max
    }
}

/// Input to [`crate::planner::build_session_plan`]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerInput {
    pub weakness: String,
    pub skill: i32,
    pub time_budget_min: u32,
    pub drills: Vec<PlannerDrill>,
    /// Optional history-exclusion set (hard filter)
    #[serde(default)]
    pub exclude: HashSet<String>,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The complete catalog of weekly-routine drills
///
/// Loaded once and treated as an immutable arena; no component mutates it
/// after load, so concurrent reads need no coordination.
#[derive(Clone, Debug)]
pub struct Catalog {
    pub drills: HashMap<String, DrillDescriptor>,
    /// Last-resort warm-up fallback when a pick yields no candidate
    pub fallback_drill_id: String,
}
