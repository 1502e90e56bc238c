#![forbid(unsafe_code)]

//! Core domain model and business logic for the Scramble practice planner.
//!
//! This crate provides:
//! - Domain types (drills, profiles, routines, session plans)
//! - Weakness taxonomy resolution
//! - Profile validation and normalization
//! - Drill scoring and selection
//! - Routine assembly (4-week) and time-budgeted session planning
//! - Routine persistence for the CLI layer

pub mod types;
pub mod error;
pub mod taxonomy;
pub mod profile;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod scoring;
pub mod selector;
pub mod session;
pub mod routine;
pub mod planner;
pub mod history;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{
    build_default_catalog, build_default_planner_catalog, get_default_catalog,
    get_default_planner_catalog,
};
pub use config::Config;
pub use taxonomy::{normalize_label, resolve_weakness_tags};
pub use profile::{normalize_profile, validate_profile_shape};
pub use scoring::{score_drill, RandomSource, SeededRandom, ThreadRandom};
pub use selector::select_drill;
pub use session::compose_session;
pub use routine::build_rules_routine;
pub use planner::build_session_plan;
pub use history::recent_drill_ids;
pub use store::{load_recent_routines, JsonlStore, RoutineSink};
