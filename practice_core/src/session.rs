//! Session composition: turning a drill triad into timed blocks.
//!
//! Block minutes are percentage shares of the session total with
//! independent floors. For very short sessions the floors alone can sum
//! past the nominal total; that overshoot is accepted behavior, not
//! corrected (better a complete short session than a truncated one).

use crate::{DrillDescriptor, SessionBlock};

/// Fixed length of the closing reflection block
pub const REFLECTION_MINUTES: u32 = 5;

const WARMUP_SHARE: f64 = 0.18;
const WARMUP_FLOOR: u32 = 10;
const TECHNICAL_SHARE: f64 = 0.36;
const TECHNICAL_FLOOR: u32 = 18;
const PRESSURE_SHARE: f64 = 0.24;
const PRESSURE_FLOOR: u32 = 14;
const TRANSFER_FLOOR: u32 = 10;

/// Rotating reflection prompts; indexed by session ordinal so consecutive
/// sessions close differently
const REFLECTION_PROMPTS: [&str; 4] = [
    "Write down the one shot you'd most like back today, and why.",
    "Rate your commitment to the routine on every shot, 1-10.",
    "Name the drill that felt hardest and what made it hard.",
    "Pick tomorrow's first drill before you leave the green.",
];

/// Compose the fixed-shape session block list
///
/// Always returns exactly 5 blocks: warm-up, technical, pressure,
/// transfer, reflection. The transfer block absorbs whatever the shares
/// and the reflection leave over (floor 10).
pub fn compose_session(
    warmup: &DrillDescriptor,
    technical: &DrillDescriptor,
    pressure: &DrillDescriptor,
    total_minutes: u32,
    prompt_index: usize,
) -> Vec<SessionBlock> {
    let warmup_min = share(total_minutes, WARMUP_SHARE).max(WARMUP_FLOOR);
    let technical_min = share(total_minutes, TECHNICAL_SHARE).max(TECHNICAL_FLOOR);
    let pressure_min = share(total_minutes, PRESSURE_SHARE).max(PRESSURE_FLOOR);
    let transfer_min = total_minutes
        .saturating_sub(warmup_min + technical_min + pressure_min + REFLECTION_MINUTES)
        .max(TRANSFER_FLOOR);

    let allocated = warmup_min + technical_min + pressure_min + transfer_min + REFLECTION_MINUTES;
    if allocated > total_minutes {
        tracing::debug!(
            "Block floors overshoot session total ({} min allocated vs {} planned)",
            allocated,
            total_minutes
        );
    }

    let prompt = REFLECTION_PROMPTS[prompt_index % REFLECTION_PROMPTS.len()];

    vec![
        block("Warm-up", warmup_min, warmup),
        block("Technical", technical_min, technical),
        block("Pressure", pressure_min, pressure),
        SessionBlock {
            label: "Transfer".into(),
            minutes: transfer_min,
            detail: "Take it to the course: random targets, one ball, full pre-shot \
                     routine on every swing, score against your usual miss."
                .into(),
        },
        SessionBlock {
            label: "Reflection".into(),
            minutes: REFLECTION_MINUTES,
            detail: prompt.into(),
        },
    ]
}

fn share(total: u32, fraction: f64) -> u32 {
    (f64::from(total) * fraction).round() as u32
}

fn block(label: &str, minutes: u32, drill: &DrillDescriptor) -> SessionBlock {
    SessionBlock {
        label: label.into(),
        minutes,
        detail: format!("{}: {}", drill.name, drill.description),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrillCategory, SkillBand};

    fn drill(id: &str, category: DrillCategory) -> DrillDescriptor {
        DrillDescriptor {
            id: id.into(),
            name: format!("Drill {}", id),
            description: "do the thing".into(),
            weaknesses: vec!["lag_putting".into()],
            category,
            bands: vec![SkillBand::Beginner],
            universal: false,
        }
    }

    fn triad() -> (DrillDescriptor, DrillDescriptor, DrillDescriptor) {
        (
            drill("w", DrillCategory::Warmup),
            drill("t", DrillCategory::Technical),
            drill("p", DrillCategory::Pressure),
        )
    }

    #[test]
    fn test_always_five_blocks_in_order() {
        let (w, t, p) = triad();
        let blocks = compose_session(&w, &t, &p, 90, 0);

        let labels: Vec<&str> = blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Warm-up", "Technical", "Pressure", "Transfer", "Reflection"]
        );
    }

    #[test]
    fn test_ninety_minute_allocation() {
        let (w, t, p) = triad();
        let blocks = compose_session(&w, &t, &p, 90, 0);

        assert_eq!(blocks[0].minutes, 16); // 18% of 90
        assert_eq!(blocks[1].minutes, 32); // 36% of 90
        assert_eq!(blocks[2].minutes, 22); // 24% of 90
        assert_eq!(blocks[3].minutes, 15); // remainder after reflection
        assert_eq!(blocks[4].minutes, REFLECTION_MINUTES);

        let total: u32 = blocks.iter().map(|b| b.minutes).sum();
        assert_eq!(total, 90);
    }

    #[test]
    fn test_short_session_floor_overshoot_is_accepted() {
        let (w, t, p) = triad();
        let blocks = compose_session(&w, &t, &p, 30, 0);

        // Floors alone: 10 + 18 + 14 + 10 + 5 = 57 > 30
        assert_eq!(blocks[0].minutes, 10);
        assert_eq!(blocks[1].minutes, 18);
        assert_eq!(blocks[2].minutes, 14);
        assert_eq!(blocks[3].minutes, 10);

        let total: u32 = blocks.iter().map(|b| b.minutes).sum();
        assert!(total > 30);
    }

    #[test]
    fn test_reflection_prompts_rotate() {
        let (w, t, p) = triad();
        let first = compose_session(&w, &t, &p, 90, 0);
        let second = compose_session(&w, &t, &p, 90, 1);
        let wrapped = compose_session(&w, &t, &p, 90, REFLECTION_PROMPTS.len());

        assert_ne!(first[4].detail, second[4].detail);
        assert_eq!(first[4].detail, wrapped[4].detail);
    }

    #[test]
    fn test_block_detail_names_the_drill() {
        let (w, t, p) = triad();
        let blocks = compose_session(&w, &t, &p, 90, 0);
        assert!(blocks[0].detail.contains("Drill w"));
        assert!(blocks[1].detail.contains("Drill t"));
        assert!(blocks[2].detail.contains("Drill p"));
    }
}
