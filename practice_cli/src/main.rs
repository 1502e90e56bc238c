use clap::{Parser, Subcommand};
use practice_core::*;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scramble")]
#[command(about = "Golf practice routine planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a 4-week practice routine
    Routine {
        /// Player name
        #[arg(long)]
        name: String,

        /// Skill indicator, e.g. "18 handicap" or "beginner"
        #[arg(long)]
        skill: String,

        /// Weakness to work on (repeat for a second focus, max 2 used)
        #[arg(long = "weakness", required = true)]
        weaknesses: Vec<String>,

        /// Practice days per week
        #[arg(long)]
        days: f64,

        /// Hours per session
        #[arg(long)]
        hours: f64,

        /// Seed the jitter source for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Show the routine without saving it to the store
        #[arg(long)]
        dry_run: bool,
    },

    /// Build a single time-budgeted session plan
    Plan {
        /// Weakness to plan around
        #[arg(long)]
        weakness: String,

        /// Skill score on a 0-10 scale
        #[arg(long)]
        skill: i32,

        /// Time budget in minutes (defaults from config)
        #[arg(long)]
        minutes: Option<u32>,

        /// Drill ids to exclude (repeatable)
        #[arg(long = "exclude")]
        exclude: Vec<String>,
    },
}

fn main() -> Result<()> {
    practice_core::logging::init();

    let cli = Cli::parse();

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Commands::Routine {
            name,
            skill,
            weaknesses,
            days,
            hours,
            seed,
            dry_run,
        } => cmd_routine(
            data_dir, &config, name, skill, weaknesses, days, hours, seed, dry_run,
        ),
        Commands::Plan {
            weakness,
            skill,
            minutes,
            exclude,
        } => cmd_plan(&config, weakness, skill, minutes, exclude),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_routine(
    data_dir: PathBuf,
    config: &Config,
    name: String,
    skill: String,
    weaknesses: Vec<String>,
    days: f64,
    hours: f64,
    seed: Option<u64>,
    dry_run: bool,
) -> Result<()> {
    let raw = RawProfile {
        name,
        skill,
        weakness: None,
        weaknesses: Some(weaknesses),
        days_per_week: days,
        hours_per_session: hours,
        notes: None,
    };

    if !validate_profile_shape(&raw) {
        return Err(Error::Profile(
            "profile needs a name, a skill indicator, at least one weakness, \
             and positive days/hours"
                .into(),
        ));
    }
    let profile = normalize_profile(&raw);

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let store_path = data_dir.join("routines.jsonl");
    let recent = load_recent_routines(&store_path, config.history.window)?;

    let routine = match seed {
        Some(seed) => {
            let mut rng = SeededRandom::new(seed);
            build_rules_routine(&profile, &recent, catalog, &mut rng)
        }
        None => {
            let mut rng = ThreadRandom;
            build_rules_routine(&profile, &recent, catalog, &mut rng)
        }
    };

    display_routine(&routine, &profile);

    if routine.weeks.is_empty() {
        eprintln!("Generated routine is empty - check the catalog.");
        return Ok(());
    }

    if dry_run {
        println!("\n[Dry run - not saving routine]");
        return Ok(());
    }

    let mut store = JsonlStore::new(&store_path);
    store.append(&routine)?;
    println!("\n✓ Routine saved ({})", routine.id);

    Ok(())
}

fn cmd_plan(
    config: &Config,
    weakness: String,
    skill: i32,
    minutes: Option<u32>,
    exclude: Vec<String>,
) -> Result<()> {
    let time_budget_min = minutes.unwrap_or(config.planner.default_time_budget_min);

    let input = PlannerInput {
        weakness,
        skill,
        time_budget_min,
        drills: get_default_planner_catalog().to_vec(),
        exclude: exclude.into_iter().collect::<HashSet<String>>(),
    };

    let plan = build_session_plan(&input);

    if plan.is_empty() {
        println!(
            "No drills fit a {}-minute session at skill {}.",
            time_budget_min, skill
        );
        return Ok(());
    }

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  SESSION PLAN ({} min budget)", time_budget_min);
    println!("╰─────────────────────────────────────────╯");
    for drill in &plan {
        println!();
        println!("  [{:?}] {} — {} min", drill.category, drill.name, drill.duration_min);
        println!("    {}", drill.description);
    }

    let total: u32 = plan.iter().map(|d| d.duration_min).sum();
    println!("\n  Total: {} of {} minutes", total, time_budget_min);

    Ok(())
}

fn display_routine(routine: &Routine, profile: &UserProfile) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  4-WEEK ROUTINE for {}", routine.player);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Band: {:?}", routine.skill_band);
    println!("  Focus: {}", routine.weaknesses.join(", "));
    println!(
        "  {} days/week, {} hours/session",
        profile.days_per_week, profile.hours_per_session
    );

    for week in &routine.weeks {
        println!();
        println!("  Week {}: {}", week.number, week.theme);
        for session in &week.sessions {
            println!("    Day {} — focus: {}", session.day, session.focus);
            for block in &session.blocks {
                println!("      • {} ({} min): {}", block.label, block.minutes, block.detail);
            }
        }
    }
}
