use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use ladder_core::plan::{self, PlanClient, PlanOutput};
use ladder_core::{catalog, session::Session};
use rand::seq::SliceRandom;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;

    let weak = plan::weak_skills(catalog::all(), session.progress());
    if weak.is_empty() {
        println!("Every skill is mastered — nothing left to drill.");
        return Ok(());
    }

    // Uniform sample without replacement; fewer than three weak skills
    // just means a shorter focus list.
    let mut rng = rand::thread_rng();
    let selected: Vec<&catalog::Skill> = weak
        .choose_multiple(&mut rng, plan::MAX_FOCUS_SKILLS)
        .copied()
        .collect();

    if !json {
        println!("Focus skills:");
        for skill in &selected {
            println!("  #{} {} ({})", skill.id, skill.name, skill.difficulty);
        }
        println!();
    }

    let output = PlanClient::from_env().and_then(|client| client.generate(&selected));
    match output {
        Ok(PlanOutput::Structured(plan)) => {
            if json {
                return print_json(&plan);
            }
            println!("\"{}\"", plan.intro);
            println!();
            println!("1. 热身 ({})", plan.warmup);
            println!("2. 核心训练");
            for drill in &plan.drills {
                println!("   - {} [{}]", drill.name, drill.duration);
                println!("     {}", drill.description);
            }
            println!("3. 拉伸放松 ({})", plan.cooldown);
        }
        Ok(PlanOutput::Raw(text)) => {
            if json {
                return print_json(&serde_json::json!({ "raw": text }));
            }
            println!("{text}");
        }
        Err(e) => {
            // The plan service is best-effort; a failure is a message, not
            // an exit code, and core state is untouched.
            tracing::warn!("plan generation failed: {e}");
            println!("Sorry, a training plan couldn't be generated right now. Please try again later.");
        }
    }

    Ok(())
}
