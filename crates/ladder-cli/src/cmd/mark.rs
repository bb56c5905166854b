use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use ladder_core::{catalog, session::Session, types::Mastery, LadderError};
use std::path::Path;

pub fn run(root: &Path, id: u32, mastery: &str, json: bool) -> anyhow::Result<()> {
    let mastery: Mastery = mastery.parse()?;
    let skill = catalog::find(id).ok_or(LadderError::SkillNotFound(id))?;
    let mut session = Session::open(root, Utc::now()).context("failed to open ladder data")?;

    let score = session.set_mastery(id, mastery, Utc::now())?;
    let level = session.level();

    if json {
        #[derive(serde::Serialize)]
        struct MarkOutput<'a> {
            id: u32,
            name: &'a str,
            mastery: &'static str,
            score: u32,
            level: ladder_core::level::LevelInfo,
        }
        return print_json(&MarkOutput {
            id,
            name: skill.name,
            mastery: mastery.as_str(),
            score,
            level,
        });
    }

    println!("{} → {}", skill.name, mastery);
    println!("score: {score}  level: {} ({})", level.display_label, level.title);

    Ok(())
}
