use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use ladder_core::{catalog, session::Session, LadderError};
use std::path::Path;

pub fn run(root: &Path, id: u32, json: bool) -> anyhow::Result<()> {
    let skill = catalog::find(id).ok_or(LadderError::SkillNotFound(id))?;
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;
    let mastery = session.progress().mastery(id);

    if json {
        #[derive(serde::Serialize)]
        struct ShowOutput<'a> {
            #[serde(flatten)]
            skill: &'a catalog::Skill,
            mastery: &'static str,
        }
        return print_json(&ShowOutput {
            skill,
            mastery: mastery.as_str(),
        });
    }

    println!("#{} {} (L{})", skill.id, skill.name, skill.tier);
    println!("category:   {}", skill.category);
    println!("difficulty: {}", skill.difficulty);
    println!("mastery:    {}", mastery);
    println!("要点:       {}", skill.check_points);
    println!("常见错误:   {}", skill.common_mistakes);

    Ok(())
}
