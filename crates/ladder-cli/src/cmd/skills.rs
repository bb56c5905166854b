use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::Utc;
use ladder_core::catalog;
use ladder_core::session::Session;
use std::path::Path;

pub fn run(root: &Path, tier: Option<u8>, category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;

    let skills: Vec<&catalog::Skill> = catalog::all()
        .iter()
        .filter(|s| tier.map_or(true, |t| s.tier == t))
        .filter(|s| category.map_or(true, |c| s.category == c))
        .collect();

    if json {
        #[derive(serde::Serialize)]
        struct SkillRow<'a> {
            id: u32,
            tier: u8,
            category: &'a str,
            name: &'a str,
            difficulty: &'a str,
            mastery: &'static str,
        }

        let rows: Vec<SkillRow> = skills
            .iter()
            .map(|s| SkillRow {
                id: s.id,
                tier: s.tier,
                category: s.category,
                name: s.name,
                difficulty: s.difficulty,
                mastery: session.progress().mastery(s.id).as_str(),
            })
            .collect();
        return print_json(&rows);
    }

    if skills.is_empty() {
        println!("No skills match the given filters.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = skills
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                format!("L{}", s.tier),
                s.category.to_string(),
                s.name.to_string(),
                session.progress().mastery(s.id).to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "TIER", "CATEGORY", "NAME", "MASTERY"], rows);

    Ok(())
}
