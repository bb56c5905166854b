use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::Utc;
use ladder_core::catalog::{MAX_TIER, MIN_TIER};
use ladder_core::level;
use ladder_core::session::Session;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;
    let score = session.score();
    let level_info = session.level();
    let stats = session.tier_stats();
    let summary = session.summary();

    if json {
        #[derive(serde::Serialize)]
        struct TierRow {
            tier: u8,
            title: &'static str,
            #[serde(flatten)]
            stats: ladder_core::level::TierStats,
            percent: u32,
        }

        #[derive(serde::Serialize)]
        struct StatusOutput {
            score: u32,
            max_score: u32,
            level: ladder_core::level::LevelInfo,
            summary: ladder_core::progress::MasterySummary,
            tiers: Vec<TierRow>,
        }

        let tiers: Vec<TierRow> = (MIN_TIER..=MAX_TIER)
            .map(|t| {
                let s = stats[usize::from(t)];
                TierRow {
                    tier: t,
                    title: level::title_for(t),
                    stats: s,
                    percent: s.progress_percent(),
                }
            })
            .collect();

        return print_json(&StatusOutput {
            score,
            max_score: ladder_core::catalog::max_score(),
            level: level_info,
            summary,
            tiers,
        });
    }

    println!("{} ({})", level_info.display_label, level_info.title);
    println!(
        "score: {score}/{}  mastered: {}  basic: {}  unknown: {}",
        ladder_core::catalog::max_score(),
        summary.mastered,
        summary.basic,
        summary.unknown
    );
    println!();

    // Higher tiers first, like a ladder.
    let rows: Vec<Vec<String>> = (MIN_TIER..=MAX_TIER)
        .rev()
        .map(|t| {
            let s = stats[usize::from(t)];
            vec![
                format!("L{t}"),
                level::title_for(t).to_string(),
                s.total.to_string(),
                s.passed.to_string(),
                s.mastered.to_string(),
                format!("{}%", s.progress_percent()),
            ]
        })
        .collect();
    print_table(
        &["TIER", "TITLE", "SKILLS", "PASSED", "MASTERED", "PROGRESS"],
        rows,
    );

    Ok(())
}
