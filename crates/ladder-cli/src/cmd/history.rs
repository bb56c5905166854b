use crate::output::{print_json, print_table};
use anyhow::Context;
use chrono::Utc;
use ladder_core::history::Sample;
use ladder_core::session::Session;
use std::path::Path;

pub fn run(root: &Path, full: bool, json: bool) -> anyhow::Result<()> {
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;

    let samples: Vec<Sample> = if full {
        session.history().samples().to_vec()
    } else {
        session.history().projection()
    };

    if json {
        return print_json(&samples);
    }

    let rows: Vec<Vec<String>> = samples
        .iter()
        .map(|s| vec![s.day().format("%Y-%m-%d").to_string(), s.score.to_string()])
        .collect();
    print_table(&["DATE", "SCORE"], rows);

    Ok(())
}
