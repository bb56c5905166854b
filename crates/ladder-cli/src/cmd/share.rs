use anyhow::Context;
use chrono::Utc;
use ladder_core::session::Session;
use std::path::Path;

const SPARK_LEVELS: &[char] = &['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Plain-text snapshot card of the current standing, suitable for pasting
/// into a chat. Image export is deliberately not part of this tool.
pub fn run(root: &Path) -> anyhow::Result<()> {
    let session = Session::open(root, Utc::now()).context("failed to open ladder data")?;
    let level = session.level();
    let summary = session.summary();
    let points = session.history().projection();
    let scores: Vec<u32> = points.iter().map(|s| s.score).collect();

    println!("════════════════════════════════════");
    println!(" 我的天梯 · Badminton Training Ladder");
    println!();
    println!(" {}（{}）", level.display_label, level.title);
    println!(
        " score {} / {}   mastered {}/{}",
        session.score(),
        ladder_core::catalog::max_score(),
        summary.mastered,
        summary.total
    );
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        println!(
            " {}  {} → {}",
            sparkline(&scores),
            first.day().format("%m-%d"),
            last.day().format("%m-%d")
        );
    }
    println!();
    println!(" - Keep Practicing -");
    println!("════════════════════════════════════");

    Ok(())
}

/// Map scores onto block characters; the largest value always uses the
/// tallest block so short histories still look like growth.
fn sparkline(scores: &[u32]) -> String {
    let max = scores.iter().copied().max().unwrap_or(0).max(1);
    scores
        .iter()
        .map(|&s| {
            let idx = (u64::from(s) * (SPARK_LEVELS.len() as u64 - 1)).div_ceil(u64::from(max));
            SPARK_LEVELS[idx as usize]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparkline_scales_to_max() {
        let line = sparkline(&[0, 50, 100]);
        assert_eq!(line.chars().count(), 3);
        assert_eq!(line.chars().next(), Some('▁'));
        assert_eq!(line.chars().last(), Some('█'));
    }

    #[test]
    fn sparkline_of_zeros_is_flat() {
        assert_eq!(sparkline(&[0, 0]), "▁▁");
    }
}
