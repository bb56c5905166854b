use crate::catalog::Skill;
use crate::progress::Progress;
use crate::types::Mastery;

/// Base point value of one skill: its tier times ten.
fn base_points(skill: &Skill) -> f64 {
    f64::from(skill.tier) * 10.0
}

/// Weighted total over the whole catalog: full credit for mastered skills,
/// half credit for basic ones. Fractional contributions accumulate exactly
/// and the sum is rounded ONCE at the end (ties away from zero, which for
/// these non-negative totals is round-half-up). Rounding per skill would
/// silently change totals and is deliberately avoided.
pub fn compute_score(skills: &[Skill], progress: &Progress) -> u32 {
    let mut total = 0.0_f64;
    for skill in skills {
        match progress.mastery(skill.id) {
            Mastery::Mastered => total += base_points(skill),
            Mastery::Basic => total += base_points(skill) * 0.5,
            Mastery::Unknown => {}
        }
    }
    total.round() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
