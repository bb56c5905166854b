use thiserror::Error;

#[derive(Debug, Error)]
pub enum LadderError {
    #[error("home directory not found: set HOME or LADDER_HOME")]
    HomeNotFound,

    #[error("unknown skill id: {0}")]
    SkillNotFound(u32),

    #[error("invalid mastery '{0}': expected unknown, basic, or mastered")]
    InvalidMastery(String),

    #[error("plan generation failed: {0}")]
    Plan(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LadderError>;
