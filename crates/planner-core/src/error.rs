use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("presets file not found: {0} (run 'planner init' to create one)")]
    PresetsNotFound(String),

    #[error("invalid posting frequency {0}: expected 1 to 7 posts per week")]
    InvalidFrequency(u8),

    #[error("no active pillars: select at least one")]
    NoActivePillars,

    #[error("unknown pillar '{0}': not in the presets file")]
    UnknownPillar(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
