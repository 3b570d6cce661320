use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterPointsError {
    #[error("malformed grade for {subject}: {grade:?}")]
    MalformedGrade { subject: String, grade: String },

    #[error("duplicate subject in grade sheet: {0}")]
    DuplicateSubject(String),

    #[error("empty subject code in grade sheet")]
    EmptySubject,

    #[error("unknown cluster: {0}")]
    UnknownCluster(u8),

    #[error("invalid cluster definition: {0}")]
    InvalidCluster(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClusterPointsError>;
