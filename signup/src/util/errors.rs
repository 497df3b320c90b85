use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("unknown plan: {0}")]
    UnknownPlan(String),
    #[error("unknown add-on: {0}")]
    UnknownAddon(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SignupError>;
