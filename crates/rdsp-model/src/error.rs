use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

pub type ModelResult<T> = Result<T, ModelError>;
