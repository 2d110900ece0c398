use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate field name `{name}`: prop, state, tree prop, and inter-stage names must be unique")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
