use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("update `{operation}` captures {expected} parameter(s) but {actual} argument(s) were supplied")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("`{operation}` is not a declared state-update operation of this component")]
    UnknownOperation { operation: String },

    #[error("`{name}` is not a declared state value of this container")]
    UnknownStateValue { name: String },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
