use thiserror::Error;
use uic_model::{FieldSection, ModelError};

use crate::classify::MAX_CONTAINER_DEPTH;

/// Fatal internal-consistency failures.
///
/// Every variant indicates a bug in the upstream validation pass: derivation
/// aborts immediately and names the offending field or operation so the
/// upstream pass can be corrected. Classification fallback to `Opaque` is a
/// deliberate default, never an error.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error(
        "`{name}` does not resolve to a declared prop, state value, tree prop, \
         or inter-stage input; this should have been caught in the validation pass"
    )]
    UnresolvedReference { name: String },

    #[error(
        "render-data diff `{name}` references a {section}, but diffs may only \
         reference props or state values; this should have been caught in the \
         validation pass"
    )]
    InvalidDiffReference { name: String, section: FieldSection },

    #[error(
        "field `{name}` nests containers {depth} deep, beyond the supported \
         bound of {MAX_CONTAINER_DEPTH}"
    )]
    ContainerDepthExceeded { name: String, depth: usize },

    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, DeriveError>;
