use thiserror::Error;

use crate::values::Product;

/// Fatal configuration problems, reported before the first step runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Roster entry #{index} has no agent type")]
    MissingAgentType { index: usize },

    #[error("Roster entry #{index} ({kind}) trades '{product}', which has no reference price")]
    UnknownProduct {
        index: usize,
        kind: String,
        product: Product,
    },

    #[error("Reference price for '{product}' must be at least 1")]
    InvalidReferencePrice { product: Product },

    #[error("Cooldown T must be at least 1 step")]
    ZeroCooldown,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
