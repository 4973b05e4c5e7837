//! Store error types

use crate::draft::DraftError;
use stellar_client::ClientError;
use thiserror::Error;

/// Store error type
///
/// Failed synchronization procedures surface their error here as well as
/// recording it in state; no failure is fatal to the store itself.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Order submission attempted without a bun or without fillings
    #[error("order needs a bun and at least one filling")]
    IncompleteOrder,

    /// API collaborator failure (business or transport)
    #[error(transparent)]
    Api(#[from] ClientError),

    /// Draft persistence bridge failure
    #[error(transparent)]
    Draft(#[from] DraftError),
}
