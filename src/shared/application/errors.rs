use thiserror::Error;

use crate::modules::availability::use_cases::generate_time_slots::generate::SlotGenerationError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    InvalidSchedule(#[from] SlotGenerationError),

    #[error("service location not found: {0}")]
    LocationNotFound(String),

    #[error("no service location selected")]
    NoLocationSelected,

    #[error("unexpected: {0}")]
    Unexpected(String),
}
