use thiserror::Error;

use wp_core::{CoreError, EntityId, PathId};
use wp_entity::EntityError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("unknown path {0}")]
    UnknownPath(PathId),

    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("entity error: {0}")]
    Entity(#[from] EntityError),
}

pub type SimResult<T> = Result<T, SimError>;
