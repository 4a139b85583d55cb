use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("no path has been assigned to this follower")]
    NoPath,
}

pub type EntityResult<T> = Result<T, EntityError>;
