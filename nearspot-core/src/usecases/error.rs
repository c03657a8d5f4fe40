use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid position")]
    InvalidPosition,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
