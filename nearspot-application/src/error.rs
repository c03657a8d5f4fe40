use std::io;

use thiserror::Error;

use nearspot_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        Self::Parameter(ParameterError::Repo(err))
    }
}
