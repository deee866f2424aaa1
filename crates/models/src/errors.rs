use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) | Some(SqlErr::UniqueConstraintViolation(msg)) => {
                ModelError::Constraint(msg)
            }
            _ => ModelError::Db(e.to_string()),
        }
    }
}
