use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Error returned by the application code under test
    #[error(transparent)]
    AppError(Box<dyn std::error::Error + Send + Sync>),
}
