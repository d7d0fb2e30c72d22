#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Failed(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("{0}")]
    SetLogger(#[from] log::SetLoggerError),
}
