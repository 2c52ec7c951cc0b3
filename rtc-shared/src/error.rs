use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("capturer: no tokio runtime available")]
    ErrNoRuntime,
    #[error("capturer: stopped")]
    ErrCapturerClosed,
    #[error("capturer: timed out waiting for dimensions to resolve")]
    ErrDimensionsTimeout,
    #[error("invalid video rotation: {0} degrees")]
    ErrInvalidRotation(u32),
    #[error("invalid video quality: {0}")]
    ErrInvalidVideoQuality(String),

    #[error("{0}")]
    Other(String),
}
