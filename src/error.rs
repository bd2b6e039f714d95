use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("elapsed time out of range: {0}")]
    OutOfRange(#[from] chrono::OutOfRangeError),
}
