//! Custom error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Class/type name outside the enumerated set of a part kind
    #[error("Unknown {kind} type: {value}")]
    UnknownType { kind: &'static str, value: String },
    /// Serial numbers of every part in a rejected batch that is already
    /// attached to a train
    #[error("Unable to connect parts: {} to the train", .0.join(", "))]
    PartAlreadyConnected(Vec<String>),
    #[error("A train must keep at least one locomotive")]
    NoLocomotivesLeft,
    #[error("`Init::init` failed: {0}")]
    InitError(String),
    #[error("`SerdeAPI` failed: {0}")]
    SerdeError(String),
}

pub type TrainResult<T> = Result<T, Error>;
