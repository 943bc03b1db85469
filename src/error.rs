use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with star map input data.
#[derive(Debug, Clone, PartialEq)]
pub enum StarMapError {
    EmptyDataset,
    MalformedRecord(String),
    DuplicateStar(String),
    UnknownStar(String),
    NonFiniteCoordinate(String),
    InvalidDistance(String),
}

impl Error for StarMapError {}

impl Display for StarMapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            StarMapError::EmptyDataset => String::from("The dataset provided is empty"),
            StarMapError::MalformedRecord(msg) => format!("Malformed dataset record: {msg}"),
            StarMapError::DuplicateStar(msg) => format!("Duplicate star label: {msg}"),
            StarMapError::UnknownStar(msg) => format!("Unknown star: {msg}"),
            StarMapError::NonFiniteCoordinate(msg) => format!("Non finite coordinate: {msg}"),
            StarMapError::InvalidDistance(msg) => format!("Invalid route distance: {msg}"),
        };
        write!(f, "{message}")
    }
}
