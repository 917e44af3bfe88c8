
/// Custom error type for the relay crate.
#[derive(Debug, PartialEq)]
pub enum RelayError {
    /// Error type from csv crate.
    CsvError,
    /// Zero total mass on normalization, no valid distribution exists.
    DegenerateDist,
    /// Error type from std::io.
    IoError,
    /// Malformed pace or time field in a result record.
    ParseError,
}

impl std::error::Error for RelayError {}

impl std::fmt::Display for RelayError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RelayError::CsvError => write!(f, "Could not serialize/deserialize csv file."),
            RelayError::DegenerateDist => {
                write!(f, "Could not normalize distribution with zero total mass.")
            }
            RelayError::IoError => write!(f, "Could not read file from path provided."),
            RelayError::ParseError => write!(f, "Could not parse pace field from record."),
        }
    }
}

impl From<csv::Error> for RelayError {
    fn from(_: csv::Error) -> Self {
        RelayError::CsvError
    }
}

impl From<std::io::Error> for RelayError {
    fn from(_: std::io::Error) -> Self {
        RelayError::IoError
    }
}

impl From<std::num::ParseFloatError> for RelayError {
    fn from(_: std::num::ParseFloatError) -> Self {
        RelayError::ParseError
    }
}
