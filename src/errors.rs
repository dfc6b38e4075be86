use thiserror::Error;

#[derive(Error, Debug)]
pub enum EfpError {
    // File I/O Errors
    #[error("Unable to open input file '{path}': {source}")]
    InputFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line} of the input: {source}")]
    ReadError {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    // Option errors
    #[error("Unknown option in input file on line {line}")]
    UnknownOption { line: usize },

    #[error("Incorrect value for option {option} on line {line}")]
    IncorrectValue { option: &'static str, line: usize },

    #[error("Option {option} value is out of range on line {line}")]
    OutOfRange { option: &'static str, line: usize },

    #[error("Only one option per line is allowed (line {line})")]
    TrailingInput { line: usize },

    // Fragment errors
    #[error("Unable to read fragment name on line {line}")]
    FragmentName { line: usize },

    #[error("Incorrect fragment coordinates format on line {line}")]
    FragmentCoordinates { line: usize },

    #[error("Incorrect fragment velocities format on line {line}")]
    FragmentVelocities { line: usize },

    // Configuration errors
    #[error("Coordinate format cannot change after a fragment is read (line {line})")]
    CoordTypeChanged { line: usize },

    #[error("At least one fragment must be specified")]
    NoFragments,
}

pub type Result<T> = std::result::Result<T, EfpError>;
