//! Common error types for CLI operations

/// A common error type for CLI operations.
///
/// None of these are fatal. The engine recovers from each one locally
/// (the operation is dropped or truncated and a diagnostic is printed)
/// and only hands the error back to the caller so it can be observed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The line buffer is at capacity and a character was dropped.
    LineFull,
    /// More bytes arrived in one poll than the staging area holds.
    InputOverflow,
    /// The dictionary table already holds the maximum number of entries.
    DictionaryTableFull,
    /// A dictionary or command was registered with an empty name.
    EmptyName,
    /// No registered dictionary contains the requested command.
    UnknownCommand,
    /// A command received an argument it could not interpret.
    InvalidArgument,
    /// A configuration document could not be parsed.
    Config,
}

impl Error {
    /// Short human readable description of the error.
    pub fn message(&self) -> &'static str {
        match self {
            Error::LineFull => "line buffer is full",
            Error::InputOverflow => "serial line buffer is full",
            Error::DictionaryTableFull => "max number of dictionaries defined already",
            Error::EmptyName => "name must not be empty",
            Error::UnknownCommand => "not a valid command",
            Error::InvalidArgument => "invalid argument",
            Error::Config => "invalid configuration",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::LineFull => defmt::write!(f, "LineFull"),
            Error::InputOverflow => defmt::write!(f, "InputOverflow"),
            Error::DictionaryTableFull => defmt::write!(f, "DictionaryTableFull"),
            Error::EmptyName => defmt::write!(f, "EmptyName"),
            Error::UnknownCommand => defmt::write!(f, "UnknownCommand"),
            Error::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Error::Config => defmt::write!(f, "Config"),
        }
    }
}
