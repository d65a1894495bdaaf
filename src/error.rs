//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
///
/// All variants are configuration errors: they are reported before a
/// [`Machine`](crate::Machine) exists, so no partially configured machine
/// is ever observable. Once constructed, encoding cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor identifier is not one of I, II, III, IV or V.
    #[error("Unknown rotor '{0}', expected one of I, II, III, IV, V")]
    UnknownRotor(String),
    /// Start position is not a letter from A to Z.
    #[error("Invalid start position '{0}', expected a letter from A to Z")]
    InvalidStartPosition(char),
    /// A position string did not hold exactly three letters.
    #[error("Expected 3 start positions, got {0}")]
    InvalidPositionCount(usize),
    /// A rotor list did not hold exactly three identifiers.
    #[error("Expected 3 rotors, got {0}")]
    InvalidRotorCount(usize),
    /// The message contains no letters to encrypt.
    #[error("Message contains no letters to encrypt")]
    NoLetters,
    /// A configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EnigmaError {
    fn from(err: serde_json::Error) -> Self {
        EnigmaError::Config(err.to_string())
    }
}
