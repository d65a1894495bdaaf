//! Session driver: turns free-form text into machine input.
//!
//! The machine only understands the letters A–Z. The driver uppercases the
//! text, drops everything else (spaces, punctuation, digits, accented
//! letters) and feeds what remains to the machine in order.

use tracing::{debug, warn};

use crate::config::MachineConfig;
use crate::error::EnigmaError;
use crate::machine::Machine;

/// Uppercases `text` and keeps only the ASCII letters A–Z.
///
/// # Examples
///
/// ```
/// use rotorcrypt::driver::normalize;
///
/// assert_eq!(normalize("Hello, World! 123"), "HELLOWORLD");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Normalizes `text` and encrypts it on `machine`.
///
/// The machine keeps its advanced state afterwards, so a second call
/// continues the same key stream.
///
/// # Errors
/// Returns [`EnigmaError::NoLetters`] if `text` has no letters; the machine
/// is left untouched in that case.
pub fn encrypt_text(machine: &mut Machine, text: &str) -> Result<String, EnigmaError> {
    let letters = normalize(text);
    if letters.is_empty() {
        warn!(input_len = text.len(), "no letters to encrypt");
        return Err(EnigmaError::NoLetters);
    }
    debug!(
        letters = letters.len(),
        dropped = text.chars().count() - letters.len(),
        "encrypting message"
    );
    Ok(machine.encrypt_message(&letters))
}

/// Builds a fresh machine from `config` and encrypts `text` with it.
///
/// Every call starts from the configured positions, so the same input always
/// yields the same output. Decryption is the same call on the ciphertext.
///
/// # Errors
/// Returns a configuration error from [`MachineConfig::build`], or
/// [`EnigmaError::NoLetters`] if `text` has no letters.
///
/// # Examples
///
/// ```
/// use rotorcrypt::driver::encrypt_with_config;
/// use rotorcrypt::MachineConfig;
///
/// let config = MachineConfig::default();
/// let ciphertext = encrypt_with_config(&config, "Attack at dawn").unwrap();
/// assert_eq!(encrypt_with_config(&config, &ciphertext).unwrap(), "ATTACKATDAWN");
/// ```
pub fn encrypt_with_config(config: &MachineConfig, text: &str) -> Result<String, EnigmaError> {
    let mut machine = config.build()?;
    encrypt_text(&mut machine, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiring::RotorId;

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(normalize("HELLO, WORLD! 123"), "HELLOWORLD");
    }

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("enigma"), "ENIGMA");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Ação ÉÑ"), "AO");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("1234 !?"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_encrypt_text_filters_before_encrypting() {
        let config = MachineConfig::new([RotorId::I, RotorId::II, RotorId::III], ['A', 'A', 'A']);
        let mut machine = config.build().unwrap();
        assert_eq!(
            encrypt_text(&mut machine, "Hello, World! 123").unwrap(),
            "ILBDAAMTAZ"
        );
    }

    #[test]
    fn test_encrypt_text_no_letters() {
        let mut machine = MachineConfig::default().build().unwrap();
        assert_eq!(
            encrypt_text(&mut machine, "... 42 ..."),
            Err(EnigmaError::NoLetters)
        );
        assert_eq!(machine.positions(), machine.initial_positions());
    }

    #[test]
    fn test_encrypt_text_continues_state() {
        let config = MachineConfig::new([RotorId::I, RotorId::II, RotorId::III], ['A', 'A', 'A']);
        let mut machine = config.build().unwrap();
        let first = encrypt_text(&mut machine, "aaaaa").unwrap();
        let second = encrypt_text(&mut machine, "aaaaa").unwrap();
        assert_eq!(first, "BDZGO");
        assert_ne!(first, second);
    }

    #[test]
    fn test_encrypt_with_config_is_repeatable() {
        let config = MachineConfig::new([RotorId::V, RotorId::I, RotorId::IV], ['R', 'F', 'W']);
        let a = encrypt_with_config(&config, "same input").unwrap();
        let b = encrypt_with_config(&config, "same input").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encrypt_with_config_round_trip() {
        let config = MachineConfig::new([RotorId::II, RotorId::II, RotorId::V], ['Z', 'E', 'J']);
        let ciphertext = encrypt_with_config(&config, "Rotor machines, 1930s.").unwrap();
        assert_eq!(
            encrypt_with_config(&config, &ciphertext).unwrap(),
            "ROTORMACHINESS"
        );
    }

    #[test]
    fn test_encrypt_with_config_bad_position() {
        let config = MachineConfig::new([RotorId::I, RotorId::II, RotorId::III], ['A', '-', 'A']);
        assert_eq!(
            encrypt_with_config(&config, "TEXT"),
            Err(EnigmaError::InvalidStartPosition('-'))
        );
    }
}
