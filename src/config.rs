//! Machine configuration in display order.
//!
//! A [`MachineConfig`] lists rotors and start letters the way an operator
//! reads them off the machine: left (slow) to right (fast). This is the
//! order used by configuration files and the command line. [`Machine::new`]
//! takes the signal order instead (fast first); [`MachineConfig::build`]
//! performs the conversion, so the slot-to-role mapping lives in one place.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::utils::alphabet;
use crate::wiring::RotorId;

fn default_rotors() -> [RotorId; 3] {
    [RotorId::III, RotorId::II, RotorId::I]
}

fn default_positions() -> [char; 3] {
    ['A', 'A', 'A']
}

/// Rotor choice and start letters, left to right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Rotor types for the left (slow), middle and right (fast) slots.
    #[serde(default = "default_rotors")]
    pub rotors: [RotorId; 3],
    /// Start letters for the same slots.
    #[serde(default = "default_positions")]
    pub positions: [char; 3],
}

impl Default for MachineConfig {
    /// Rotors III, II, I at AAA.
    fn default() -> Self {
        MachineConfig {
            rotors: default_rotors(),
            positions: default_positions(),
        }
    }
}

impl MachineConfig {
    /// Creates a configuration from rotors and start letters in display order.
    pub fn new(rotors: [RotorId; 3], positions: [char; 3]) -> Self {
        MachineConfig { rotors, positions }
    }

    /// Parses a JSON configuration document.
    ///
    /// Missing fields take their defaults. The start letters are validated
    /// here so a bad file is rejected before any machine is built.
    ///
    /// # Errors
    /// - [`EnigmaError::Config`] if the document is not valid JSON, has
    ///   unknown fields, or names a rotor outside I–V. The message carries
    ///   the parser's description of the problem.
    /// - [`EnigmaError::InvalidStartPosition`] for a non-letter start.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{MachineConfig, RotorId};
    ///
    /// let config = MachineConfig::from_json(r#"{"rotors": ["I", "II", "III"]}"#).unwrap();
    /// assert_eq!(config.rotors, [RotorId::I, RotorId::II, RotorId::III]);
    /// assert_eq!(config.positions, ['A', 'A', 'A']);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        let config: MachineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`EnigmaError::Config`] if the file cannot be read, plus any
    /// error from [`from_json`](Self::from_json).
    pub fn from_file(path: &Path) -> Result<Self, EnigmaError> {
        let json = fs::read_to_string(path)
            .map_err(|err| EnigmaError::Config(format!("{}: {}", path.display(), err)))?;
        Self::from_json(&json)
    }

    /// Parses a rotor list such as `"I,II,III"` or `"IV V I"`.
    ///
    /// # Errors
    /// - [`EnigmaError::UnknownRotor`] for a name outside I–V.
    /// - [`EnigmaError::InvalidRotorCount`] if the list does not hold exactly
    ///   three names.
    pub fn parse_rotors(list: &str) -> Result<[RotorId; 3], EnigmaError> {
        let ids = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(str::parse::<RotorId>)
            .collect::<Result<Vec<_>, _>>()?;
        <[RotorId; 3]>::try_from(ids.as_slice())
            .map_err(|_| EnigmaError::InvalidRotorCount(ids.len()))
    }

    /// Parses a three-letter window string such as `"AQV"`.
    ///
    /// # Errors
    /// - [`EnigmaError::InvalidPositionCount`] if the string does not hold
    ///   exactly three characters.
    /// - [`EnigmaError::InvalidStartPosition`] for a non-letter.
    pub fn parse_positions(window: &str) -> Result<[char; 3], EnigmaError> {
        let letters: Vec<char> = window.trim().chars().collect();
        let positions = <[char; 3]>::try_from(letters.as_slice())
            .map_err(|_| EnigmaError::InvalidPositionCount(letters.len()))?;
        for &letter in &positions {
            alphabet::letter_index(letter).ok_or(EnigmaError::InvalidStartPosition(letter))?;
        }
        Ok(positions.map(|c| c.to_ascii_uppercase()))
    }

    /// Checks that every start letter is in A–Z.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidStartPosition`] for the first bad letter.
    pub fn validate(&self) -> Result<(), EnigmaError> {
        for &letter in &self.positions {
            alphabet::letter_index(letter).ok_or(EnigmaError::InvalidStartPosition(letter))?;
        }
        Ok(())
    }

    /// Builds a machine, mapping the rightmost slot to the fast rotor.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidStartPosition`] for a non-letter start.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{MachineConfig, RotorId};
    ///
    /// let config = MachineConfig::new([RotorId::I, RotorId::II, RotorId::III], ['A', 'A', 'A']);
    /// let mut machine = config.build().unwrap();
    /// assert_eq!(machine.rotors()[0].id(), RotorId::III);
    /// assert_eq!(machine.encrypt_message("AAAAA"), "BDZGO");
    /// ```
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let [left, middle, right] = self.rotors;
        let [left_start, middle_start, right_start] = self.positions;
        Machine::new(right, middle, left, right_start, middle_start, left_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form_defaults() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors, [RotorId::III, RotorId::II, RotorId::I]);
        assert_eq!(config.positions, ['A', 'A', 'A']);
    }

    #[test]
    fn test_build_maps_right_slot_to_fast_rotor() {
        let config = MachineConfig::new([RotorId::IV, RotorId::V, RotorId::II], ['X', 'Y', 'Z']);
        let machine = config.build().unwrap();
        let rotors = machine.rotors();
        assert_eq!(rotors[0].id(), RotorId::II);
        assert_eq!(rotors[0].window(), 'Z');
        assert_eq!(rotors[2].id(), RotorId::IV);
        assert_eq!(rotors[2].window(), 'X');
        assert_eq!(machine.positions().to_string(), "XYZ");
    }

    #[test]
    fn test_parse_rotors() {
        assert_eq!(
            MachineConfig::parse_rotors("I,II,III"),
            Ok([RotorId::I, RotorId::II, RotorId::III])
        );
        assert_eq!(
            MachineConfig::parse_rotors("iv v  i"),
            Ok([RotorId::IV, RotorId::V, RotorId::I])
        );
        assert_eq!(
            MachineConfig::parse_rotors("I, I, I"),
            Ok([RotorId::I, RotorId::I, RotorId::I])
        );
    }

    #[test]
    fn test_parse_rotors_errors() {
        assert_eq!(
            MachineConfig::parse_rotors("I,II"),
            Err(EnigmaError::InvalidRotorCount(2))
        );
        assert_eq!(
            MachineConfig::parse_rotors("I,II,III,IV"),
            Err(EnigmaError::InvalidRotorCount(4))
        );
        assert_eq!(
            MachineConfig::parse_rotors("I,VI,III"),
            Err(EnigmaError::UnknownRotor("VI".to_string()))
        );
    }

    #[test]
    fn test_parse_positions() {
        assert_eq!(MachineConfig::parse_positions("aqv"), Ok(['A', 'Q', 'V']));
        assert_eq!(
            MachineConfig::parse_positions("AB"),
            Err(EnigmaError::InvalidPositionCount(2))
        );
        assert_eq!(
            MachineConfig::parse_positions("A1C"),
            Err(EnigmaError::InvalidStartPosition('1'))
        );
    }

    #[test]
    fn test_from_json() {
        let config =
            MachineConfig::from_json(r#"{"rotors": ["V", "iv", "I"], "positions": ["B", "C", "D"]}"#)
                .unwrap();
        assert_eq!(config.rotors, [RotorId::V, RotorId::IV, RotorId::I]);
        assert_eq!(config.positions, ['B', 'C', 'D']);
    }

    #[test]
    fn test_from_json_defaults() {
        assert_eq!(MachineConfig::from_json("{}"), Ok(MachineConfig::default()));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            MachineConfig::from_json(r#"{"rotors": ["I", "II", "VI"]}"#),
            Err(EnigmaError::Config(_))
        ));
        assert!(matches!(
            MachineConfig::from_json(r#"{"plugboard": "AB"}"#),
            Err(EnigmaError::Config(_))
        ));
        assert_eq!(
            MachineConfig::from_json(r##"{"positions": ["A", "#", "A"]}"##),
            Err(EnigmaError::InvalidStartPosition('#'))
        );
    }

    #[test]
    fn test_from_missing_file() {
        let result = MachineConfig::from_file(Path::new("/nonexistent/rotorcrypt.json"));
        assert!(matches!(result, Err(EnigmaError::Config(_))));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = serde_json::to_string(&MachineConfig::default()).unwrap();
        assert_eq!(json, r#"{"rotors":["III","II","I"],"positions":["A","A","A"]}"#);
    }
}
