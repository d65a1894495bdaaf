//! Permutation tables: rotor wirings, notch letters and the reflector.
//!
//! Each wiring is a 26-letter sequence where position `i` holds the image
//! of the `i`-th alphabet letter. The tables are the historical Wehrmacht
//! rotors I–V and reflector B. They are checked at compile time: every
//! rotor wiring must be a permutation of the alphabet, and the reflector
//! must be an involution with no fixed points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;

/// Number of available rotor types.
pub const ROTOR_TYPES: usize = 5;

const ROTOR_WIRINGS: [&[u8; 26]; ROTOR_TYPES] = [
    b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
    b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
    b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
    b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
    b"VZBRGITYUPSDNHLXAWMJQOFECK",
];

const ROTOR_NOTCHES: [u8; ROTOR_TYPES] = *b"QEVJZ";

/// Wiring of reflector B.
pub const REFLECTOR_B: &[u8; 26] = b"YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// Returns `true` if `wiring` holds every letter `A`–`Z` exactly once.
pub const fn is_permutation(wiring: &[u8; 26]) -> bool {
    let mut seen = [false; 26];
    let mut i = 0;
    while i < 26 {
        let c = wiring[i];
        if !c.is_ascii_uppercase() {
            return false;
        }
        let idx = (c - b'A') as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
        i += 1;
    }
    true
}

/// Returns `true` if `wiring` is a permutation with `f(f(x)) == x` and
/// `f(x) != x` for every letter.
pub const fn is_reflection(wiring: &[u8; 26]) -> bool {
    if !is_permutation(wiring) {
        return false;
    }
    let mut i = 0;
    while i < 26 {
        let image = (wiring[i] - b'A') as usize;
        if image == i || (wiring[image] - b'A') as usize != i {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = {
    let mut i = 0;
    while i < ROTOR_TYPES {
        assert!(is_permutation(ROTOR_WIRINGS[i]), "rotor wiring is not a permutation");
        assert!(ROTOR_NOTCHES[i].is_ascii_uppercase(), "notch is not a letter");
        i += 1;
    }
    assert!(is_reflection(REFLECTOR_B), "reflector B is not a fixed-point-free involution");
};

/// Identifier of one of the five rotor types.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RotorId {
    /// Rotor I, notch Q.
    I,
    /// Rotor II, notch E.
    II,
    /// Rotor III, notch V.
    III,
    /// Rotor IV, notch J.
    IV,
    /// Rotor V, notch Z.
    V,
}

impl RotorId {
    /// All rotor types, in table order.
    pub const ALL: [RotorId; ROTOR_TYPES] =
        [RotorId::I, RotorId::II, RotorId::III, RotorId::IV, RotorId::V];

    fn table_index(self) -> usize {
        match self {
            RotorId::I => 0,
            RotorId::II => 1,
            RotorId::III => 2,
            RotorId::IV => 3,
            RotorId::V => 4,
        }
    }

    /// Returns the Roman-numeral name of this rotor.
    pub fn as_str(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
        }
    }

    /// Returns the wiring of this rotor as 26 uppercase ASCII letters.
    pub fn wiring(self) -> &'static [u8; 26] {
        ROTOR_WIRINGS[self.table_index()]
    }

    /// Returns the notch letter of this rotor.
    ///
    /// When the rotor steps onto this letter, the next slower rotor steps too.
    pub fn notch(self) -> char {
        ROTOR_NOTCHES[self.table_index()] as char
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotorId {
    type Err = EnigmaError;

    /// Parses `I`..`V`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        RotorId::ALL
            .into_iter()
            .find(|id| id.as_str() == name)
            .ok_or_else(|| EnigmaError::UnknownRotor(s.to_string()))
    }
}

impl TryFrom<String> for RotorId {
    type Error = EnigmaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RotorId> for String {
    fn from(id: RotorId) -> Self {
        id.as_str().to_string()
    }
}
