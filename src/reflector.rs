//! Reflector: the fixed involution that turns the signal back through the rotors.

use crate::utils::alphabet::ALPHABET_LEN;
use crate::wiring::REFLECTOR_B;

/// A stateless, involutive substitution with no fixed points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    map: [u8; 26],
}

impl Default for Reflector {
    fn default() -> Self {
        Self::b()
    }
}

impl Reflector {
    /// Creates reflector B, the only reflector the machine supports.
    pub fn b() -> Self {
        let mut map = [0u8; 26];
        for (input, &output) in REFLECTOR_B.iter().enumerate() {
            map[input] = output - b'A';
        }
        Reflector { map }
    }

    /// Reflects an alphabet index.
    ///
    /// Indices are reduced modulo 26, like the rotor inputs.
    /// `reflect(reflect(x)) == x` and `reflect(x) != x` for every index.
    pub fn reflect(&self, letter: u8) -> u8 {
        self.map[(letter % ALPHABET_LEN) as usize]
    }
}
