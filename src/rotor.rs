//! Rotor: a single position-shiftable substitution disk.
//!
//! A rotor holds a fixed wiring (and its inverse) plus a mutable angular
//! position. The same wiring yields a different substitution at every
//! position: the input is offset by the position before the lookup and
//! the offset is removed again from the output.
//!
//! All operations work on alphabet indices (`A` = 0); inputs are reduced
//! modulo 26.

use crate::error::EnigmaError;
use crate::utils::alphabet::{self, ALPHABET_LEN};
use crate::wiring::RotorId;

/// A single rotor disk with forward and backward substitution maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    forward: [u8; 26],
    backward: [u8; 26],
    notch: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor of type `id` showing `start` in its window.
    ///
    /// The forward map is taken from the wiring table and the backward map
    /// is computed as its inverse, once, here.
    ///
    /// # Parameters
    /// - `id`: The rotor type.
    /// - `start`: Initial window letter, case-insensitive.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidStartPosition`] if `start` is not a
    /// letter from A to Z.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::rotor::Rotor;
    /// use rotorcrypt::RotorId;
    ///
    /// let rotor = Rotor::new(RotorId::I, 'c').unwrap();
    /// assert_eq!(rotor.window(), 'C');
    /// assert!(Rotor::new(RotorId::I, '3').is_err());
    /// ```
    pub fn new(id: RotorId, start: char) -> Result<Self, EnigmaError> {
        let position =
            alphabet::letter_index(start).ok_or(EnigmaError::InvalidStartPosition(start))?;

        let mut forward = [0u8; 26];
        let mut backward = [0u8; 26];
        for (input, &output) in id.wiring().iter().enumerate() {
            let output = output - b'A';
            forward[input] = output;
            backward[output as usize] = input as u8;
        }

        Ok(Rotor {
            id,
            forward,
            backward,
            notch: id.notch() as u8 - b'A',
            position,
        })
    }

    /// Returns the rotor type.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Returns the notch letter.
    pub fn notch(&self) -> char {
        alphabet::index_letter(self.notch)
    }

    /// Returns the current position (`0..26`).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Returns the letter currently showing in the rotor window.
    pub fn window(&self) -> char {
        alphabet::index_letter(self.position)
    }

    /// Advances the rotor by one position.
    ///
    /// # Returns
    /// `true` if the new position is the notch, meaning the next slower
    /// rotor must step as well.
    pub fn rotate(&mut self) -> bool {
        self.position = (self.position + 1) % ALPHABET_LEN;
        self.position == self.notch
    }

    /// Encodes an index travelling towards the reflector.
    ///
    /// Computes `(forward[(letter + position) mod 26] - position) mod 26`.
    pub fn encode_forward(&self, letter: u8) -> u8 {
        self.encode_with(&self.forward, letter)
    }

    /// Encodes an index travelling back from the reflector.
    ///
    /// Same offset handling as [`encode_forward`](Self::encode_forward),
    /// through the inverse map.
    pub fn encode_backward(&self, letter: u8) -> u8 {
        self.encode_with(&self.backward, letter)
    }

    /// Sets the position directly. Used by the machine to restore a snapshot.
    pub(crate) fn set_position(&mut self, position: u8) {
        self.position = position % ALPHABET_LEN;
    }

    fn encode_with(&self, map: &[u8; 26], letter: u8) -> u8 {
        let contact = alphabet::shift(letter, self.position);
        alphabet::unshift(map[contact as usize], self.position)
    }
}
