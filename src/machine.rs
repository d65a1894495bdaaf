//! Machine: three rotors in cascade closed by a reflector.
//!
//! Owns the stepping policy and the full signal path. Every call to
//! [`Machine::encrypt_char`] first steps the rotors, then sends the letter
//! forward through the fast, middle and slow rotors, reflects it, and
//! sends it back through the slow, middle and fast rotors.
//!
//! Stepping is a single cascade: the fast rotor always steps, the middle
//! rotor steps when the fast rotor lands on its notch, and the slow rotor
//! steps when that middle step lands on the middle notch. The historical
//! double-step of the middle rotor is not modelled.

use std::fmt;

use tracing::{debug, trace};

use crate::error::EnigmaError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet;
use crate::wiring::RotorId;

/// Slot index of the fast (rightmost) rotor.
const FAST: usize = 0;

/// Slot index of the middle rotor.
const MIDDLE: usize = 1;

/// Slot index of the slow (leftmost) rotor.
const SLOW: usize = 2;

/// Snapshot of the three rotor positions, the machine's entire mutable state.
///
/// Displays as the window letters read left to right (slow, middle, fast),
/// the way they appear on the physical machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Positions {
    /// Position of the fast (rightmost) rotor, `0..26`.
    pub fast: u8,
    /// Position of the middle rotor, `0..26`.
    pub middle: u8,
    /// Position of the slow (leftmost) rotor, `0..26`.
    pub slow: u8,
}

impl Positions {
    /// Returns the window letters in display order (slow, middle, fast).
    pub fn window(&self) -> [char; 3] {
        [
            alphabet::index_letter(self.slow),
            alphabet::index_letter(self.middle),
            alphabet::index_letter(self.fast),
        ]
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [slow, middle, fast] = self.window();
        write!(f, "{}{}{}", slow, middle, fast)
    }
}

/// Three-rotor cipher machine with reflector B.
///
/// The machine is self-reciprocal: running the ciphertext through a machine
/// in the same initial state restores the cleartext.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{Machine, RotorId};
///
/// let mut encoder = Machine::new(RotorId::III, RotorId::II, RotorId::I, 'A', 'A', 'A').unwrap();
/// let ciphertext = encoder.encrypt_message("HELLOWORLD");
///
/// let mut decoder = Machine::new(RotorId::III, RotorId::II, RotorId::I, 'A', 'A', 'A').unwrap();
/// assert_eq!(decoder.encrypt_message(&ciphertext), "HELLOWORLD");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: [Rotor; 3],
    reflector: Reflector,
    initial: Positions,
}

impl Machine {
    /// Creates a machine from three rotor types and their start letters.
    ///
    /// Arguments are in signal order: `rotor1` is the fast rotor that steps
    /// on every key, `rotor3` is the slow rotor next to the reflector. The
    /// same rotor type may be used in more than one slot.
    ///
    /// # Parameters
    /// - `rotor1`, `rotor2`, `rotor3`: Rotor types for the fast, middle and
    ///   slow slots.
    /// - `start1`, `start2`, `start3`: Start letters for the same slots,
    ///   case-insensitive.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidStartPosition`] if any start letter is
    /// not in A–Z. No machine is created in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{EnigmaError, Machine, RotorId};
    ///
    /// let machine = Machine::new(RotorId::I, RotorId::I, RotorId::V, 'a', 'b', 'c').unwrap();
    /// assert_eq!(machine.positions().to_string(), "CBA");
    ///
    /// let err = Machine::new(RotorId::I, RotorId::II, RotorId::III, 'A', '?', 'A').unwrap_err();
    /// assert_eq!(err, EnigmaError::InvalidStartPosition('?'));
    /// ```
    pub fn new(
        rotor1: RotorId,
        rotor2: RotorId,
        rotor3: RotorId,
        start1: char,
        start2: char,
        start3: char,
    ) -> Result<Self, EnigmaError> {
        let rotors = [
            Rotor::new(rotor1, start1)?,
            Rotor::new(rotor2, start2)?,
            Rotor::new(rotor3, start3)?,
        ];
        let mut machine = Machine {
            rotors,
            reflector: Reflector::b(),
            initial: Positions::default(),
        };
        machine.initial = machine.positions();

        debug!(
            slow = %rotor3,
            middle = %rotor2,
            fast = %rotor1,
            window = %machine.initial,
            "machine configured"
        );
        Ok(machine)
    }

    /// Returns the rotors in signal order (fast, middle, slow).
    pub fn rotors(&self) -> &[Rotor; 3] {
        &self.rotors
    }

    /// Returns a snapshot of the current rotor positions.
    pub fn positions(&self) -> Positions {
        Positions {
            fast: self.rotors[FAST].position(),
            middle: self.rotors[MIDDLE].position(),
            slow: self.rotors[SLOW].position(),
        }
    }

    /// Returns the positions the machine was constructed with.
    pub fn initial_positions(&self) -> Positions {
        self.initial
    }

    /// Restores the start positions.
    ///
    /// After a reset the machine produces the same output as a freshly
    /// constructed machine with the same configuration.
    pub fn reset(&mut self) {
        self.rotors[FAST].set_position(self.initial.fast);
        self.rotors[MIDDLE].set_position(self.initial.middle);
        self.rotors[SLOW].set_position(self.initial.slow);
        debug!(window = %self.initial, "machine reset");
    }

    /// Performs one stepping event without encoding a letter.
    pub fn step(&mut self) {
        if self.rotors[FAST].rotate() {
            let middle_on_notch = self.rotors[MIDDLE].rotate();
            trace!(window = %self.positions(), "middle rotor stepped");
            if middle_on_notch {
                self.rotors[SLOW].rotate();
                trace!(window = %self.positions(), "slow rotor stepped");
            }
        }
    }

    /// Encrypts a single letter, advancing the rotors first.
    ///
    /// Lowercase input is accepted and the result is always uppercase.
    /// Characters outside A–Z are not part of the cipher alphabet: they are
    /// returned unchanged and do not step the rotors. Callers are expected to
    /// filter them out beforehand (see [`crate::driver::normalize`]).
    pub fn encrypt_char(&mut self, letter: char) -> char {
        let Some(mut signal) = alphabet::letter_index(letter) else {
            return letter;
        };

        self.step();

        for rotor in &self.rotors {
            signal = rotor.encode_forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.encode_backward(signal);
        }

        alphabet::index_letter(signal)
    }

    /// Encrypts a normalized message, one letter at a time, in order.
    ///
    /// The rotor state carries over between calls: encrypting the same text
    /// twice on one machine gives two different ciphertexts. Use
    /// [`reset`](Self::reset) or a fresh machine to start over.
    pub fn encrypt_message(&mut self, letters: &str) -> String {
        letters.chars().map(|c| self.encrypt_char(c)).collect()
    }
}
