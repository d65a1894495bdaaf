//! Rotor cipher machine simulator.
//!
//! Simulates a three-rotor electromechanical cipher machine in the style of
//! the Enigma: a stack of position-dependent substitution disks, coupled by
//! a cascading stepping rule and closed by a reflector so that the signal
//! returns through the same disks. Because of the reflector, the machine is
//! self-reciprocal: encryption and decryption are the same operation.
//!
//! Five rotor types (I–V) and reflector B are available. There is no
//! plugboard and no ring setting.
//!
//! # Architecture
//!
//! ```text
//! wiring      (static permutation tables, checked at compile time)
//!     ↓
//! Rotor       (one disk — forward/backward map + mutable position)
//! Reflector   (fixed involution, no state)
//!     ↓ three rotors + reflector
//! Machine     (stepping cascade + forward → reflect → backward path)
//!     ↓
//! driver      (normalizes text, feeds letters to the machine)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with two machines in the same start state:
//!
//! ```
//! use rotorcrypt::{Machine, RotorId};
//!
//! let mut encoder = Machine::new(RotorId::III, RotorId::II, RotorId::I, 'A', 'A', 'A').unwrap();
//! let ciphertext = encoder.encrypt_message("AAAAA");
//! assert_eq!(ciphertext, "BDZGO");
//!
//! let mut decoder = Machine::new(RotorId::III, RotorId::II, RotorId::I, 'A', 'A', 'A').unwrap();
//! assert_eq!(decoder.encrypt_message(&ciphertext), "AAAAA");
//! ```
//!
//! Configure in display order (left to right) and encrypt free-form text:
//!
//! ```
//! use rotorcrypt::driver::encrypt_with_config;
//! use rotorcrypt::{MachineConfig, RotorId};
//!
//! let config = MachineConfig::new([RotorId::I, RotorId::II, RotorId::III], ['A', 'A', 'A']);
//! assert_eq!(encrypt_with_config(&config, "Hello, World!").unwrap(), "ILBDAAMTAZ");
//! ```

#![deny(clippy::all)]

pub mod config;
pub mod driver;
pub mod error;
pub mod machine;
pub mod reflector;
pub mod rotor;
pub(crate) mod utils;
pub mod wiring;

pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::{Machine, Positions};
pub use wiring::RotorId;
