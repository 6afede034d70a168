// #![deny(missing_docs)]

pub mod alphabet;
pub mod attack;
pub mod cipher;
pub mod dictionary;
pub mod error;

pub use error::{CipherError, CipherResult};
