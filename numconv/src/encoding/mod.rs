// numconv/src/encoding/mod.rs

pub mod adder;
pub mod hex;
pub mod twos_complement;

pub use adder::{add, add_with_carry};
pub use hex::HexEncoder;
pub use twos_complement::{decode, encode};
