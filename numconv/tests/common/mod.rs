// Shared helpers for integration tests; not every test crate uses all of them.
#![allow(dead_code)]

pub mod fixtures;
