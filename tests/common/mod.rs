#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockDestination;

use rand::distr::{Alphanumeric, SampleString};

/// Random alphanumeric text, free of anything a quoter reacts to.
pub fn random_plain_text(len: usize) -> String {
    Alphanumeric.sample_string(&mut rand::rng(), len)
}
