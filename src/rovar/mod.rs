// SPDX-License-Identifier: AGPL-3.0-only

pub mod alphabet;
pub mod encoder;

pub use alphabet::{CONSONANTS, is_consonant};
pub use encoder::{Burst, expand};
