//! Content hashing for floating-point value types.
//!
//! `f64` does not implement [`Hash`], so the data model hashes floats through
//! their IEEE-754 bit pattern. Negative zero is folded onto positive zero first
//! so that values comparing equal under `==` also hash equally.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::FloatValue;

/// Bit pattern used when hashing a float.
#[inline]
pub fn float_bits(value: FloatValue) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Feed a single float into a hasher.
#[inline]
pub fn hash_float<H: Hasher>(value: FloatValue, state: &mut H) {
    float_bits(value).hash(state);
}

/// Feed a slice of floats into a hasher, length-prefixed.
pub fn hash_floats<H: Hasher>(values: &[FloatValue], state: &mut H) {
    values.len().hash(state);
    for v in values {
        hash_float(*v, state);
    }
}

/// Types that can produce a stable digest of their full contents.
///
/// The digest is suitable as a memoization key: two values that are equal
/// field-by-field always yield the same digest within one build.
pub trait ContentHash: Hash {
    fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl<T: Hash> ContentHash for T {}
