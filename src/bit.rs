use std::fmt;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::{GeneratorError, Result};

/// A single generated value, either 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitValue {
    Zero,
    One,
}

impl BitValue {
    /// Returns the numeric value of this bit.
    pub fn as_u8(self) -> u8 {
        match self {
            BitValue::Zero => 0,
            BitValue::One => 1,
        }
    }

    pub fn is_zero(self) -> bool {
        self == BitValue::Zero
    }
}

impl From<bool> for BitValue {
    fn from(value: bool) -> Self {
        if value {
            BitValue::One
        } else {
            BitValue::Zero
        }
    }
}

impl TryFrom<u8> for BitValue {
    type Error = GeneratorError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BitValue::Zero),
            1 => Ok(BitValue::One),
            other => Err(GeneratorError::InvalidBit(other)),
        }
    }
}

impl fmt::Display for BitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Produces one value in {0, 1} per call.
pub trait BitSource {
    /// Draws the next bit, uniformly distributed.
    fn next_bit(&mut self) -> BitValue;
}

/// A [`BitSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngBitSource<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RngBitSource<R> {
    /// Wraps an existing generator.
    ///
    /// # Arguments
    /// * `rng` - The generator to draw bits from.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngBitSource<StdRng> {
    /// Creates a source seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates a reproducible source.
    ///
    /// # Arguments
    /// * `seed` - The seed for the underlying generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BitSource for RngBitSource<R> {
    fn next_bit(&mut self) -> BitValue {
        BitValue::from(self.rng.random::<bool>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_rejects_values_other_than_zero_and_one() {
        assert_eq!(BitValue::try_from(0), Ok(BitValue::Zero));
        assert_eq!(BitValue::try_from(1), Ok(BitValue::One));
        assert_eq!(BitValue::try_from(2), Err(GeneratorError::InvalidBit(2)));
    }

    #[test]
    fn display_prints_the_digit() {
        assert_eq!(BitValue::Zero.to_string(), "0");
        assert_eq!(BitValue::One.to_string(), "1");
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = RngBitSource::seeded(42);
        let mut b = RngBitSource::seeded(42);

        let xs: Vec<_> = (0..64).map(|_| a.next_bit()).collect();
        let ys: Vec<_> = (0..64).map(|_| b.next_bit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn source_produces_both_values() {
        let mut source = RngBitSource::seeded(7);
        let bits: Vec<_> = (0..1000).map(|_| source.next_bit()).collect();

        let zeros = bits.iter().filter(|b| b.is_zero()).count();
        assert!(zeros > 400 && zeros < 600, "zeros = {zeros}");
    }
}
