//! Injected randomness for weapon wear and enemy selection.
//!
//! The core never reaches for a global RNG. Every operation that needs a roll
//! takes an [`RngSource`], so callers can plug in a seeded generator for
//! replays or a fixed source for tests.
//!
//! # Determinism
//!
//! [`PcgRng`] is deterministic: given the same seed, it produces the same
//! sequence of values.

/// Source of uniformly distributed integers.
pub trait RngSource {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Pick a uniformly distributed index in `0..len`.
    ///
    /// Returns `None` when `len` is zero.
    fn index(&mut self, len: usize) -> Option<usize> {
        let last = u32::try_from(len.checked_sub(1)?).unwrap_or(u32::MAX);
        Some(self.range(0, last) as usize)
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }

    fn index(&mut self, len: usize) -> Option<usize> {
        (**self).index(len)
    }
}

impl<R: RngSource + ?Sized> RngSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        (**self).range(min, max)
    }

    fn index(&mut self, len: usize) -> Option<usize> {
        (**self).index(len)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let output = Self::pcg_output(self.state);
        self.state = Self::pcg_step(self.state);
        output
    }
}

/// Source that always yields the same value.
///
/// `range` clamps the value into the requested bounds, which makes it handy
/// for pinning weapon wear in tests (`FixedRng(0)` means "never wears").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl RngSource for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
    }

    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.0.clamp(min, max)
    }
}
