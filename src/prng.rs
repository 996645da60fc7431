//! PCG32 pseudorandom number generator (PCG-XSH-RR) and the
//! `RandomSource` seam the generators draw from.
//!
//! A given (seed, stream) pair always yields the same environments.

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Source of uniform 32-bit draws.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }

    /// Uniform integer in `[lo, hi]`.
    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.below(hi - lo + 1)
    }

    /// Uniform element of a non-empty slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.below(items.len() as u32) as usize]
    }

    /// Fisher-Yates, walking down from the end.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pcg32 {
    state: u64,
    inc: u64,
}

impl Pcg32 {
    pub fn new(seed: u64, seq: u64) -> Self {
        let inc = (seq << 1) | 1;
        let mut rng = Pcg32 { state: 0, inc };
        rng.advance();
        rng.state = rng.state.wrapping_add(seed);
        rng.advance();
        rng
    }

    fn advance(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.inc);
    }
}

impl RandomSource for Pcg32 {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.advance();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        (xorshifted >> rot) | (xorshifted << (rot.wrapping_neg() & 31))
    }
}

/// Replays a fixed list of draws, then zeros.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    values: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_u32(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        let mut rng = Pcg32::new(42, 54);
        let expected: [u32; 5] = [
            0xa15c02b7, 0x7b47f409, 0xba1d3330, 0x83d2f293,
            0xbfa4784b,
        ];
        for exp in expected {
            assert_eq!(rng.next_u32(), exp);
        }
    }

    #[test]
    fn int_range() {
        let mut rng = Pcg32::new(1, 0);
        for _ in 0..1000 {
            let v = rng.range(3, 7);
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = Pcg32::new(9, 0);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn scripted_replays_then_zeros() {
        let mut rng = Scripted::new(&[5, 7]);
        assert_eq!(rng.below(3), 2);
        assert_eq!(rng.next_u32(), 7);
        assert_eq!(rng.next_u32(), 0);
    }
}
