//! Random sources for probabilistic brushes

/// Source of the random draws a brush makes while painting.
pub trait RandomSource {
    /// Uniform value in [0, 1).
    fn value(&mut self) -> f32;

    /// Uniform integer in `lo..hi`. Returns `lo` when the range is empty.
    fn range(&mut self, lo: usize, hi: usize) -> usize;
}

/// Small seeded PCG-style generator.
#[derive(Clone, Debug)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Advance state and return next u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut h = (self.state >> 32) as u32;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h = h.wrapping_mul(0x45d9f3b);
        h ^= h >> 16;
        h
    }
}

impl RandomSource for SimpleRng {
    fn value(&mut self) -> f32 {
        // 24 bits keeps the result strictly below 1.0 in f32
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    fn range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        lo + (self.next_u32() as usize) % (hi - lo)
    }
}

/// Deterministic source returning fixed draws, for replaying strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRandom {
    /// Returned by every `value()` call
    pub value: f32,
    /// Offset from `lo` returned by `range()`, clamped into the range
    pub pick: usize,
}

impl FixedRandom {
    pub fn new(value: f32) -> Self {
        Self { value, pick: 0 }
    }

    pub fn with_pick(mut self, pick: usize) -> Self {
        self.pick = pick;
        self
    }
}

impl RandomSource for FixedRandom {
    fn value(&mut self) -> f32 {
        self.value
    }

    fn range(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        (lo + self.pick).min(hi - 1)
    }
}
