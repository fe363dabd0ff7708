//! glibc-compatible `rand()` generator
//!
//! Bit-exact replica of glibc's default `random_r` (TYPE_3: additive
//! feedback, degree 31, separation 3) so a default run produces the same
//! workload, and therefore the same sequential checksums, as a C program
//! that calls `rand()` without ever calling `srand()`.
//!
//! # Algorithm
//!
//! ```text
//! r[0]  = seed
//! r[i]  = 16807 * r[i-1] mod (2^31 - 1)        for i in 1..31
//! r[i]  = r[i-31] + r[i-3]  (mod 2^32)          for i >= 31
//! out_k = r[k + 344] >> 1                       (first 310 outputs discarded)
//! ```
//!
//! # Example
//!
//! ```rust
//! use ram_speed_test::bench::glibc_random::GlibcRandom;
//!
//! let mut rng = GlibcRandom::new(1);
//! assert_eq!(rng.next_rand(), 1804289383);
//! ```

use rand::RngCore;

use crate::core_types::{DEFAULT_SEED, Seed};

/// Largest value `next_rand` can return (glibc `RAND_MAX`).
pub const RAND_MAX: u32 = 0x7FFF_FFFF;

/// Number of state words (TYPE_3).
const DEGREE: usize = 31;

/// glibc `rand()` replica.
///
/// `Clone` but not `Copy`: a copy duplicates the stream.
#[derive(Debug, Clone)]
pub struct GlibcRandom {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl GlibcRandom {
    /// Distance between the front and rear taps.
    const SEPARATION: usize = 3;

    /// Outputs thrown away after seeding, `10 * DEGREE`.
    const DISCARD: usize = 310;

    /// Park-Miller modulus, 2^31 - 1.
    const MODULUS: i64 = 2_147_483_647;

    /// Equivalent to `srand(seed)`.
    ///
    /// Seed 0 is mapped to 1, matching glibc.
    pub fn new(seed: Seed) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        let mut state = [0u32; DEGREE];
        state[0] = seed;

        // glibc keeps the word as int32_t, so seeds above i32::MAX go negative
        let mut word = seed as i32;
        for slot in state.iter_mut().skip(1) {
            // Schrage's method: 16807 * word mod (2^31 - 1) without overflow
            let hi = word as i64 / 127_773;
            let lo = word as i64 % 127_773;
            word = (16_807 * lo - 2_836 * hi) as i32;
            if word < 0 {
                word = (word as i64 + Self::MODULUS) as i32;
            }
            *slot = word as u32;
        }

        let mut rng = Self {
            state,
            front: Self::SEPARATION,
            rear: 0,
        };
        for _ in 0..Self::DISCARD {
            rng.step();
        }
        rng
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let sum = self.state[self.front].wrapping_add(self.state[self.rear]);
        self.state[self.front] = sum;

        self.front += 1;
        if self.front == DEGREE {
            self.front = 0;
        }
        self.rear += 1;
        if self.rear == DEGREE {
            self.rear = 0;
        }

        // Lowest bit is the least random one
        sum >> 1
    }

    /// Equivalent to `rand()`: a value in `[0, RAND_MAX]`.
    #[inline]
    pub fn next_rand(&mut self) -> u32 {
        self.step()
    }
}

impl Default for GlibcRandom {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Lets the harness accept any `RngCore`; this generator's native range is
/// 31 bits, exactly what `rand()` yields.
impl RngCore for GlibcRandom {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.next_rand()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_rand() as u64;
        let lo = self.next_rand() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_rand().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Derive an independent per-phase seed from the master seed.
///
/// Same 31-multiplier hash shape as a Java `hashCode` over `(phase, seed)`;
/// distinct phases give distinct seeds for the same master seed. Master
/// seeds 0 and 1 derive the same phase seeds, as they seed the same stream.
pub fn derive_phase_seed(master: Seed, phase: u32) -> Seed {
    let master = if master == 0 { 1 } else { master };
    let mut hash: u32 = 1;
    hash = 31_u32
        .wrapping_mul(hash)
        .wrapping_add(phase.wrapping_mul(0x9E37_79B9));
    hash = 31_u32
        .wrapping_mul(hash)
        .wrapping_add(master.wrapping_mul(10_037).wrapping_add(198_267));
    hash
}
