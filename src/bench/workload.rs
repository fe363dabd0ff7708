//! Workload generation
//!
//! Two equally long sequences of pseudo-random `u32`s, filled one after the
//! other from the same generator stream (the second sequence continues where
//! the first stopped). Both are heap-owned and never mutated afterwards.

use rand::RngCore;

use crate::error::BenchError;

/// Generation phase, reported before each sequence is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenPhase {
    First,
    Second,
}

impl std::fmt::Display for GenPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenPhase::First => write!(f, "Prepare first array."),
            GenPhase::Second => write!(f, "Prepare second array."),
        }
    }
}

/// The pair of sequences shared read-only by every access strategy.
///
/// Invariant: both sequences have the same, non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    first: Vec<u32>,
    second: Vec<u32>,
}

impl Workload {
    /// Generate a workload of `size` elements per sequence.
    pub fn generate<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Result<Self, BenchError> {
        Self::generate_observed(size, rng, |_| Ok(()))
    }

    /// Like [`Workload::generate`], calling `on_phase` before each sequence
    /// is filled. An error from the callback aborts generation.
    pub fn generate_observed<R, F>(
        size: usize,
        rng: &mut R,
        mut on_phase: F,
    ) -> Result<Self, BenchError>
    where
        R: RngCore + ?Sized,
        F: FnMut(GenPhase) -> Result<(), BenchError>,
    {
        if size == 0 {
            return Err(BenchError::EmptyWorkload);
        }

        on_phase(GenPhase::First)?;
        let first = fill_sequence(size, rng);
        on_phase(GenPhase::Second)?;
        let second = fill_sequence(size, rng);

        tracing::debug!(size, "workload generated");
        Ok(Self { first, second })
    }

    /// Build a workload from existing sequences.
    pub fn from_sequences(first: Vec<u32>, second: Vec<u32>) -> Result<Self, BenchError> {
        if first.len() != second.len() {
            return Err(BenchError::LengthMismatch {
                first: first.len(),
                second: second.len(),
            });
        }
        if first.is_empty() {
            return Err(BenchError::EmptyWorkload);
        }
        Ok(Self { first, second })
    }

    /// Elements per sequence (never zero).
    #[inline]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Always false for a constructed workload.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &[u32] {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &[u32] {
        &self.second
    }
}

/// Shorthand for [`Workload::generate`].
pub fn generate_workload<R: RngCore + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<Workload, BenchError> {
    Workload::generate(size, rng)
}

fn fill_sequence<R: RngCore + ?Sized>(size: usize, rng: &mut R) -> Vec<u32> {
    (0..size).map(|_| rng.next_u32()).collect()
}
