use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Input shapes used to exercise sorting algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pattern {
    RandomUniform,
    Ascending,
    Descending,
    OrganPipe,
    AllEqual,
    /// Three distinct values laid out in random-length runs.
    ThreeValueBlocks,
    /// Ascending with 1% of positions swapped at random.
    NearlySorted,
}

pub const ALL_PATTERNS: [Pattern; 7] = [
    Pattern::RandomUniform,
    Pattern::Ascending,
    Pattern::Descending,
    Pattern::OrganPipe,
    Pattern::AllEqual,
    Pattern::ThreeValueBlocks,
    Pattern::NearlySorted,
];

impl Pattern {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::OrganPipe => "organ_pipe",
            Self::AllEqual => "all_equal",
            Self::ThreeValueBlocks => "three_value_blocks",
            Self::NearlySorted => "nearly_sorted_1pct_swaps",
        }
    }

    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, len: usize) -> Vec<i32> {
        match self {
            Self::RandomUniform => (0..len).map(|_| rng.random::<i32>()).collect(),
            Self::Ascending => (0..len).map(|i| i as i32).collect(),
            Self::Descending => (0..len).rev().map(|i| i as i32).collect(),
            Self::OrganPipe => (0..len).map(|i| i.min(len - 1 - i) as i32).collect(),
            Self::AllEqual => vec![66; len],
            Self::ThreeValueBlocks => {
                let max_run = (len / 16).max(1);
                let mut data = Vec::with_capacity(len);
                while data.len() < len {
                    let value = rng.random_range(0..3);
                    let run = rng.random_range(1..=max_run).min(len - data.len());
                    data.extend(std::iter::repeat_n(value, run));
                }
                data
            }
            Self::NearlySorted => {
                let mut data: Vec<i32> = (0..len).map(|i| i as i32).collect();
                if len > 0 {
                    for _ in 0..(len / 100).max(1) {
                        let a = rng.random_range(0..len);
                        let b = rng.random_range(0..len);
                        data.swap(a, b);
                    }
                }
                data
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_have_requested_len() {
        let mut rng = default_rng();
        for pattern in ALL_PATTERNS {
            for len in [0, 1, 2, 17, 1000] {
                assert_eq!(pattern.generate(&mut rng, len).len(), len, "{}", pattern.label());
            }
        }
    }

    #[test]
    fn shaped_patterns() {
        let mut rng = default_rng();
        assert_eq!(Pattern::OrganPipe.generate(&mut rng, 7), vec![0, 1, 2, 3, 2, 1, 0]);
        assert_eq!(Pattern::Descending.generate(&mut rng, 4), vec![3, 2, 1, 0]);

        let blocks = Pattern::ThreeValueBlocks.generate(&mut rng, 5000);
        assert!(blocks.iter().all(|v| (0..3).contains(v)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = Pattern::RandomUniform.generate(&mut default_rng(), 64);
        let b = Pattern::RandomUniform.generate(&mut default_rng(), 64);
        assert_eq!(a, b);
    }
}
