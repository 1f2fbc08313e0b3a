use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Source of the random choices made for each claimant.
///
/// The generator never touches an rng directly so tests can script
/// exactly which branch each claimant takes.
pub trait AllocationDraws {
    /// Number of distinct reward tokens, in `1..=max_types`
    fn types_count(&mut self, max_types: u8) -> u8;

    /// Which pool a single-token claimant draws from, in `0..tokens`
    fn token(&mut self, tokens: usize) -> usize;

    /// Amount of one token, in `1..=max_amount`
    fn amount(&mut self, max_amount: u64) -> u64;
}

/// Uniform draws from any `rand` rng.
pub struct RngDraws<R> {
    rng: R,
    amounts: Option<(u64, Uniform<u64>)>,
}

impl<R: Rng> RngDraws<R> {
    pub fn new(rng: R) -> RngDraws<R> {
        RngDraws { rng, amounts: None }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> AllocationDraws for RngDraws<R> {
    fn types_count(&mut self, max_types: u8) -> u8 {
        self.rng.gen_range(1..=max_types)
    }

    fn token(&mut self, tokens: usize) -> usize {
        self.rng.gen_range(0..tokens)
    }

    fn amount(&mut self, max_amount: u64) -> u64 {
        // Bound is fixed for a run, so build the sampler once
        let distribution = match self.amounts {
            Some((bound, distribution)) if bound == max_amount => {
                distribution
            }
            _ => {
                let distribution =
                    Uniform::new_inclusive(1, max_amount);
                self.amounts = Some((max_amount, distribution));
                distribution
            }
        };
        distribution.sample(&mut self.rng)
    }
}
