use std::collections::BTreeMap;

use log::debug;
use merkle_fixture_common::{
    claimant::{claimant_address, ClaimantRecord},
    fixture::MerkleInput,
    pool::TokenPool,
};

use crate::{
    config::GeneratorConfig, draws::AllocationDraws, error::FixtureResult,
};

/// Records produced by one run, plus the pools as they stood when the
/// run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    pub records: BTreeMap<u64, ClaimantRecord>,
    /// Claimant addresses in insertion order
    pub claimants: Vec<String>,
    /// `allocated` on each pool is the running total for that token
    pub pools: [TokenPool; 2],
}

impl GenerationResult {
    pub fn count(&self) -> usize {
        self.claimants.len()
    }

    pub fn total_allocated(&self, pool: usize) -> u64 {
        self.pools[pool].allocated
    }

    pub fn to_merkle_input(&self) -> MerkleInput {
        MerkleInput::new(self.records.clone())
    }
}

/// Allocate rewards to claimants until a draw asks for more than the
/// pools have left.
///
/// Each claimant first draws how many token types it receives. A single
/// type draws which pool to take from; two types take from both pools,
/// token A first. Every successful claimant consumes one unit of supply
/// from each pool it touches, so the run ends after at most the sum of
/// the initial supplies.
pub fn generate<D: AllocationDraws + ?Sized>(
    config: &GeneratorConfig,
    draws: &mut D,
) -> FixtureResult<GenerationResult> {
    config.validate()?;

    let mut pools = config.pools.clone();
    let mut records = BTreeMap::new();
    let mut claimants = Vec::new();

    for index in 0_u64.. {
        let claimant = claimant_address(index);

        // Number of token types to receive
        let types = draws.types_count(config.max_types);
        debug!("claimant {claimant}: {types} reward token type(s)");

        // max_types is validated, so anything but 1 takes both pools
        let allocation: Vec<(String, u64)> = if types == 1 {
            let pool = &mut pools[draws.token(config.pools.len())];
            if pool.is_exhausted() {
                debug!("{} pool exhausted, stopping", pool.symbol);
                break;
            }
            let amount = draws.amount(config.max_amount);
            pool.take(amount);
            vec![(pool.address.clone(), amount)]
        } else {
            if let Some(pool) = pools.iter().find(|p| p.is_exhausted()) {
                debug!("{} pool exhausted, stopping", pool.symbol);
                break;
            }
            pools
                .iter_mut()
                .map(|pool| {
                    let amount = draws.amount(config.max_amount);
                    pool.take(amount);
                    (pool.address.clone(), amount)
                })
                .collect()
        };

        let (tokens, amounts) = allocation.into_iter().unzip();
        records.insert(
            index,
            ClaimantRecord {
                claimant: claimant.clone(),
                category: config.category.clone(),
                tokens,
                amounts,
                trailing: config.trailing.clone(),
            },
        );
        claimants.push(claimant);
    }

    Ok(GenerationResult {
        records,
        claimants,
        pools,
    })
}
