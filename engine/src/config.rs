use merkle_fixture_common::{
    parameters::{
        CATEGORY_CODE, DAI_ADDRESS, DAI_SUPPLY, DAI_SYMBOL,
        MAX_REWARD_AMOUNT, MAX_REWARD_TOKEN_TYPES, TRAILING_VALUE,
        USDC_ADDRESS, USDC_SUPPLY, USDC_SYMBOL,
    },
    pool::TokenPool,
};

use crate::error::ConfigError;

/// Everything a generation run depends on besides its random draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Token A then token B. Two-token records list them in this order.
    pub pools: [TokenPool; 2],
    pub max_types: u8,
    pub max_amount: u64,
    pub category: String,
    pub trailing: String,
}

impl GeneratorConfig {
    /// Two pools with the given supplies; remaining fields use the
    /// fixture defaults.
    pub fn new(
        supply_a: u64,
        supply_b: u64,
        token_a: impl Into<String>,
        token_b: impl Into<String>,
        max_types: u8,
    ) -> GeneratorConfig {
        GeneratorConfig {
            pools: [
                TokenPool::new("A", token_a, supply_a),
                TokenPool::new("B", token_b, supply_b),
            ],
            max_types,
            max_amount: MAX_REWARD_AMOUNT,
            category: CATEGORY_CODE.to_string(),
            trailing: TRAILING_VALUE.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=2).contains(&self.max_types) {
            return Err(ConfigError::MaxTypesOutOfRange(self.max_types));
        }
        if self.max_amount == 0 {
            return Err(ConfigError::ZeroMaxAmount);
        }
        let [a, b] = &self.pools;
        if a.address == b.address {
            return Err(ConfigError::DuplicateToken(a.address.clone()));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// USDC and DAI pools as consumed by the Merkle distributor tests
    fn default() -> Self {
        GeneratorConfig {
            pools: [
                TokenPool::new(USDC_SYMBOL, USDC_ADDRESS, USDC_SUPPLY),
                TokenPool::new(DAI_SYMBOL, DAI_ADDRESS, DAI_SUPPLY),
            ],
            max_types: MAX_REWARD_TOKEN_TYPES,
            max_amount: MAX_REWARD_AMOUNT,
            category: CATEGORY_CODE.to_string(),
            trailing: TRAILING_VALUE.to_string(),
        }
    }
}
