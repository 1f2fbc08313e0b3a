//! Fixed parameters of the fixture. The Merkle harness expects exactly
//! these tokens and field values, so none of them are exposed as flags.

pub const USDC_ADDRESS: &str = "0x81C9A7B55A4df39A9B7B5F781ec0e53539694873";
pub const DAI_ADDRESS: &str = "0xDA10009cBd5D07dd0CeCc66161FC93D7c9000da1";

pub const USDC_SYMBOL: &str = "USDC";
pub const DAI_SYMBOL: &str = "DAI";

pub const USDC_SUPPLY: u64 = 10;
pub const DAI_SUPPLY: u64 = 20;

/// A claimant receives at most this many distinct reward tokens
pub const MAX_REWARD_TOKEN_TYPES: u8 = 2;

/// Amounts are drawn from `1..=MAX_REWARD_AMOUNT`
pub const MAX_REWARD_AMOUNT: u64 = 1000;

pub const CATEGORY_CODE: &str = "2";
pub const TRAILING_VALUE: &str = "10";

/// Solidity types of the five positional record fields
pub const RECORD_ABI_TYPES: [&str; 5] =
    ["address", "uint256", "address[]", "uint256[]", "uint256"];

/// Width of a claimant address after the `0x` prefix
pub const ADDRESS_HEX_WIDTH: usize = 40;

pub const DEFAULT_OUTPUT_PATH: &str =
    "test/utils/merkle/target/input2.json";
