use serde::{Deserialize, Serialize};

use crate::parameters::ADDRESS_HEX_WIDTH;

/// Address of the claimant generated at `index`.
///
/// The address is `index + 1` in decimal, zero padded to the full
/// address width, e.g. index 0 is `0x000...0001` and index 99 is
/// `0x000...0100`. A `u64` has at most 20 decimal digits so every index
/// fits.
pub fn claimant_address(index: u64) -> String {
    let ordinal = u128::from(index) + 1;
    format!("0x{ordinal:0>width$}", width = ADDRESS_HEX_WIDTH)
}

/// One claimant's leaf in the Merkle input.
///
/// Field names are the positional keys the harness reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantRecord {
    #[serde(rename = "0")]
    pub claimant: String,
    #[serde(rename = "1")]
    pub category: String,
    #[serde(rename = "2")]
    pub tokens: Vec<String>,
    #[serde(rename = "3")]
    pub amounts: Vec<u64>,
    #[serde(rename = "4")]
    pub trailing: String,
}

impl ClaimantRecord {
    /// Amount allocated to `token` by this record, if any.
    pub fn amount_of(&self, token: &str) -> Option<u64> {
        self.tokens
            .iter()
            .zip(&self.amounts)
            .find_map(|(t, amount)| (t == token).then_some(*amount))
    }

    pub fn token_types(&self) -> usize {
        self.tokens.len()
    }
}
