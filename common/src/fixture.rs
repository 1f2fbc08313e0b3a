//! The document handed to the Merkle tree builder.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{claimant::ClaimantRecord, parameters::RECORD_ABI_TYPES};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleInput {
    pub types: Vec<String>,
    pub count: usize,
    /// Keyed by record index. Integer keys serialize as JSON strings and
    /// stay in numeric order.
    pub values: BTreeMap<u64, ClaimantRecord>,
}

impl MerkleInput {
    pub fn new(values: BTreeMap<u64, ClaimantRecord>) -> MerkleInput {
        MerkleInput {
            types: RECORD_ABI_TYPES.map(String::from).to_vec(),
            count: values.len(),
            values,
        }
    }
}
