/// Finite supply of one reward token.
///
/// `remaining` is the number of claimants that can still receive this
/// token, `allocated` is the running sum of amounts handed out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPool {
    pub symbol: String,
    pub address: String,
    pub remaining: u64,
    pub allocated: u64,
}

impl TokenPool {
    pub fn new(
        symbol: impl Into<String>,
        address: impl Into<String>,
        supply: u64,
    ) -> TokenPool {
        TokenPool {
            symbol: symbol.into(),
            address: address.into(),
            remaining: supply,
            allocated: 0,
        }
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Hand out `amount` from this pool, consuming one unit of supply.
    ///
    /// Returns false (and leaves the pool untouched) if the pool is
    /// exhausted.
    pub fn take(&mut self, amount: u64) -> bool {
        let Some(remaining) = self.remaining.checked_sub(1) else {
            return false;
        };
        self.remaining = remaining;
        self.allocated += amount;
        true
    }
}
