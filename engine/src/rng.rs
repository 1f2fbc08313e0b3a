//! Non-cryptographically secure fast rng based on xxhash
use rand::{RngCore, SeedableRng};
use xxhash_rust::{
    const_xxh3::{self, const_custom_default_secret},
    xxh3::xxh3_64_with_secret,
};

const UNSAFE_SECRET_SEED: u64 = u64::from_le_bytes(*b"xUNSAFEx");
const UNSAFE_SECRET: [u8; 192] =
    const_custom_default_secret(UNSAFE_SECRET_SEED);

/// Seeded rng whose state is repeatedly hashed with xxh3. The same seed
/// always produces the same stream, which is what makes a fixture
/// reproducible from its logged seed.
#[derive(Clone, Debug)]
pub struct FastxxHashRng {
    state: u64,
}

impl FastxxHashRng {
    pub const fn new(seed: u64) -> FastxxHashRng {
        FastxxHashRng {
            state: const_xxh3::xxh3_64_with_secret(
                &seed.to_le_bytes(),
                &UNSAFE_SECRET,
            ),
        }
    }

    #[inline(always)]
    fn advance(&mut self) -> u64 {
        let old_state = self.state;
        self.state =
            xxh3_64_with_secret(&old_state.to_le_bytes(), &UNSAFE_SECRET);

        // Very rare fixed point, nudge out of it
        if old_state == self.state {
            log::warn!("xxhash rng hit a fixed point, rotating state");
            self.state = self.state.rotate_right(32);
        }

        self.state
    }
}

impl RngCore for FastxxHashRng {
    fn next_u32(&mut self) -> u32 {
        // Take lower bits
        self.advance() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.advance()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // Each u64 supplies at most 8 bytes
        for chunk in dest.chunks_mut(8) {
            let bytes = self.advance().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(
        &mut self,
        dest: &mut [u8],
    ) -> Result<(), rand::Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}

impl SeedableRng for FastxxHashRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> FastxxHashRng {
        FastxxHashRng::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> FastxxHashRng {
        FastxxHashRng::new(seed)
    }
}
