use defmt::debug;
use game_engine::RandomSource;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Seed used until the first game starts.
const BOOT_SEED: u64 = 0x5173_0b5e_55ed_c0de;

pub struct PrngSource {
    rng: SmallRng,
}

impl PrngSource {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::seed_from_u64(BOOT_SEED),
        }
    }
}

impl RandomSource for PrngSource {
    fn next_in_range(&mut self, upper: u8) -> u8 {
        self.rng.random_range(0..upper)
    }

    fn reseed(&mut self, entropy: u64) {
        debug!("Reseeding with {}", entropy);
        self.rng = SmallRng::seed_from_u64(entropy);
    }
}
