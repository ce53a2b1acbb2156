//! Random pairing of confirmed players into duplas.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::DrawError;

/// Shuffle `players` and pair them off in shuffle order. An odd player
/// count leaves the last group with a single member.
///
/// The random source is injected so a draw can be replayed exactly;
/// [`draw_teams_seeded`] is the seed-based convenience.
pub fn draw_teams(
    players: &[String],
    rng: &mut impl Rng,
) -> Result<Vec<Vec<String>>, DrawError> {
    if players.len() < 2 {
        return Err(DrawError::InsufficientPlayers { found: players.len() });
    }

    // Fisher-Yates, last index down to 1.
    let mut shuffled = players.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }

    Ok(shuffled.chunks(2).map(|pair| pair.to_vec()).collect())
}

/// Deterministic draw: same seed, same teams.
pub fn draw_teams_seeded(players: &[String], seed: u64) -> Result<Vec<Vec<String>>, DrawError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    draw_teams(players, &mut rng)
}
