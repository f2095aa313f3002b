use chrono::{DateTime, Utc};
use itertools::Itertools;
use ncube_notation::{Face, Move};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::Cube;

/// Number of random moves per layer in a scramble.
pub const SCRAMBLE_MOVES_PER_LAYER: usize = 10;

const SCRAMBLE_FACES: [Face; 6] = [Face::F, Face::B, Face::R, Face::L, Face::U, Face::D];

/// Parameters that determine a scramble.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrambleParams {
    /// Time when the scramble was requested.
    pub time: DateTime<Utc>,
    /// Random seed.
    pub seed: String,
}

impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new() -> Self {
        let time = Utc::now();
        let seed = format!("{}_{}", time.to_rfc3339(), rand::rng().random::<u64>());
        Self { time, seed }
    }

    /// Returns scramble parameters that always produce the same scramble.
    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            time: DateTime::UNIX_EPOCH,
            seed: seed.into(),
        }
    }

    /// Returns the random number generator for the scramble.
    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let digest = sha2::Sha256::new()
            .chain_update(self.time.to_rfc3339().as_bytes())
            .chain_update(self.seed.len().to_le_bytes())
            .chain_update(self.seed.as_bytes())
            .finalize();
        let mut seed = [0_u8; 32];
        seed.copy_from_slice(&digest);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }

    /// Generates the random moves of a scramble for a cube with `layers`
    /// layers.
    pub fn moves(&self, layers: usize) -> Vec<Move> {
        let mut rng = self.rng();
        (0..SCRAMBLE_MOVES_PER_LAYER * layers)
            .map(|_| {
                let face = SCRAMBLE_FACES[rng.random_range(0..SCRAMBLE_FACES.len())];
                let turns = rng.random_range(1..=3);
                let depth = rng.random_range(0..layers);
                Move::new(face, turns, depth)
            })
            .collect()
    }
}

impl Default for ScrambleParams {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// Scrambles the cube with a time-based seed. Returns the moves applied.
    pub fn scramble(&mut self) -> Vec<Move> {
        self.scramble_with(&ScrambleParams::new())
    }

    /// Scrambles the cube with the given parameters. Each move is recorded
    /// and animated. Returns the moves applied.
    pub fn scramble_with(&mut self, params: &ScrambleParams) -> Vec<Move> {
        let moves = params.moves(self.layers());
        for &m in &moves {
            self.do_move(m);
        }
        log::info!(
            "scrambled with seed {:?}: {}",
            params.seed,
            moves.iter().join(" "),
        );
        moves
    }
}
