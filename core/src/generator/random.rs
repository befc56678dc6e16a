use super::*;

/// Lights every cell independently with the configured chance. Nothing guarantees the result is solvable or that
/// anything starts lit at all.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        if let Err(err) = config.validate() {
            log::warn!("Generating from invalid config {:?}: {}", config, err);
        }

        let rows = config.rows.max(1);
        let cols = config.cols.max(1);
        let chance = if config.chance_light_starts_on.is_nan() {
            0.0
        } else {
            config.chance_light_starts_on.clamp(0.0, 1.0)
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let shape = (usize::from(rows), usize::from(cols));
        let lights = Array2::from_shape_fn(shape, |_| rng.random_bool(chance));
        let board = Board { lights };

        log::debug!(
            "Generated {}x{} board with {} lit cells (seed: {})",
            rows,
            cols,
            board.lit_count(),
            self.seed
        );
        board
    }
}
