//! Per-attempt setup: picks which zone pattern a difficulty plays with.

use super::types::{DifficultyConfig, FishingDifficulty};
use rand::Rng;

/// Roll the pattern index for `difficulty`.
pub fn roll_pattern_index<R: Rng>(difficulty: FishingDifficulty, rng: &mut R) -> usize {
    let count = difficulty.patterns().len();
    if count <= 1 {
        0
    } else {
        rng.gen_range(0..count)
    }
}

/// Roll a pattern and build the config for it. Returns the rolled index too.
pub fn generate_config<R: Rng>(
    difficulty: FishingDifficulty,
    rng: &mut R,
) -> (usize, DifficultyConfig) {
    let index = roll_pattern_index(difficulty, rng);
    (index, difficulty.config(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pattern_index_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for difficulty in FishingDifficulty::ALL {
            for _ in 0..50 {
                let index = roll_pattern_index(difficulty, &mut rng);
                assert!(index < difficulty.patterns().len());
            }
        }
    }

    #[test]
    fn test_every_pattern_gets_rolled() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut seen = [false; 2];
        for _ in 0..100 {
            seen[roll_pattern_index(FishingDifficulty::Novice, &mut rng)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_generate_config_matches_index() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (index, config) = generate_config(FishingDifficulty::Master, &mut rng);
        assert_eq!(config, FishingDifficulty::Master.config(index));
    }

    #[test]
    fn test_same_seed_same_pattern() {
        let a = generate_config(FishingDifficulty::Journeyman, &mut ChaCha8Rng::seed_from_u64(5));
        let b = generate_config(FishingDifficulty::Journeyman, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
