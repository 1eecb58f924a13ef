//! Seedable random choice of canned questions.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tokio::sync::Mutex;

/// Uniform picker over a shared RNG.
///
/// With a seed the sequence of picks is reproducible, which the tests and
/// `INTERVIEW_SEED` rely on.
#[derive(Debug)]
pub struct QuestionPicker {
    rng: Mutex<StdRng>,
}

impl QuestionPicker {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Uniformly chosen element, `None` for an empty slice.
    pub async fn pick<T: Clone>(&self, options: &[T]) -> Option<T> {
        let mut rng = self.rng.lock().await;
        options.choose(&mut *rng).cloned()
    }
}
