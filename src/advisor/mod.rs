//! Advisory services behind the crop and disease forms
//!
//! Both services model a backend round-trip: a fixed, configurable latency
//! followed by a local selection over a static catalog. The latency always
//! runs to completion; a dropped request future simply never produces output.
//!
//! - `crops.rs` - form validation + water-availability recommendation filter
//! - `disease.rs` - image upload checks + simulated or remote classification

pub mod crops;
pub mod disease;

pub use crops::{select_recommendations, CropAdvisor, CropForm, FormError};
pub use disease::{AnalysisError, DiagnosisService, ImageUpload};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Random source shared by the request handlers; tests pin it with a seed.
pub type SharedRng = Arc<Mutex<StdRng>>;

pub fn shared_rng(rng: StdRng) -> SharedRng {
    Arc::new(Mutex::new(rng))
}

/// Uniform pick from a fixed list; `None` only for an empty list
pub fn pick_uniform<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pick_uniform_is_member() {
        let items = ["a", "b", "c", "d"];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = pick_uniform(&items, &mut rng).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_pick_uniform_empty() {
        let items: [u8; 0] = [];
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_uniform(&items, &mut rng).is_none());
    }

    #[test]
    fn test_same_seed_same_pick() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        let a = pick_uniform(&items, &mut StdRng::seed_from_u64(42));
        let b = pick_uniform(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
