//! Case Construction
//!
//! Builds one random document from a profile.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::profile::{GenProfile, QueryMode};
use crate::parser::{BodyRecord, Document, TrailerRecord};

/// Seeded RNG when a seed is given, entropy-seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw a single case. The profile is assumed to have passed
/// [`GenProfile::validate`].
pub fn generate_case<R: Rng + ?Sized>(profile: &GenProfile, rng: &mut R) -> Document {
    let records = (0..profile.count)
        .map(|_| {
            BodyRecord::new(
                rng.gen_range(0..profile.coord_max),
                rng.gen_range(0..profile.coord_max),
                rng.gen_range(profile.min_len..=profile.max_len),
                rng.gen_range(profile.min_len..=profile.max_len),
            )
        })
        .collect();

    let trailer = match profile.query {
        QueryMode::Outside => {
            let far = profile.outside_coordinate();
            TrailerRecord { x: far, y: far }
        }
        QueryMode::Random => TrailerRecord {
            x: rng.gen_range(0..=profile.reach()),
            y: rng.gen_range(0..=profile.reach()),
        },
    };

    Document::new(records, trailer)
}
