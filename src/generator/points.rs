use rand::Rng;
use tracing::debug;

use super::config::GeneratorConfig;
use super::error::GeneratorError;
use crate::domain::{Coord, Point};

/// Monotone id source, threaded through generation instead of a global
/// counter
#[derive(Debug, Default)]
pub struct IdSequence(u64);

impl IdSequence {
    /// Create a sequence whose first id is 1
    pub fn new() -> Self {
        Self(0)
    }

    /// Take the next id
    pub fn next_id(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Generate the flattened point sequence for all clusters
///
/// Each cluster draws a center uniformly from the configured bounds and
/// between 1 and `max_per_cluster + 1` points jittered by `[0, radius)` per
/// axis. Ids are assigned in generation order, starting at 1.
pub fn generate_points<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GeneratorConfig,
) -> Result<Vec<Point>, GeneratorError> {
    config.validate()?;

    let mut ids = IdSequence::new();
    let mut points = Vec::new();
    for _ in 0..config.num_clusters {
        let cx = rng.random_range(config.bounds.min_x..config.bounds.max_x);
        let cy = rng.random_range(config.bounds.min_y..config.bounds.max_y);
        let count = rng.random_range(0..=config.max_per_cluster) + 1;
        debug!(cx, cy, count, "sampled cluster");

        for _ in 0..count {
            let id = ids.next_id();
            let x = Coord::from_degrees(cx + rng.random::<f64>() * config.cluster_radius)?;
            let y = Coord::from_degrees(cy + rng.random::<f64>() * config.cluster_radius)?;
            points.push(Point::new(id, x, y));
        }
    }
    Ok(points)
}
