use std::fmt;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Serialize, Deserialize};
use crate::Float;

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct RansacParameters {
    /// Max reprojection distance of an inlier in pixels.
    pub inlier_thresh: Float,
    pub iterations: usize,
    /// Inlier count above which the search stops early.
    pub cutoff: usize,
    pub seed: u64
}

impl RansacParameters {
    pub fn rng(&self) -> SmallRng {
        SmallRng::seed_from_u64(self.seed)
    }
}

impl Default for RansacParameters {
    fn default() -> RansacParameters {
        RansacParameters {
            inlier_thresh: 2.0,
            iterations: 10000,
            cutoff: 30,
            seed: 10
        }
    }
}

impl fmt::Display for RansacParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "inlier_thresh_{}_iterations_{}_cutoff_{}_seed_{}", self.inlier_thresh, self.iterations, self.cutoff, self.seed)
    }
}
