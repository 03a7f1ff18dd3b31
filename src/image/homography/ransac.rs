use log::{debug,info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Float,PanoramaError,Result};
use crate::image::features::Match;
use super::{Homography,compute_homography,count_inliers};

/// Correspondences needed to fix the eight free parameters.
pub const HOMOGRAPHY_SAMPLE_SIZE: usize = 4;

#[derive(Debug,Clone)]
pub struct RansacEstimate {
    pub homography: Homography,
    pub inliers: usize,
    pub iterations: usize,
    /// Best inlier count after each completed iteration.
    pub best_inlier_history: Vec<usize>
}

impl RansacEstimate {
    /// True when no sample produced a single inlier and the identity was returned.
    pub fn is_fallback(&self) -> bool {
        self.inliers == 0
    }
}

/**
 * Repeatedly shuffles the matches, fits a homography to the first four and keeps the model
 * with the most inliers. Returns as soon as a model has more than cutoff inliers.
 * Samples with a singular DLT system are skipped.
 */
pub fn ransac_homography<R: Rng + ?Sized>(matches: &[Match], thresh: Float, k: usize, cutoff: usize, rng: &mut R) -> Result<RansacEstimate> {
    if matches.len() < HOMOGRAPHY_SAMPLE_SIZE {
        return Err(PanoramaError::InsufficientMatches { found: matches.len(), needed: HOMOGRAPHY_SAMPLE_SIZE });
    }

    let mut shuffled = matches.to_vec();
    let mut best = 0;
    let mut best_homography = Homography::identity();
    let mut best_inlier_history = Vec::<usize>::with_capacity(k);

    for it in 0..k {
        shuffled.shuffle(rng);
        match compute_homography(&shuffled[..HOMOGRAPHY_SAMPLE_SIZE]) {
            Ok(candidate) => {
                let inliers = count_inliers(&candidate, matches, thresh);
                if inliers > best {
                    best = inliers;
                    best_homography = candidate;
                    if inliers > cutoff {
                        best_inlier_history.push(best);
                        info!("RANSAC exited after {} iterations with {} of {} inliers", it+1, best, matches.len());
                        return Ok(RansacEstimate { homography: best_homography, inliers: best, iterations: it+1, best_inlier_history });
                    }
                }
            },
            Err(e) => debug!("skipping RANSAC sample: {}", e)
        };
        best_inlier_history.push(best);
    }

    info!("Best inlier count for homography was {} out of {} matches", best, matches.len());
    Ok(RansacEstimate { homography: best_homography, inliers: best, iterations: k, best_inlier_history })
}
