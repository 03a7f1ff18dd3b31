extern crate nalgebra as na;

use na::{DMatrix,DVector,Matrix3,Vector3};
use crate::{Float,PanoramaError,Result};
use crate::image::features::{Match,geometry::point::Point};

pub mod ransac;
pub mod ransac_parameters;

pub use self::ransac::{ransac_homography, RansacEstimate, HOMOGRAPHY_SAMPLE_SIZE};
pub use self::ransac_parameters::RansacParameters;

/// Homographies with a smaller absolute determinant are treated as degenerate.
pub const DEGENERATE_DETERMINANT: Float = 1e-12;
/// Relative singular value below which the DLT system is considered rank deficient.
pub const DLT_RANK_EPS: Float = 1e-10;

/// Projective map from coordinates of the first image to coordinates of the second.
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Homography {
    matrix: Matrix3<Float>
}

impl Homography {
    pub fn new(matrix: Matrix3<Float>) -> Homography {
        Homography { matrix }
    }

    pub fn identity() -> Homography {
        Homography::new(Matrix3::identity())
    }

    pub fn translation(dx: Float, dy: Float) -> Homography {
        Homography::new(Matrix3::new(1.0, 0.0, dx,
                                     0.0, 1.0, dy,
                                     0.0, 0.0, 1.0))
    }

    pub fn matrix(&self) -> &Matrix3<Float> {
        &self.matrix
    }

    pub fn is_degenerate(&self) -> bool {
        let det = self.matrix.determinant();
        !det.is_finite() || det.abs() < DEGENERATE_DETERMINANT
    }

    pub fn inverse(&self) -> Result<Homography> {
        if self.is_degenerate() {
            return Err(PanoramaError::SingularSystem);
        }
        self.matrix.try_inverse().map(Homography::new).ok_or(PanoramaError::SingularSystem)
    }

    pub fn project(&self, p: &Point<Float>) -> Point<Float> {
        project_point(self, p)
    }
}

/**
 * Maps p through h in homogeneous coordinates.
 * A zero homogeneous divisor yields the origin instead of failing.
 */
pub fn project_point(h: &Homography, p: &Point<Float>) -> Point<Float> {
    let projected = h.matrix * Vector3::new(p.x, p.y, 1.0);
    let w = projected[2];
    match w {
        w if w == 0.0 => Point::origin(),
        w => Point::new(projected[0]/w, projected[1]/w)
    }
}

/// Euclidean distance in pixels.
pub fn point_distance(p: &Point<Float>, q: &Point<Float>) -> Float {
    p.distance(q)
}

fn is_inlier(h: &Homography, m: &Match, thresh: Float) -> bool {
    point_distance(&project_point(h, &m.p), &m.q) < thresh
}

pub fn count_inliers(h: &Homography, matches: &[Match], thresh: Float) -> usize {
    matches.iter().filter(|m| is_inlier(h, m, thresh)).count()
}

/// Counts inliers and moves them to the front of the slice, preserving their relative order.
pub fn model_inliers(h: &Homography, matches: &mut [Match], thresh: Float) -> usize {
    let mut count = 0;
    for i in 0..matches.len() {
        if is_inlier(h, &matches[i], thresh) {
            matches.swap(i, count);
            count += 1;
        }
    }
    count
}

/**
 * Direct linear transform with h33 fixed to one. Each correspondence contributes two rows
 * to a 2n x 8 system which is solved in the least squares sense.
 */
#[allow(non_snake_case)]
pub fn compute_homography(matches: &[Match]) -> Result<Homography> {
    let n = matches.len();
    if n < HOMOGRAPHY_SAMPLE_SIZE {
        return Err(PanoramaError::InsufficientMatches { found: n, needed: HOMOGRAPHY_SAMPLE_SIZE });
    }

    let mut M = DMatrix::<Float>::zeros(2*n, 8);
    let mut b = DVector::<Float>::zeros(2*n);
    for (i, m) in matches.iter().enumerate() {
        let (x, y) = (m.p.x, m.p.y);
        let (xp, yp) = (m.q.x, m.q.y);

        M[(2*i,0)] = x;
        M[(2*i,1)] = y;
        M[(2*i,2)] = 1.0;
        M[(2*i,6)] = -x*xp;
        M[(2*i,7)] = -y*xp;
        b[2*i] = xp;

        M[(2*i+1,3)] = x;
        M[(2*i+1,4)] = y;
        M[(2*i+1,5)] = 1.0;
        M[(2*i+1,6)] = -x*yp;
        M[(2*i+1,7)] = -y*yp;
        b[2*i+1] = yp;
    }

    let svd = M.svd(true, true);
    let largest = svd.singular_values.max();
    let smallest = svd.singular_values.min();
    if !(largest > 0.0) || smallest <= largest*DLT_RANK_EPS {
        return Err(PanoramaError::SingularSystem);
    }
    let a = svd.solve(&b, 0.0).map_err(|_| PanoramaError::SingularSystem)?;
    if a.iter().any(|v| !v.is_finite()) {
        return Err(PanoramaError::SingularSystem);
    }

    let H = Matrix3::new(a[0], a[1], a[2],
                         a[3], a[4], a[5],
                         a[6], a[7], 1.0);
    Ok(Homography::new(H))
}
