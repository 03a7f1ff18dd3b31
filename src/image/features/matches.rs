use log::debug;
use serde::{Serialize, Deserialize};
use crate::Float;
use crate::image::features::descriptor::Descriptor;
use crate::image::features::geometry::point::Point;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Match {
    /// Corner in the first image
    pub p: Point<Float>,
    /// Corner in the second image
    pub q: Point<Float>,
    pub ai: usize,
    pub bi: usize,
    pub distance: Float
}

/// Sum of absolute differences.
pub fn l1_distance(a: &[Float], b: &[Float]) -> Float {
    assert_eq!(a.len(), b.len(), "descriptors of different length");
    a.iter().zip(b.iter()).map(|(x,y)| (x-y).abs()).sum()
}

/**
 * Pairs every descriptor of a with its closest descriptor of b, then accepts pairs
 * in order of increasing distance while skipping targets in b that are already taken.
 * A descriptor whose closest target was claimed by a better pair is dropped, not rematched.
 */
pub fn match_descriptors(a: &[Descriptor], b: &[Descriptor]) -> Vec<Match> {
    if b.is_empty() {
        return Vec::new();
    }

    let mut matches = a.iter().enumerate().map(|(ai, descriptor_a)| {
        let mut best = (0, Float::INFINITY);
        for (bi, descriptor_b) in b.iter().enumerate() {
            let distance = l1_distance(&descriptor_a.data, &descriptor_b.data);
            if distance < best.1 {
                best = (bi, distance);
            }
        }
        let (bi, distance) = best;
        Match { p: descriptor_a.point, q: b[bi].point, ai, bi, distance }
    }).collect::<Vec<Match>>();

    matches.sort_by(|x, y| x.distance.total_cmp(&y.distance));

    let mut seen = vec![false; b.len()];
    let mut count = 0;
    for i in 0..matches.len() {
        let bi = matches[i].bi;
        if !seen[bi] {
            seen[bi] = true;
            matches.swap(count, i);
            count += 1;
        }
    }
    matches.truncate(count);

    debug!("kept {} of {} tentative matches", count, a.len());
    matches
}
