use std::fmt;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::image::features::HarrisParameters;
use crate::image::homography::RansacParameters;

#[derive(Debug,Clone,Default,Serialize,Deserialize)]
#[serde(default)]
pub struct PanoramaParameters {
    pub harris: HarrisParameters,
    pub ransac: RansacParameters,
    /// Directory receiving response maps and the inlier drawing. Nothing is written when unset.
    pub debug_output: Option<PathBuf>
}

impl fmt::Display for PanoramaParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.harris, self.ransac)
    }
}
