use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Float;
use crate::image::GrayscaleWeights;

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct HarrisParameters {
    /// Std dev of the window summing the gradient products.
    pub sigma: Float,
    /// Requested threshold. Only logged, the detector always uses 1% of the maximum response.
    pub thresh: Float,
    /// Radius of the square non-max suppression window.
    pub nms: usize,
    pub grayscale_weights: GrayscaleWeights
}

impl Default for HarrisParameters {
    fn default() -> HarrisParameters {
        HarrisParameters {
            sigma: 2.0,
            thresh: 5.0,
            nms: 3,
            grayscale_weights: GrayscaleWeights::default()
        }
    }
}

impl fmt::Display for HarrisParameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sigma_{}_thresh_{}_nms_{}", self.sigma, self.thresh, self.nms)
    }
}
