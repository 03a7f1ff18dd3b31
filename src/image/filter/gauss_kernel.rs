extern crate nalgebra as na;

use na::DMatrix;
use crate::{Float,float,GradientDirection};
use float::consts::PI;
use super::kernel::Kernel;


pub struct GaussKernel1D {
    kernel: DMatrix<Float>
}

impl GaussKernel1D {
    fn sample(mean: Float, std: Float, x:Float) -> Float {
        let exponent = (-0.5*((x-mean)/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    /// Covers three standard deviations on either side and sums to one.
    pub fn new(std: Float, direction: GradientDirection) -> GaussKernel1D {
        assert!(std > 0.0, "gaussian std must be positive, got {}", std);
        let radius = (3.0*std).ceil() as isize;
        let size = (2*radius + 1) as usize;
        let samples = (-radius..radius+1).map(|x| GaussKernel1D::sample(0.0,std,x as Float)).collect::<Vec<Float>>();
        let total: Float = samples.iter().sum();
        let normalized = samples.iter().map(|s| s/total).collect::<Vec<Float>>();
        let kernel = match direction {
            GradientDirection::HORIZONTAL => DMatrix::from_vec(1,size,normalized),
            GradientDirection::VERTICAL => DMatrix::from_vec(size,1,normalized)
        };
        GaussKernel1D { kernel }
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }
}
