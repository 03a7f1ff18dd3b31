extern crate nalgebra as na;

use na::DMatrix;
use crate::{Float,GradientDirection};
use super::kernel::Kernel;


pub struct SobelKernel {
    kernel: DMatrix<Float>
}

impl SobelKernel {

    pub fn new(direction: GradientDirection) -> SobelKernel {
        let horizontal = DMatrix::from_row_slice(3,3,&[
            -1.0, 0.0, 1.0,
            -2.0, 0.0, 2.0,
            -1.0, 0.0, 1.0]);
        let kernel = match direction {
            GradientDirection::HORIZONTAL => horizontal,
            GradientDirection::VERTICAL => horizontal.transpose()
        };
        SobelKernel { kernel }
    }

    pub fn horizontal() -> SobelKernel {
        SobelKernel::new(GradientDirection::HORIZONTAL)
    }

    pub fn vertical() -> SobelKernel {
        SobelKernel::new(GradientDirection::VERTICAL)
    }
}

impl Kernel for SobelKernel {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }
}
