extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;

pub trait Kernel {
    // Filter weights, rows along y and columns along x
    fn kernel(&self) -> &DMatrix<Float>;
    // Half of the width of the kernel save the center element
    fn radius_x(&self) -> usize {
        self.kernel().ncols()/2
    }
    fn radius_y(&self) -> usize {
        self.kernel().nrows()/2
    }
}
