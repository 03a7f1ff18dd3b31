use crate::image::Image;
use crate::{Float,GradientDirection};
use self::{kernel::Kernel,gauss_kernel::GaussKernel1D};

pub mod gauss_kernel;
pub mod sobel_kernel;
pub mod kernel;


/**
 * Correlates every channel with the kernel, clamping samples at the border.
 * With preserve the channel count is kept, otherwise all channels are summed into one.
 */
pub fn convolve_image(source: &Image, filter_kernel: &dyn Kernel, preserve: bool) -> Image {
    let kernel = filter_kernel.kernel();
    let radius_x = filter_kernel.radius_x() as isize;
    let radius_y = filter_kernel.radius_y() as isize;

    let width = source.width();
    let height = source.height();
    let target_channels = match preserve {
        true => source.channels(),
        false => 1
    };
    let mut target = Image::empty(width, height, target_channels, source.original_encoding);

    for c in 0..source.channels() {
        let target_c = match preserve {
            true => c,
            false => 0
        };
        for y in 0..height as isize {
            for x in 0..width as isize {
                let mut acc: Float = 0.0;
                for ky in 0..kernel.nrows() as isize {
                    for kx in 0..kernel.ncols() as isize {
                        let sample = source.get_pixel(x + kx - radius_x, y + ky - radius_y, c);
                        acc += sample*kernel[(ky as usize, kx as usize)];
                    }
                }
                let previous = match preserve {
                    true => 0.0,
                    false => target.get_pixel(x, y, target_c)
                };
                target.set_pixel(x, y, target_c, previous + acc);
            }
        }
    }

    target
}

/// Separable gaussian blur, rows first then columns. Channels are preserved.
pub fn smooth_image(source: &Image, sigma: Float) -> Image {
    let row_kernel = GaussKernel1D::new(sigma, GradientDirection::HORIZONTAL);
    let column_kernel = GaussKernel1D::new(sigma, GradientDirection::VERTICAL);
    let intermediate = convolve_image(source, &row_kernel, true);
    convolve_image(&intermediate, &column_kernel, true)
}
