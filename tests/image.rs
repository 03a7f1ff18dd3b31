extern crate nalgebra as na;

use na::DMatrix;
use panorama::{Float, GradientDirection};
use panorama::image::{Image, GrayscaleWeights, image_encoding::ImageEncoding};
use panorama::image::filter::{convolve_image, smooth_image, kernel::Kernel, gauss_kernel::GaussKernel1D, sobel_kernel::SobelKernel};
use panorama::io::{load_image, save_image};

struct BoxKernel {
    kernel: DMatrix<Float>
}

impl Kernel for BoxKernel {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }
}

#[test]
fn get_pixel_clamps_to_edge() {
    let image = Image::from_fn(4, 3, 2, |x,y,c| (c*100 + y*10 + x) as Float);

    assert_eq!(image.buffer().len(), 4*3*2);
    assert_eq!(image.get_pixel(-5, -5, 0), 0.0);
    assert_eq!(image.get_pixel(10, 1, 0), 13.0);
    assert_eq!(image.get_pixel(2, 10, 1), 122.0);
    assert_eq!(image.get_pixel(3, 2, 1), 123.0);
}

#[test]
fn set_pixel_out_of_range_is_ignored() {
    let mut image = Image::new(3, 3, 1);
    let before = image.clone();

    image.set_pixel(-1, 0, 0, 5.0);
    image.set_pixel(3, 0, 0, 5.0);
    image.set_pixel(0, 3, 0, 5.0);
    image.set_pixel(0, 0, 1, 5.0);
    assert_eq!(image, before);

    image.set_pixel(1, 2, 0, 5.0);
    assert_eq!(image.get_pixel(1, 2, 0), 5.0);
    assert_eq!(image.buffer().len(), 9);
}

#[test]
fn planar_layout_is_channel_major() {
    let image = Image::from_fn(2, 2, 2, |x,y,c| (c*4 + y*2 + x) as Float);
    assert_eq!(image.buffer(), &vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn with_channels_repeats_last_channel() {
    let image = Image::from_fn(2, 2, 2, |x,y,c| (c*4 + y*2 + x) as Float);

    let widened = image.with_channels(3);
    assert_eq!(widened.channels(), 3);
    assert_eq!(&widened.buffer()[8..], &[4.0, 5.0, 6.0, 7.0]);

    let narrowed = image.with_channels(1);
    assert_eq!(narrowed.buffer(), &vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(image.with_channels(2), image);
}

#[test]
#[should_panic]
fn zero_sized_image_panics() {
    Image::new(0, 4, 1);
}

#[test]
fn grayscale_uses_supplied_weights() {
    let image = Image::from_fn(2, 2, 3, |_,_,c| (c + 1) as Float);
    let weights = GrayscaleWeights { r: 0.5, g: 0.25, b: 0.0 };
    let gray = image.to_grayscale(&weights);

    assert_eq!(gray.channels(), 1);
    assert!((gray.get_pixel(1, 1, 0) - 1.0).abs() < 1e-12);

    let default_gray = image.to_grayscale(&GrayscaleWeights::default());
    assert!((default_gray.get_pixel(0, 0, 0) - (0.299 + 2.0*0.587 + 3.0*0.114)).abs() < 1e-12);
}

#[test]
fn bilinear_interpolation_blends_neighbours() {
    let image = Image::from_vec(2, 2, 1, vec![0.0, 1.0, 2.0, 3.0], ImageEncoding::F64);

    assert!((image.bilinear_interpolate(0.5, 0.5, 0) - 1.5).abs() < 1e-12);
    assert!((image.bilinear_interpolate(0.25, 0.0, 0) - 0.25).abs() < 1e-12);
    assert!((image.bilinear_interpolate(1.0, 1.0, 0) - 3.0).abs() < 1e-12);
}

#[test]
fn sobel_responds_to_horizontal_ramp() {
    let ramp = Image::from_fn(8, 8, 1, |x,_,_| x as Float);
    let x_gradient = convolve_image(&ramp, &SobelKernel::new(GradientDirection::HORIZONTAL), true);
    let y_gradient = convolve_image(&ramp, &SobelKernel::vertical(), true);

    assert!((x_gradient.get_pixel(4, 4, 0) - 8.0).abs() < 1e-12);
    assert!((x_gradient.get_pixel(0, 4, 0) - 4.0).abs() < 1e-12);
    assert!(y_gradient.buffer().iter().all(|v| v.abs() < 1e-12));
}

#[test]
fn collapsing_convolution_sums_channels() {
    let image = Image::from_fn(3, 3, 3, |_,_,c| (c + 1) as Float);
    let identity = BoxKernel { kernel: DMatrix::from_element(1, 1, 1.0) };

    let collapsed = convolve_image(&image, &identity, false);
    let preserved = convolve_image(&image, &identity, true);

    assert_eq!(collapsed.channels(), 1);
    assert!((collapsed.get_pixel(1, 1, 0) - 6.0).abs() < 1e-12);
    assert!(preserved.same_image(&image, 1e-12));
}

#[test]
fn gauss_kernel_is_normalized() {
    let row = GaussKernel1D::new(2.0, GradientDirection::HORIZONTAL);
    let column = GaussKernel1D::new(2.0, GradientDirection::VERTICAL);

    assert_eq!(row.kernel().ncols(), 13);
    assert_eq!(column.kernel().nrows(), 13);
    assert!((row.kernel().sum() - 1.0).abs() < 1e-12);
    assert!(row.kernel()[(0,6)] > row.kernel()[(0,5)]);
}

#[test]
fn smoothing_keeps_constant_image() {
    let image = Image::from_fn(10, 7, 3, |_,_,c| 0.2*(c as Float));
    let smoothed = smooth_image(&image, 1.5);
    assert!(smoothed.same_image(&image, 1e-12));
}

#[test]
fn png_round_trip() {
    let image = Image::from_fn(5, 4, 3, |x,y,c| ((x + y*5 + c*20) as Float)/255.0);
    let path = std::env::temp_dir().join("panorama_png_round_trip.png");

    save_image(&image, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.channels(), 3);
    assert!(loaded.same_image(&image, 1e-9));
}
