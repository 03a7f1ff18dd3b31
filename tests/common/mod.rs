#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand::rngs::SmallRng;

use panorama::Float;
use panorama::image::Image;
use panorama::image::features::{Match, geometry::point::Point};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Square blocks of random intensity, giving distinct corners at every block vertex.
pub fn block_texture(width: usize, height: usize, block: usize, channels: usize, seed: u64) -> Image {
    let mut rng = SmallRng::seed_from_u64(seed);
    let blocks_x = width/block + 1;
    let blocks_y = height/block + 1;
    let intensities = (0..blocks_x*blocks_y*channels).map(|_| rng.gen::<Float>()).collect::<Vec<Float>>();
    Image::from_fn(width, height, channels, |x,y,c| intensities[(c*blocks_y + y/block)*blocks_x + x/block])
}

pub fn crop(image: &Image, x0: usize, y0: usize, width: usize, height: usize) -> Image {
    Image::from_fn(width, height, image.channels(), |x,y,c| image.get_pixel((x0 + x) as isize, (y0 + y) as isize, c))
}

pub fn random_image(width: usize, height: usize, channels: usize, seed: u64) -> Image {
    let mut rng = SmallRng::seed_from_u64(seed);
    let values = (0..width*height*channels).map(|_| rng.gen::<Float>()).collect::<Vec<Float>>();
    Image::from_fn(width, height, channels, |x,y,c| values[(c*height + y)*width + x])
}

pub fn make_match(p: (Float, Float), q: (Float, Float), index: usize) -> Match {
    Match { p: Point::new(p.0, p.1), q: Point::new(q.0, q.1), ai: index, bi: index, distance: 0.0 }
}

/// Correspondences under a pure translation followed by random outliers.
pub fn translated_matches(inliers: usize, outliers: usize, dx: Float, dy: Float, seed: u64) -> Vec<Match> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..inliers+outliers).map(|i| {
        let p = (rng.gen::<Float>()*200.0, rng.gen::<Float>()*200.0);
        let q = match i < inliers {
            true => (p.0 + dx, p.1 + dy),
            false => (rng.gen::<Float>()*200.0, rng.gen::<Float>()*200.0)
        };
        make_match(p, q, i)
    }).collect()
}
