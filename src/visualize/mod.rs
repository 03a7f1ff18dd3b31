use crate::Float;
use crate::image::Image;
use crate::image::features::{Descriptor,Match,HarrisParameters,detect_corners,match_descriptors,geometry::point::Point};
use crate::image::homography::{Homography,model_inliers};

/// Half length of the cross drawn over a corner.
const SPOT_RADIUS: isize = 9;

/// Draws a magenta cross. Channels the image does not have are skipped.
pub fn mark_spot(image: &mut Image, p: &Point<Float>) {
    let (x, y) = (p.x as isize, p.y as isize);
    for i in -SPOT_RADIUS..SPOT_RADIUS+1 {
        for (c, value) in [(0, 1.0), (1, 0.0), (2, 1.0)].iter() {
            image.set_pixel(x + i, y, *c, *value);
            image.set_pixel(x, y + i, *c, *value);
        }
    }
}

pub fn mark_corners(image: &mut Image, descriptors: &[Descriptor]) {
    for d in descriptors {
        mark_spot(image, &d.point);
    }
}

/// Places a and b next to each other on one canvas.
pub fn both_images(a: &Image, b: &Image) -> Image {
    let channels = a.channels().max(b.channels());
    let mut both = Image::empty(a.width() + b.width(), a.height().max(b.height()), channels, a.original_encoding);
    for c in 0..channels {
        for y in 0..a.height() as isize {
            for x in 0..a.width() as isize {
                both.set_pixel(x, y, c, a.get_pixel(x, y, c.min(a.channels()-1)));
            }
        }
        for y in 0..b.height() as isize {
            for x in 0..b.width() as isize {
                both.set_pixel(x + a.width() as isize, y, c, b.get_pixel(x, y, c.min(b.channels()-1)));
            }
        }
    }
    both
}

/// Connects every match with a line. The first `inliers` matches are green, the rest red.
pub fn draw_matches(a: &Image, b: &Image, matches: &[Match], inliers: usize) -> Image {
    let mut both = both_images(a, b);
    let offset = a.width() as Float;
    for (i, m) in matches.iter().enumerate() {
        let (red, green) = match i < inliers {
            true => (0.0, 1.0),
            false => (1.0, 0.0)
        };
        let (bx, by) = (m.p.x, m.p.y);
        let (ex, ey) = (m.q.x + offset, m.q.y);
        let span = ex - bx;
        let mut x = bx;
        while x < ex {
            let y = (x - bx)/span*(ey - by) + by;
            both.set_pixel(x as isize, y as isize, 0, red);
            both.set_pixel(x as isize, y as isize, 1, green);
            both.set_pixel(x as isize, y as isize, 2, 0.0);
            x += 1.0;
        }
    }
    both
}

/// Moves the inliers of h to the front of the matches and draws them in green.
pub fn draw_inliers(a: &Image, b: &Image, h: &Homography, matches: &mut [Match], thresh: Float) -> Image {
    let inliers = model_inliers(h, matches, thresh);
    draw_matches(a, b, matches, inliers)
}

pub fn detect_and_draw_corners(image: &mut Image, params: &HarrisParameters) {
    let detection = detect_corners(image, params);
    mark_corners(image, &detection.descriptors);
}

/// Detects and matches corners of a and b and draws the matches on marked copies.
pub fn find_and_draw_matches(a: &Image, b: &Image, params: &HarrisParameters) -> Image {
    let descriptors_a = detect_corners(a, params).descriptors;
    let descriptors_b = detect_corners(b, params).descriptors;
    let matches = match_descriptors(&descriptors_a, &descriptors_b);

    let mut marked_a = a.clone();
    let mut marked_b = b.clone();
    mark_corners(&mut marked_a, &descriptors_a);
    mark_corners(&mut marked_b, &descriptors_b);
    draw_matches(&marked_a, &marked_b, &matches, 0)
}
