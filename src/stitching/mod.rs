use std::path::Path;
use log::{info,warn};

use crate::{Float,PanoramaError,Result};
use crate::image::Image;
use crate::image::features::{detect_corners,match_descriptors,HarrisDetection,Match,geometry::point::Point};
use crate::image::homography::{Homography,ransac_homography,HOMOGRAPHY_SAMPLE_SIZE};
use crate::io::save_image;
use crate::visualize::{draw_inliers,mark_corners};

pub mod panorama_parameters;

pub use self::panorama_parameters::PanoramaParameters;

/// Largest canvas side the compositor will allocate.
pub const MAX_CANVAS_DIMENSION: usize = 7000;

/**
 * Warps b into the frame of a and pastes it over a copy of a.
 * h maps coordinates of a to coordinates of b. Pixels covered by b take b's value.
 * The canvas has as many channels as the wider of both inputs; narrower inputs repeat their last channel.
 */
pub fn combine_images(a: &Image, b: &Image, h: &Homography) -> Result<Image> {
    let h_inv = h.inverse()?;

    let b_max_x = (b.width() - 1) as Float;
    let b_max_y = (b.height() - 1) as Float;
    let corners = [
        h_inv.project(&Point::new(0.0, 0.0)),
        h_inv.project(&Point::new(b_max_x, 0.0)),
        h_inv.project(&Point::new(0.0, b_max_y)),
        h_inv.project(&Point::new(b_max_x, b_max_y))
    ];

    if corners.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(PanoramaError::CanvasTooLarge { width: Float::INFINITY, height: Float::INFINITY });
    }

    let top_left = corners.iter().fold(Point::new(Float::INFINITY, Float::INFINITY), |acc, c| Point::new(acc.x.min(c.x), acc.y.min(c.y)));
    let bottom_right = corners.iter().fold(Point::new(Float::NEG_INFINITY, Float::NEG_INFINITY), |acc, c| Point::new(acc.x.max(c.x), acc.y.max(c.y)));

    let dx = top_left.x.min(0.0).floor();
    let dy = top_left.y.min(0.0).floor();
    let width = (bottom_right.x.max(a.width() as Float) - dx).ceil();
    let height = (bottom_right.y.max(a.height() as Float) - dy).ceil();

    if width > MAX_CANVAS_DIMENSION as Float || height > MAX_CANVAS_DIMENSION as Float {
        return Err(PanoramaError::CanvasTooLarge { width, height });
    }

    let channels = a.channels().max(b.channels());
    let mut canvas = Image::empty(width as usize, height as usize, channels, a.original_encoding);
    let (dx_px, dy_px) = (dx as isize, dy as isize);

    for c in 0..channels {
        let a_c = c.min(a.channels() - 1);
        for y in 0..a.height() as isize {
            for x in 0..a.width() as isize {
                canvas.set_pixel(x - dx_px, y - dy_px, c, a.get_pixel(x, y, a_c));
            }
        }
    }

    for j in 0..canvas.height() as isize {
        for i in 0..canvas.width() as isize {
            let pb = h.project(&Point::new((i + dx_px) as Float, (j + dy_px) as Float));
            if pb.x >= 0.0 && pb.x < b_max_x && pb.y >= 0.0 && pb.y < b_max_y {
                for c in 0..channels {
                    let value = b.bilinear_interpolate(pb.x, pb.y, c.min(b.channels() - 1));
                    canvas.set_pixel(i, j, c, value);
                }
            }
        }
    }

    Ok(canvas)
}

/// Like combine_images but falls back to an unmodified copy of a when stitching fails.
pub fn combine_images_or_base(a: &Image, b: &Image, h: &Homography) -> Image {
    match combine_images(a, b, h) {
        Ok(canvas) => canvas,
        Err(e) => {
            warn!("stitching aborted, returning base image: {}", e);
            a.clone()
        }
    }
}

/**
 * Detects and matches corners in both images, estimates the homography from a to b
 * with a seeded RANSAC and composites the result.
 * The narrower image is widened to the channel count of the other one for detection.
 * Failing to write the debug output is logged and does not stop the stitch.
 */
pub fn panorama_image(a: &Image, b: &Image, params: &PanoramaParameters) -> Result<Image> {
    info!("stitching {}x{} and {}x{} with {}", a.width(), a.height(), b.width(), b.height(), params);

    let channels = a.channels().max(b.channels());
    let detection_a = detect_corners(&a.with_channels(channels), &params.harris);
    let detection_b = detect_corners(&b.with_channels(channels), &params.harris);
    let matches = match_descriptors(&detection_a.descriptors, &detection_b.descriptors);
    if matches.len() < HOMOGRAPHY_SAMPLE_SIZE {
        return Err(PanoramaError::InsufficientMatches { found: matches.len(), needed: HOMOGRAPHY_SAMPLE_SIZE });
    }

    let mut rng = params.ransac.rng();
    let estimate = ransac_homography(&matches, params.ransac.inlier_thresh, params.ransac.iterations, params.ransac.cutoff, &mut rng)?;
    if estimate.is_fallback() {
        return Err(PanoramaError::InsufficientMatches { found: estimate.inliers, needed: HOMOGRAPHY_SAMPLE_SIZE });
    }

    if let Some(dir) = &params.debug_output {
        if let Err(e) = save_debug_artifacts(dir, a, b, &detection_a, &detection_b, matches, &estimate.homography, params.ransac.inlier_thresh) {
            warn!("could not write debug output to {}: {}", dir.display(), e);
        }
    }

    combine_images(a, b, &estimate.homography)
}

/// Like panorama_image but an oversized canvas degrades to a copy of a.
pub fn panorama_image_or_base(a: &Image, b: &Image, params: &PanoramaParameters) -> Result<Image> {
    match panorama_image(a, b, params) {
        Err(e @ PanoramaError::CanvasTooLarge { .. }) => {
            warn!("{}, returning base image", e);
            Ok(a.clone())
        },
        result => result
    }
}

fn save_debug_artifacts(dir: &Path, a: &Image, b: &Image, detection_a: &HarrisDetection, detection_b: &HarrisDetection, mut matches: Vec<Match>, h: &Homography, inlier_thresh: Float) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    save_image(&detection_a.thresholded_response.to_image(), &dir.join("a_cornerness_raw.png"))?;
    save_image(&detection_a.nms_response.to_image(), &dir.join("a_cornerness_nms.png"))?;
    save_image(&detection_b.thresholded_response.to_image(), &dir.join("b_cornerness_raw.png"))?;
    save_image(&detection_b.nms_response.to_image(), &dir.join("b_cornerness_nms.png"))?;

    let mut marked_a = a.clone();
    let mut marked_b = b.clone();
    mark_corners(&mut marked_a, &detection_a.descriptors);
    mark_corners(&mut marked_b, &detection_b.descriptors);
    let inliers = draw_inliers(&marked_a, &marked_b, h, &mut matches, inlier_thresh);
    save_image(&inliers, &dir.join("inliers.png"))
}
