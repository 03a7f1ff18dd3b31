use log::debug;

use crate::Float;
use crate::image::{Image,GrayscaleWeights,image_encoding::ImageEncoding};
use crate::image::filter::{convolve_image,smooth_image,sobel_kernel::SobelKernel};
use crate::image::features::descriptor::{Descriptor,describe_index};
use crate::image::features::geometry::point::Point;
use crate::image::features::harris_parameters::HarrisParameters;

/// Weight of the squared trace in the cornerness response.
pub const HARRIS_ALPHA: Float = 0.06;
/// Fraction of the strongest response a pixel needs to stay a corner candidate.
pub const RESPONSE_THRESHOLD_FRACTION: Float = 0.01;

/**
 * Smoothed gradient products of the intensity image.
 * Channel 0 is Ix^2, channel 1 is Iy^2, channel 2 is IxIy.
 */
pub fn structure_matrix(image: &Image, sigma: Float, weights: &GrayscaleWeights) -> Image {
    assert!(image.channels() == 1 || image.channels() == 3, "structure matrix expects 1 or 3 channels, got {}", image.channels());

    let gray = image.to_grayscale(weights);
    let x_gradient = convolve_image(&gray, &SobelKernel::horizontal(), true);
    let y_gradient = convolve_image(&gray, &SobelKernel::vertical(), true);

    let products = Image::from_fn(image.width(), image.height(), 3, |x,y,c| {
        let ix = x_gradient.get_pixel(x as isize, y as isize, 0);
        let iy = y_gradient.get_pixel(x as isize, y as isize, 0);
        match c {
            0 => ix*ix,
            1 => iy*iy,
            _ => ix*iy
        }
    });

    smooth_image(&products, sigma)
}

/// det(S) - alpha*trace(S)^2 per pixel, approximating the eigenvalues of the structure matrix.
pub fn cornerness_response(structure: &Image) -> Image {
    assert_eq!(structure.channels(), 3, "cornerness expects a 3 channel structure matrix");
    let mut response = Image::from_fn(structure.width(), structure.height(), 1, |x,y,_| {
        let ix_sq = structure.get_pixel(x as isize, y as isize, 0);
        let iy_sq = structure.get_pixel(x as isize, y as isize, 1);
        let ix_iy = structure.get_pixel(x as isize, y as isize, 2);
        let det = ix_sq*iy_sq - ix_iy*ix_iy;
        let trace = ix_sq + iy_sq;
        det - HARRIS_ALPHA*trace*trace
    });
    response.original_encoding = ImageEncoding::F64;
    response
}

/**
 * Per pixel cornerness where None marks a pixel that can no longer be a corner.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct ResponseMap {
    width: usize,
    height: usize,
    responses: Vec<Option<Float>>
}

impl ResponseMap {

    pub fn from_image(response: &Image) -> ResponseMap {
        let responses = (0..response.size()).map(|i| Some(response.buffer()[i])).collect();
        ResponseMap { width: response.width(), height: response.height(), responses }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }

    pub fn get(&self, x: usize, y: usize) -> Option<Float> {
        self.responses[y*self.width + x]
    }

    pub fn invalidate(&mut self, x: usize, y: usize) {
        self.responses[y*self.width + x] = None;
    }

    /// Largest finite response among valid pixels.
    pub fn max_valid(&self) -> Option<Float> {
        self.responses.iter().filter_map(|r| *r).filter(|r| r.is_finite()).fold(None, |acc, r| match acc {
            Some(m) if m >= r => Some(m),
            _ => Some(r)
        })
    }

    pub fn valid_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_some()).count()
    }

    /// Valid pixel coordinates in row major order.
    pub fn corner_locations(&self) -> Vec<Point<usize>> {
        self.responses.iter().enumerate().filter(|(_,r)| r.is_some()).map(|(i,_)| Point::new(i % self.width, i / self.width)).collect()
    }

    /// Renders the map for inspection. Invalid pixels take the lowest valid value.
    pub fn to_image(&self) -> Image {
        let floor = self.responses.iter().filter_map(|r| *r).fold(Float::INFINITY, Float::min);
        let floor = match floor.is_finite() {
            true => floor,
            false => 0.0
        };
        let buffer = self.responses.iter().map(|r| r.unwrap_or(floor)).collect();
        Image::from_vec(self.width, self.height, 1, buffer, ImageEncoding::F64)
    }
}

/**
 * Invalidates every pixel below 1% of the strongest response.
 * The requested threshold is overridden. If no response is positive nothing survives.
 */
pub fn threshold_response(response: &Image, requested_thresh: Float) -> ResponseMap {
    let mut map = ResponseMap::from_image(response);
    let max_cornerness = map.max_valid();
    debug!("max cornerness before thresholding: {:?}", max_cornerness);

    match max_cornerness {
        Some(max) if max > 0.0 => {
            let thresh = RESPONSE_THRESHOLD_FRACTION*max;
            debug!("using threshold {} instead of requested {}", thresh, requested_thresh);
            for y in 0..map.height {
                for x in 0..map.width {
                    match map.get(x, y) {
                        Some(r) if r >= thresh => (),
                        _ => map.invalidate(x, y)
                    }
                }
            }
        },
        _ => {
            for y in 0..map.height {
                for x in 0..map.width {
                    map.invalidate(x, y);
                }
            }
        }
    }

    map
}

/**
 * Invalidates every pixel that has a strictly larger valid neighbour within the square window.
 * Equal neighbours do not suppress each other.
 */
pub fn nms_response(map: &ResponseMap, radius: usize) -> ResponseMap {
    let mut suppressed = map.clone();
    let radius = radius as isize;
    let (width, height) = (map.width as isize, map.height as isize);

    for y in 0..height {
        for x in 0..width {
            let center = match map.get(x as usize, y as usize) {
                Some(r) => r,
                None => continue
            };
            let mut is_max = true;
            'window: for ny in y-radius..y+radius+1 {
                for nx in x-radius..x+radius+1 {
                    if nx < 0 || ny < 0 || nx >= width || ny >= height || (nx == x && ny == y) {
                        continue;
                    }
                    if let Some(neighbour) = map.get(nx as usize, ny as usize) {
                        if neighbour > center {
                            is_max = false;
                            break 'window;
                        }
                    }
                }
            }
            if !is_max {
                suppressed.invalidate(x as usize, y as usize);
            }
        }
    }

    suppressed
}

#[derive(Debug,Clone)]
pub struct HarrisDetection {
    pub descriptors: Vec<Descriptor>,
    /// Response after thresholding, before suppression.
    pub thresholded_response: ResponseMap,
    pub nms_response: ResponseMap
}

pub fn detect_corners(image: &Image, params: &HarrisParameters) -> HarrisDetection {
    let structure = structure_matrix(image, params.sigma, &params.grayscale_weights);
    let response = cornerness_response(&structure);
    let thresholded_response = threshold_response(&response, params.thresh);
    let nms = nms_response(&thresholded_response, params.nms);

    let descriptors = nms.corner_locations().iter().map(|p| describe_index(image, p.x, p.y)).collect::<Vec<Descriptor>>();
    debug!("detected {} corners on {}x{} image", descriptors.len(), image.width(), image.height());

    HarrisDetection { descriptors, thresholded_response, nms_response: nms }
}

pub fn harris_corner_detector(image: &Image, sigma: Float, thresh: Float, nms: usize) -> Vec<Descriptor> {
    let params = HarrisParameters { sigma, thresh, nms, ..HarrisParameters::default() };
    detect_corners(image, &params).descriptors
}
