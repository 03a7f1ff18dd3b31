extern crate image as image_rs;

use image_rs::{DynamicImage, GrayImage, RgbImage, Luma, Rgb};
use serde::{Serialize, Deserialize};

use crate::Float;
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod filter;
pub mod features;
pub mod homography;

/// Channel weights used when collapsing an RGB image into one intensity channel.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GrayscaleWeights {
    pub r: Float,
    pub g: Float,
    pub b: Float
}

impl Default for GrayscaleWeights {
    fn default() -> GrayscaleWeights {
        GrayscaleWeights { r: 0.299, g: 0.587, b: 0.114 }
    }
}

/**
 * Planar float image. Channel 0 is stored completely before channel 1,
 * rows are contiguous within a channel.
 */
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    buffer: Vec<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn new(width: usize, height: usize, channels: usize) -> Image {
        Image::empty(width, height, channels, ImageEncoding::U8)
    }

    pub fn empty(width: usize, height: usize, channels: usize, original_encoding: ImageEncoding) -> Image {
        assert!(width > 0 && height > 0 && channels > 0, "image dimensions must be positive, got {}x{}x{}", width, height, channels);
        Image { width, height, channels, buffer: vec![0.0; width*height*channels], original_encoding }
    }

    pub fn from_vec(width: usize, height: usize, channels: usize, buffer: Vec<Float>, original_encoding: ImageEncoding) -> Image {
        assert!(width > 0 && height > 0 && channels > 0, "image dimensions must be positive, got {}x{}x{}", width, height, channels);
        assert_eq!(buffer.len(), width*height*channels, "buffer length does not match {}x{}x{}", width, height, channels);
        Image { width, height, channels, buffer, original_encoding }
    }

    pub fn from_fn<F>(width: usize, height: usize, channels: usize, f: F) -> Image where F: Fn(usize, usize, usize) -> Float {
        let mut image = Image::new(width, height, channels);
        for c in 0..channels {
            for y in 0..height {
                for x in 0..width {
                    let idx = image.index(x, y, c);
                    image.buffer[idx] = f(x, y, c);
                }
            }
        }
        image
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn channels(&self) -> usize { self.channels }
    pub fn buffer(&self) -> &Vec<Float> { &self.buffer }

    pub fn size(&self) -> usize {
        self.width*self.height
    }

    fn index(&self, x: usize, y: usize, c: usize) -> usize {
        c*self.width*self.height + y*self.width + x
    }

    /// Reads a sample, clamping out of range coordinates to the closest edge pixel.
    pub fn get_pixel(&self, x: isize, y: isize, c: usize) -> Float {
        assert!(c < self.channels, "channel {} out of range for image with {} channels", c, self.channels);
        let x_clamped = x.max(0).min(self.width as isize - 1) as usize;
        let y_clamped = y.max(0).min(self.height as isize - 1) as usize;
        self.buffer[self.index(x_clamped, y_clamped, c)]
    }

    /// Writes a sample. Out of range coordinates are ignored.
    pub fn set_pixel(&mut self, x: isize, y: isize, c: usize, value: Float) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height && c < self.channels {
            let idx = self.index(x as usize, y as usize, c);
            self.buffer[idx] = value;
        }
    }

    /// Copy with the given channel count. Missing channels repeat the last one, surplus channels are dropped.
    pub fn with_channels(&self, channels: usize) -> Image {
        let mut image = Image::from_fn(self.width, self.height, channels, |x,y,c| self.get_pixel(x as isize, y as isize, c.min(self.channels - 1)));
        image.original_encoding = self.original_encoding;
        image
    }

    pub fn to_grayscale(&self, weights: &GrayscaleWeights) -> Image {
        match self.channels {
            1 => self.clone(),
            3 => {
                let n = self.size();
                let buffer = (0..n).map(|i| weights.r*self.buffer[i] + weights.g*self.buffer[n+i] + weights.b*self.buffer[2*n+i]).collect();
                Image::from_vec(self.width, self.height, 1, buffer, self.original_encoding)
            },
            c => panic!("grayscale conversion expects 1 or 3 channels, got {}", c)
        }
    }

    /// Samples between pixel centers. Neighbours outside the image are clamped.
    pub fn bilinear_interpolate(&self, x: Float, y: Float, c: usize) -> Float {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let fx = x - x_floor;
        let fy = y - y_floor;
        let x0 = x_floor as isize;
        let y0 = y_floor as isize;

        (1.0 - fx)*(1.0 - fy)*self.get_pixel(x0, y0, c) +
        fx*(1.0 - fy)*self.get_pixel(x0 + 1, y0, c) +
        (1.0 - fx)*fy*self.get_pixel(x0, y0 + 1, c) +
        fx*fy*self.get_pixel(x0 + 1, y0 + 1, c)
    }

    pub fn same_image(&self, other: &Image, eps: Float) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels &&
        self.buffer.iter().zip(other.buffer.iter()).all(|(a,b)| (a-b).abs() <= eps)
    }

    pub fn max(&self) -> Float {
        self.buffer.iter().cloned().fold(Float::NEG_INFINITY, Float::max)
    }

    pub fn min(&self) -> Float {
        self.buffer.iter().cloned().fold(Float::INFINITY, Float::min)
    }

    /// Luma sources become one channel, everything else three. Samples are scaled to [0,1].
    pub fn from_dynamic_image(image: &DynamicImage) -> Image {
        match image.color().has_color() {
            true => {
                let rgb = image.to_rgb8();
                let (width, height) = rgb.dimensions();
                Image::from_fn(width as usize, height as usize, 3, |x,y,c| rgb.get_pixel(x as u32, y as u32)[c] as Float / 255.0)
            },
            false => {
                let gray = image.to_luma8();
                let (width, height) = gray.dimensions();
                Image::from_fn(width as usize, height as usize, 1, |x,y,_| gray.get_pixel(x as u32, y as u32)[0] as Float / 255.0)
            }
        }
    }

    pub fn to_dynamic_image(&self) -> DynamicImage {
        let max = self.max();
        let min = self.min();
        let encoding = self.original_encoding;
        let (width, height) = (self.width as u32, self.height as u32);
        let gray = |x: u32, y: u32, c: usize| encoding.normalize_to_gray(max, min, self.get_pixel(x as isize, y as isize, c));
        match self.channels {
            c if c >= 3 => DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x,y| Rgb([gray(x,y,0), gray(x,y,1), gray(x,y,2)]))),
            _ => DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x,y| Luma([gray(x,y,0)])))
        }
    }

}
