use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    /// Samples in [0,1], loaded from 8 bit sources.
    U8,
    /// Unbounded samples such as response maps.
    F64
}

impl ImageEncoding {
    // https://en.wikipedia.org/wiki/Normalization_(image_processing)
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = 255 as Float; // 255 - 0
        match self {
            ImageEncoding::U8 => (value.max(0.0).min(1.0)*range).round() as u8,
            ImageEncoding::F64 => match max - min {
                diff if diff > 0.0 => ((value - min) * (range / diff)).round() as u8,
                _ => 0
            }
        }
    }
}
