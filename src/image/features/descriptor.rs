use serde::{Serialize, Deserialize};
use crate::Float;
use crate::image::Image;
use crate::image::features::geometry::point::Point;

/// Side length of the square patch sampled around a corner.
pub const DESCRIPTOR_WINDOW: usize = 5;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Descriptor {
    pub point: Point<Float>,
    pub data: Vec<Float>
}

impl Descriptor {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/**
 * Center value minus every sample of the surrounding window, per channel.
 * Layout is channel major and row major inside the window, giving 25 values per channel.
 */
pub fn describe_index(image: &Image, x: usize, y: usize) -> Descriptor {
    let radius = (DESCRIPTOR_WINDOW/2) as isize;
    let (x_signed, y_signed) = (x as isize, y as isize);
    let mut data = Vec::<Float>::with_capacity(DESCRIPTOR_WINDOW*DESCRIPTOR_WINDOW*image.channels());

    for c in 0..image.channels() {
        let center = image.get_pixel(x_signed, y_signed, c);
        for dy in -radius..radius+1 {
            for dx in -radius..radius+1 {
                data.push(center - image.get_pixel(x_signed + dx, y_signed + dy, c));
            }
        }
    }

    Descriptor { point: Point::new(x as Float, y as Float), data }
}
