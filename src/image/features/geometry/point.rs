use serde::{Serialize, Deserialize};
use crate::Float;


#[derive(Debug,Clone,Copy,Serialize,Deserialize)]
pub struct Point<T> where T: PartialOrd + PartialEq {
    pub x: T,
    pub y: T
}

impl<T> PartialEq for Point<T> where T: PartialOrd {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y== other.y
    }
}

impl<T> Point<T> where T: PartialOrd + PartialEq {
    pub fn new(x: T, y:T) -> Point<T> {
        Point{x,y}
    }
}

impl Point<Float> {
    pub fn origin() -> Point<Float> {
        Point::new(0.0, 0.0)
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Point<Float>) -> Float {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
