pub mod geometry;
pub mod descriptor;
pub mod harris_corner;
pub mod harris_parameters;
pub mod matches;

pub use self::descriptor::{Descriptor, describe_index, DESCRIPTOR_WINDOW};
pub use self::harris_corner::{harris_corner_detector, detect_corners, HarrisDetection, ResponseMap};
pub use self::harris_parameters::HarrisParameters;
pub use self::matches::{Match, match_descriptors, l1_distance};
