mod common;

use panorama::Float;
use panorama::image::Image;
use panorama::image::image_encoding::ImageEncoding;
use panorama::image::features::{describe_index, harris_corner_detector, detect_corners, HarrisParameters, DESCRIPTOR_WINDOW};
use panorama::image::features::harris_corner::{cornerness_response, nms_response, structure_matrix, threshold_response, HARRIS_ALPHA};
use panorama::image::GrayscaleWeights;

use common::{init_logging, random_image};

fn square_image() -> Image {
    Image::from_fn(40, 40, 1, |x,y,_| match (x, y) {
        (x, y) if x >= 12 && x < 28 && y >= 12 && y < 28 => 1.0,
        _ => 0.0
    })
}

#[test]
fn descriptors_have_fixed_length() {
    init_logging();
    for channels in [1usize, 3].iter() {
        let image = common::block_texture(48, 48, 8, *channels, 3);
        let descriptors = harris_corner_detector(&image, 2.0, 5.0, 3);

        assert!(!descriptors.is_empty());
        assert!(descriptors.iter().all(|d| d.data.len() == DESCRIPTOR_WINDOW*DESCRIPTOR_WINDOW*channels));
    }
}

#[test]
fn descriptor_stores_center_differences() {
    let image = random_image(10, 10, 3, 7);

    let interior = describe_index(&image, 5, 5);
    assert_eq!(interior.len(), 75);
    assert_eq!(interior.point.x, 5.0);
    for c in 0..3 {
        assert_eq!(interior.data[c*25 + 12], 0.0);
    }
    assert_eq!(interior.data[0], image.get_pixel(5, 5, 0) - image.get_pixel(3, 3, 0));
    assert_eq!(interior.data[1], image.get_pixel(5, 5, 0) - image.get_pixel(4, 3, 0));
    assert_eq!(interior.data[25 + 5], image.get_pixel(5, 5, 1) - image.get_pixel(3, 4, 1));

    let corner = describe_index(&image, 0, 0);
    assert_eq!(corner.data[0], 0.0);
    assert_eq!(corner.data[24], image.get_pixel(0, 0, 0) - image.get_pixel(2, 2, 0));
}

#[test]
fn constant_image_has_no_corners() {
    init_logging();
    let image = Image::from_fn(32, 32, 3, |_,_,_| 0.5);
    let descriptors = harris_corner_detector(&image, 2.0, 5.0, 3);
    assert!(descriptors.is_empty());
}

#[test]
fn structure_matrix_of_ramp_has_no_cross_term() {
    let ramp = Image::from_fn(16, 16, 1, |x,_,_| 0.1*(x as Float));
    let structure = structure_matrix(&ramp, 1.0, &GrayscaleWeights::default());

    assert_eq!(structure.channels(), 3);
    assert!((structure.get_pixel(8, 8, 0) - 0.64).abs() < 1e-9);
    assert!(structure.get_pixel(8, 8, 1).abs() < 1e-12);
    assert!(structure.get_pixel(8, 8, 2).abs() < 1e-12);

    let response = cornerness_response(&structure);
    assert!((response.get_pixel(8, 8, 0) + HARRIS_ALPHA*0.64*0.64).abs() < 1e-9);
}

#[test]
fn square_corners_are_detected() {
    init_logging();
    let descriptors = harris_corner_detector(&square_image(), 1.0, 5.0, 3);
    let expected = [(12.0, 12.0), (27.0, 12.0), (12.0, 27.0), (27.0, 27.0)];

    assert!(!descriptors.is_empty());
    for (ex, ey) in expected.iter() {
        assert!(descriptors.iter().any(|d| (d.point.x - ex).abs() <= 2.0 && (d.point.y - ey).abs() <= 2.0), "no corner near ({},{})", ex, ey);
    }
    assert!(descriptors.iter().all(|d| expected.iter().any(|(ex, ey)| (d.point.x - ex).abs() <= 4.0 && (d.point.y - ey).abs() <= 4.0)));
}

#[test]
fn threshold_ignores_requested_value() {
    let response = Image::from_vec(4, 1, 1, vec![100.0, 1.5, 0.5, -3.0], ImageEncoding::F64);
    let map = threshold_response(&response, 1e6);

    assert_eq!(map.get(0, 0), Some(100.0));
    assert_eq!(map.get(1, 0), Some(1.5));
    assert_eq!(map.get(2, 0), None);
    assert_eq!(map.get(3, 0), None);
}

#[test]
fn nms_keeps_equal_neighbours() {
    let mut values = vec![0.0; 49];
    values[3*7 + 3] = 1.0;
    values[3*7 + 4] = 1.0;
    values[5*7 + 1] = 0.5;
    let response = Image::from_vec(7, 7, 1, values, ImageEncoding::F64);

    let map = nms_response(&threshold_response(&response, 0.0), 2);
    let locations = map.corner_locations();

    assert_eq!(locations.len(), 2);
    assert!(locations.iter().any(|p| p.x == 3 && p.y == 3));
    assert!(locations.iter().any(|p| p.x == 4 && p.y == 3));
}

#[test]
fn nms_survivors_are_window_maxima() {
    let response = common::random_image(30, 30, 1, 11);
    let radius = 2isize;
    let thresholded = threshold_response(&response, 0.0);
    let suppressed = nms_response(&thresholded, radius as usize);

    let survivors = suppressed.corner_locations();
    assert!(!survivors.is_empty());
    for p in survivors.iter() {
        let center = suppressed.get(p.x, p.y).unwrap();
        for ny in (p.y as isize - radius)..(p.y as isize + radius + 1) {
            for nx in (p.x as isize - radius)..(p.x as isize + radius + 1) {
                if nx < 0 || ny < 0 || nx >= 30 || ny >= 30 {
                    continue;
                }
                if let Some(neighbour) = thresholded.get(nx as usize, ny as usize) {
                    assert!(neighbour <= center);
                }
            }
        }
    }
}

#[test]
fn detection_exposes_response_maps() {
    let detection = detect_corners(&square_image(), &HarrisParameters { sigma: 1.0, ..HarrisParameters::default() });

    assert_eq!(detection.nms_response.valid_count(), detection.descriptors.len());
    assert!(detection.thresholded_response.valid_count() >= detection.nms_response.valid_count());

    let rendered = detection.nms_response.to_image();
    assert_eq!(rendered.width(), 40);
    assert_eq!(rendered.original_encoding, ImageEncoding::F64);
}
