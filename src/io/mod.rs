extern crate image as image_rs;

use std::path::Path;
use std::fs::File;
use std::io::{BufReader,Read};

use crate::Result;
use crate::image::Image;
use crate::stitching::PanoramaParameters;


pub fn load_image(file_path: &Path) -> Result<Image> {
    let dynamic_image = image_rs::open(file_path)?;
    Ok(Image::from_dynamic_image(&dynamic_image))
}

/// Format is picked from the file extension.
pub fn save_image(image: &Image, file_path: &Path) -> Result<()> {
    image.to_dynamic_image().save(file_path)?;
    Ok(())
}

pub fn load_parameters(file_path: &Path) -> Result<PanoramaParameters> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(serde_yaml::from_str(&contents)?)
}
