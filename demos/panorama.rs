use std::path::Path;
use color_eyre::eyre::{eyre, Result};

use panorama::io::{load_image, load_parameters, save_image};
use panorama::stitching::{panorama_image_or_base, PanoramaParameters};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 4 {
        return Err(eyre!("usage: panorama <image_a> <image_b> <output> [parameters.yaml]"));
    }

    let params = match args.get(4) {
        Some(path) => load_parameters(Path::new(path))?,
        None => PanoramaParameters::default()
    };

    let image_a = load_image(Path::new(&args[1]))?;
    let image_b = load_image(Path::new(&args[2]))?;
    let stitched = panorama_image_or_base(&image_a, &image_b, &params)?;
    save_image(&stitched, Path::new(&args[3]))?;

    println!("wrote {}x{} panorama to {}", stitched.width(), stitched.height(), args[3]);
    Ok(())
}
