use std::path::Path;
use color_eyre::eyre::{eyre, Result};

use panorama::image::features::HarrisParameters;
use panorama::io::{load_image, save_image};
use panorama::visualize::detect_and_draw_corners;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 3 {
        return Err(eyre!("usage: corners <image> <output> [sigma] [nms]"));
    }

    let mut params = HarrisParameters::default();
    if let Some(sigma) = args.get(3) {
        params.sigma = sigma.parse()?;
    }
    if let Some(nms) = args.get(4) {
        params.nms = nms.parse()?;
    }

    let mut image = load_image(Path::new(&args[1]))?;
    detect_and_draw_corners(&mut image, &params);
    save_image(&image, Path::new(&args[2]))?;
    Ok(())
}
