use std::path::Path;
use color_eyre::eyre::{eyre, Result};

use panorama::image::features::HarrisParameters;
use panorama::io::{load_image, save_image};
use panorama::visualize::find_and_draw_matches;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    if args.len() < 4 {
        return Err(eyre!("usage: matches <image_a> <image_b> <output>"));
    }

    let image_a = load_image(Path::new(&args[1]))?;
    let image_b = load_image(Path::new(&args[2]))?;
    let lines = find_and_draw_matches(&image_a, &image_b, &HarrisParameters::default());
    save_image(&lines, Path::new(&args[3]))?;
    Ok(())
}
