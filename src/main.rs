use raycast::settings::{DEFAULT_CAMERA, DEFAULT_SCENE};
use raycast::*;

const OUTPUT: &str = "out.png";

fn main() -> Result<()> {
    let settings = RenderSettings::default();

    eprintln!(
        "rendering {}x{} pixels, {} object(s)",
        settings.image_width,
        settings.image_height(),
        DEFAULT_SCENE.len(),
    );

    let image = par_render(&settings, &DEFAULT_CAMERA, &*DEFAULT_SCENE)?;
    image.save(OUTPUT)?;

    eprintln!("wrote {}", OUTPUT);
    Ok(())
}
