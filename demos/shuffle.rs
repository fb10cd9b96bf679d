//! Jumps to random values with a thousands separator.

mod common;

use rand::Rng;

use numflip::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut surface = MemorySurface::default();
    let root = surface.create_root();
    let config = FlipperConfig::new().from(42).to(9999).separator(",");
    let mut flipper = Flipper::new(surface, root, config)?;
    common::animate(&mut flipper, root);

    let mut rng = rand::rng();
    for _ in 0..5 {
        let target = rng.random_range(0..8888);
        flipper.transition_to(TransitionRequest::to(target));
        common::animate(&mut flipper, root);
    }
    Ok(())
}
