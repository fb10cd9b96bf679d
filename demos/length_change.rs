//! Grows and shrinks the display to fit each target.

mod common;

use numflip::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut surface = MemorySurface::default();
    let root = surface.create_root();
    let config = FlipperConfig::new().from(7).separator(",");
    let mut flipper = Flipper::new(surface, root, config)?;
    common::present(&mut flipper, root);
    println!();

    for target in [1_234_567, 89, 45_000, 3] {
        flipper.transition_to(TransitionRequest::to(target).adaptive_length(true));
        common::animate(&mut flipper, root);
        log::info!("{} wheels for {}", flipper.wheel_count(), target);
    }
    Ok(())
}
