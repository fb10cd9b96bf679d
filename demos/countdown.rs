//! Counts down once per second with odometer-style carries.

mod common;

use std::time::Duration;

use numflip::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut surface = MemorySurface::default();
    let root = surface.create_root();
    let config = FlipperConfig::new()
        .from(9999)
        .duration(Duration::from_millis(400));
    let mut flipper = Flipper::new(surface, root, config)?;
    common::present(&mut flipper, root);

    for count in (9990..9999).rev() {
        std::thread::sleep(Duration::from_secs(1) - Duration::from_millis(400));
        flipper.transition_to(TransitionRequest::to(count).direct_animation(false));
        common::animate(&mut flipper, root);
    }
    Ok(())
}
