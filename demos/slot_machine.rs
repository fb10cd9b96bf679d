//! Rolls wheels of fruit symbols instead of digits.

mod common;

use rand::Rng;

use numflip::prelude::*;

const SYMBOLS: [&str; 11] = [
    "🍒", "🍏", "🍍", "🌴", "bar", "🔔", "🍇", "7", "💰", "🍈", "bar",
];

fn main() -> Result<()> {
    env_logger::init();

    let mut surface = MemorySurface::default();
    let root = surface.create_root();
    let config = FlipperConfig::new().alphabet(SYMBOLS).from(777);
    let mut flipper = Flipper::new(surface, root, config)?;
    common::present(&mut flipper, root);
    println!();

    let mut rng = rand::rng();
    for _ in 0..3 {
        let target = rng.random_range(0..999);
        flipper.transition_to(TransitionRequest::to(target));
        common::animate(&mut flipper, root);
    }
    Ok(())
}
