use std::io::Write;
use std::time::Duration;

use numflip::prelude::*;
use numflip::surface::ChangeFlags;

/// Frame pacing of the terminal host loop
pub const FRAME: Duration = Duration::from_millis(16);

/// Run frames until the display settles, redrawing the terminal line on change
pub fn animate(flipper: &mut Flipper<MemorySurface>, root: ElementId) {
    loop {
        let more = flipper.tick();
        present(flipper, root);
        if !more {
            break;
        }
        std::thread::sleep(FRAME);
    }
    println!();
}

pub fn present(flipper: &mut Flipper<MemorySurface>, root: ElementId) {
    let flags = flipper.surface_mut().take_change_flags();
    if flags.intersects(ChangeFlags::NEEDS_PAINT | ChangeFlags::NEEDS_LAYOUT) {
        print!("\r{:>24}", flipper.surface().visible_text(root));
        let _ = std::io::stdout().flush();
    }
}
