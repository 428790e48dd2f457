#![no_main]

use libfuzzer_sys::fuzz_target;
use playbook_diagram::render::CanvasContainer;
use playbook_diagram::{capture_canvas_snapshot, ScreenRect};

fuzz_target!(|data: &[u8]| {
    let Ok(markup) = std::str::from_utf8(data) else {
        return;
    };
    let container = CanvasContainer::new(markup.to_string(), ScreenRect::new(0.0, 0.0, 800.0, 600.0));
    let _ = capture_canvas_snapshot(Some(&container));
});
