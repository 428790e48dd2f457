#![no_main]

use libfuzzer_sys::fuzz_target;
use playbook_diagram::{compile_path, compute_bounding_box, Drawing};

fuzz_target!(|data: &[u8]| {
    let Ok(drawing) = serde_json::from_slice::<Drawing>(data) else {
        return;
    };
    let drawings = [drawing];
    if let Some(bbox) = compute_bounding_box(&drawings) {
        let _ = compile_path(&drawings[0], &bbox, 200.0, 120.0, 10.0);
    }
});
