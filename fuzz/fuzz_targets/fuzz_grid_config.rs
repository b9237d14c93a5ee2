#![no_main]

use libfuzzer_sys::fuzz_target;
use tilegrid_core::Tile;
use tilegrid_layout::{GridConfig, GridEngine, ModeFlags};

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = GridConfig::parse_and_validate(raw) else {
        return;
    };

    // Any accepted config must drive the engine without panicking.
    assert!(config.breakpoints.tablet() < config.breakpoints.desktop());
    let tiles: Vec<Tile> = (0..40).map(|i| Tile::new(format!("p{i}"), "x")).collect();
    let mut engine = GridEngine::from_config(&config);
    for width in [320, config.breakpoints.tablet(), config.breakpoints.desktop()] {
        let classification = config.breakpoints.classify(Some(width), None, None);
        let layout = engine.layout(&tiles, &classification, &ModeFlags::default(), 2);
        assert!(layout.slot_count() <= layout.capacity);
    }
});
