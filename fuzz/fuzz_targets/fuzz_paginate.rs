#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilegrid_core::{Breakpoints, DeviceHint, GridItem, ParticipantId, Tile};
use tilegrid_layout::{GridEngine, ModeFlags, page_count, paginate};

#[derive(Debug, Arbitrary)]
struct Input {
    participants: u8,
    capacity: u8,
    page: u16,
    width: Option<u16>,
    hint: u8,
    screen_share: bool,
    extended: bool,
    pin: Option<u8>,
}

fuzz_target!(|input: Input| {
    let tiles: Vec<Tile> = (0..usize::from(input.participants))
        .map(|i| Tile::new(format!("p{i}"), format!("P {i}")))
        .collect();
    let capacity = usize::from(input.capacity);
    let page = usize::from(input.page);

    let out = paginate(&tiles, capacity, page);
    assert!(out.items.len() <= capacity.max(1), "page over capacity");
    assert!(tiles.is_empty() || out.tile_count() >= 1, "page without tiles");
    assert!(out.current_page >= 1 && out.current_page <= out.page_count);
    assert_eq!(out.page_count, page_count(tiles.len(), capacity));
    let shown: Vec<&Tile> = out.items.iter().filter_map(GridItem::as_tile).collect();
    assert_eq!(shown.len(), out.visible.len());
    assert!(shown.iter().zip(&tiles[out.visible.clone()]).all(|(a, b)| *a == b));

    let hint = match input.hint % 3 {
        0 => None,
        1 => Some(DeviceHint::Mobile),
        _ => Some(DeviceHint::Tablet),
    };
    let classification = Breakpoints::DEFAULT.classify(input.width.map(u32::from), None, hint);
    let flags = ModeFlags {
        screen_share_active: input.screen_share,
        extended_view: input.extended,
        pinned: input.pin.map(|i| ParticipantId::new(format!("p{i}"))),
        ..ModeFlags::default()
    };
    let layout = GridEngine::new().layout(&tiles, &classification, &flags, page);
    assert!(layout.slot_count() <= layout.capacity, "rows over capacity");
    if let Some(pinned) = &layout.pinned {
        assert!(layout.tiles().all(|t| t.id != pinned.id), "pinned tile paginated");
    }
    if !classification.extended_view_available {
        assert!(!layout.state.is_extended());
    }
});
