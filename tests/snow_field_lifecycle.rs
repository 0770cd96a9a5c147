//! Full lifecycle tests for the snow field through the public API:
//! start, a stretch of frames, resize-driven rebalances, and teardown.

use snowfield::headless::HeadlessSurface;
use snowfield::{SnowConfig, SnowError, SnowField};

#[test]
fn test_full_lifecycle_keeps_invariants() {
    let config = SnowConfig {
        max_flakes: 40,
        speed: 8.0,
        wind: 3.0,
        rotation: true,
        ..SnowConfig::default()
    };
    let mut surface = HeadlessSurface::new(320.0, 180.0);
    let mut field = SnowField::with_seed(config, 2024);

    field.start(&mut surface).unwrap();
    assert_eq!(field.count(), 40);

    for frame in 0..300 {
        field.tick(&mut surface);

        // Positions are confined to the region the tick ran against; a
        // resize later in the frame only takes hold on the next tick
        let region = field.region();
        assert!(field.count() <= 40);
        for flake in field.flakes() {
            assert!(flake.pos.y <= region.y + 50.0);
            assert!(flake.pos.x >= -50.0 && flake.pos.x <= region.x + 50.0);
        }

        // Occasional resizes mid-flight, like a window being dragged
        if frame == 100 {
            surface.resize(100.0, 60.0);
            field.rebalance(&mut surface);
            // floor(100 * 60 / 10000 * 30) = 18
            assert_eq!(field.count(), 18);
        }
        if frame == 200 {
            surface.resize(640.0, 480.0);
            field.rebalance(&mut surface);
            // density target is 921, clamped to max_flakes
            assert_eq!(field.count(), 40);
        }
    }

    field.stop(&mut surface);
    assert_eq!(field.count(), 0);
    assert_eq!(surface.live_nodes(), 0);
    assert_eq!(surface.created(), surface.removed());
}

#[test]
fn test_rebalance_to_zero_on_collapsed_region() {
    let mut surface = HeadlessSurface::new(200.0, 200.0);
    let mut field = SnowField::with_seed(SnowConfig::default(), 7);
    field.start(&mut surface).unwrap();

    surface.resize(0.0, 0.0);
    field.rebalance(&mut surface);

    assert_eq!(field.count(), 0);
    assert_eq!(surface.live_nodes(), 0);
}

#[test]
fn test_missing_region_reports_selector() {
    let mut surface = HeadlessSurface::missing_region();
    let config = SnowConfig {
        target_selector: "#no-such-container".to_string(),
        ..SnowConfig::default()
    };
    let mut field = SnowField::new(config);

    match field.start(&mut surface) {
        Err(SnowError::RegionNotFound(selector)) => {
            assert_eq!(selector, "#no-such-container");
        }
        other => panic!("expected RegionNotFound, got {other:?}"),
    }
    assert_eq!(field.count(), 0);
}
