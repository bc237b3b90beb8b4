use orbit_core::color::{blend_palette, palette_from_hex, Rgb, YRange};
use orbit_core::constants::{CENTER_PALETTE, USER_PALETTE};

#[test]
fn hex_round_trip_and_css() {
    let c = Rgb::from_hex(0x40efef);
    assert_eq!(c, Rgb::new(0x40, 0xef, 0xef));
    assert_eq!(c.to_hex(), 0x40efef);
    assert_eq!(c.css(), "#40efef");
    assert_eq!(Rgb::from(0x000001).css(), "#000001");
}

#[test]
fn palette_ends_map_to_first_and_last_colors() {
    let palette = palette_from_hex(&CENTER_PALETTE);
    assert_eq!(blend_palette(0.0, &palette), palette[0]);
    assert_eq!(blend_palette(1.0, &palette), palette[2]);
}

#[test]
fn palette_entries_are_hit_exactly_at_their_positions() {
    let palette = palette_from_hex(&CENTER_PALETTE);
    assert_eq!(blend_palette(0.5, &palette), palette[1]);
}

#[test]
fn blend_between_entries_rounds_each_channel() {
    let palette = [Rgb::new(0, 0, 0), Rgb::new(255, 100, 11)];
    assert_eq!(blend_palette(0.5, &palette), Rgb::new(128, 50, 6));
    assert_eq!(blend_palette(0.25, &palette), Rgb::new(64, 25, 3));
}

#[test]
fn single_color_palette_always_returns_that_color() {
    let palette = [Rgb::from_hex(USER_PALETTE[3])];
    for y in [0.0, 0.3, 1.0] {
        assert_eq!(blend_palette(y, &palette), palette[0]);
    }
}

#[test]
fn empty_palette_falls_back_to_white() {
    assert_eq!(blend_palette(0.4, &[]), Rgb::WHITE);
}

#[test]
fn out_of_range_positions_stay_on_palette() {
    let palette = palette_from_hex(&CENTER_PALETTE);
    assert_eq!(blend_palette(-0.5, &palette), palette[0]);
    assert_eq!(blend_palette(3.0, &palette), palette[2]);
}

#[test]
fn y_range_normalizes_and_guards_flat_frames() {
    let range = YRange::from_values([-50.0, 10.0, 150.0]).unwrap();
    assert_eq!(range.span(), 200.0);
    assert_eq!(range.normalize(-50.0), 0.0);
    assert_eq!(range.normalize(150.0), 1.0);

    let flat = YRange::from_values([7.0, 7.0]).unwrap();
    assert_eq!(flat.normalize(7.0), 0.0);
    assert!(flat.normalize(7.0).is_finite());

    assert!(YRange::from_values(std::iter::empty()).is_none());
}

#[test]
fn white_tint_leaves_color_unchanged() {
    let c = Rgb::new(12, 200, 255);
    assert_eq!(c.tinted(Rgb::WHITE), c);
    assert_eq!(c.tinted(Rgb::new(0, 0, 0)), Rgb::new(0, 0, 0));
}
