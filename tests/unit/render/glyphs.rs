use super::*;
use crate::foundation::core::{FrameSize, Rgb8};

#[test]
fn block_glyphs_have_one_cell_per_char() {
    let atlas = GlyphAtlas::build(GlyphMode::Blocks, 20.0, ["ab c"]);
    let mask = atlas.mask("ab c");
    assert_eq!(mask.width, 12 * 4);
    assert_eq!(mask.height, 14);
    assert_eq!(mask.baseline, 14);
    // the space cell stays empty
    let space_col = 2 * 12 + 5;
    assert!((0..mask.height).all(|y| mask.coverage[(y * mask.width + space_col) as usize] == 0.0));
    assert!(!mask.is_blank());
}

#[test]
fn unknown_strings_fall_back_to_blocks() {
    let atlas = GlyphAtlas::build(GlyphMode::Blocks, 20.0, std::iter::empty());
    assert!(!atlas.mask("x").is_blank());
    assert!(atlas.mask("").is_blank());
}

#[test]
fn stamp_writes_color_and_alpha_above_baseline() {
    let atlas = GlyphAtlas::build(GlyphMode::Blocks, 10.0, ["A"]);
    let mut canvas = Canvas::new(FrameSize::new(40, 40).unwrap());
    let red = Rgb8::new(255, 0, 0);
    atlas.stamp(&mut canvas, "A", 5, 20, Ink::solid(red, 1.0));
    assert_eq!(canvas.alpha_at(5, 19), Some(1.0));
    assert_eq!(canvas.color_at(5, 19), Some(red));
    assert_eq!(canvas.alpha_at(5, 20), Some(0.0));
    assert_eq!(canvas.alpha_at(5, 12), Some(0.0));
}

#[test]
fn stamp_off_canvas_is_harmless() {
    let atlas = GlyphAtlas::build(GlyphMode::Blocks, 30.0, ["WIDE TEXT"]);
    let mut canvas = Canvas::new(FrameSize::new(16, 16).unwrap());
    atlas.stamp(&mut canvas, "WIDE TEXT", -100, -100, Ink::mask(1.0));
    atlas.stamp(&mut canvas, "WIDE TEXT", 10, 500, Ink::mask(1.0));
    assert!(!canvas.has_coverage());
}

#[test]
fn xml_is_escaped() {
    assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
}

#[test]
fn parses_mode_names() {
    assert_eq!("blocks".parse::<GlyphMode>().unwrap(), GlyphMode::Blocks);
    assert_eq!("System".parse::<GlyphMode>().unwrap(), GlyphMode::System);
    assert!("bitmap".parse::<GlyphMode>().is_err());
}
