//! End-to-end tests: font descriptor -> layout -> draw list

mod common;

use common::{kerned_font, mono_font};
use nether_font::command::slot_count;
use nether_font::immediate::{count_commands, render};
use nether_font::{
    DrawCommand, DrawListBuilder, FontError, LayoutStatus, Rgba, TextConfig, TextLayout, measure,
};

fn placements(layout: &TextLayout) -> Vec<(i32, i32)> {
    layout.glyphs().iter().map(|g| (g.x, g.y)).collect()
}

fn bound_atlases<R: Copy>(commands: &[DrawCommand<R>]) -> Vec<R> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::BindAtlas(r) => Some(*r),
            _ => None,
        })
        .collect()
}

#[test]
fn test_wrap_at_space_moves_last_word() {
    let font = mono_font();
    let mut layout = TextLayout::new();

    assert_eq!(layout.layout(&font, b"aa bb", 25), LayoutStatus::Complete);
    assert_eq!(layout.len(), 5);
    assert_eq!(&placements(&layout)[3..], &[(0, 20), (10, 20)]);
    assert_eq!(layout.width(), 30);
    assert_eq!(layout.height(), 40);
}

#[test]
fn test_measure_agrees_with_layout_without_wrapping() {
    let texts: [&[u8]; 6] = [b"", b"ab", b"ab ba\nb", b"\n\na", b"a?b\n?", b"xy ab\nyx"];

    let font = mono_font();
    let mut layout = TextLayout::new();
    for text in texts {
        assert_eq!(layout.layout(&font, text, i32::MAX), LayoutStatus::Complete);
        assert_eq!(layout.size(), measure(&font, text), "{text:?}");
    }

    let font = kerned_font();
    for text in [&b"AVAV"[..], b"To\nVAT", b"TAoV"] {
        assert_eq!(layout.layout(&font, text, i32::MAX), LayoutStatus::Complete);
        assert_eq!(layout.size(), measure(&font, text), "{text:?}");
    }
}

#[test]
fn test_immediate_count_matches_render() {
    let texts: [&[u8]; 5] = [b"aa bb", b"", b"\n\n\n", b"a\nzz\nb", b"\xE2\x82\xAC ab"];
    for font in [mono_font(), kerned_font()] {
        for text in texts {
            let mut commands: Vec<DrawCommand<()>> = Vec::new();
            render(&font, text, 3, 3, &mut commands);
            assert_eq!(count_commands(&font, text), slot_count(&commands));
        }
    }
}

#[test]
fn test_draw_list_binds_atlases_in_ascending_order() {
    let font = mono_font();
    let mut layout = TextLayout::new();
    assert_eq!(
        layout.layout(&font, b"y a x b y x a", 1000),
        LayoutStatus::Complete
    );
    assert_eq!(layout.atlases().iter().collect::<Vec<_>>(), vec![0, 2, 5]);

    let atlases = [10u32, 11, 12, 13, 14, 15];
    let mut commands: Vec<DrawCommand<u32>> = Vec::new();
    let emitted = DrawListBuilder::new(&atlases)
        .tint(Some(Rgba::WHITE))
        .build(&layout, &mut commands)
        .unwrap();

    assert_eq!(bound_atlases(&commands), vec![10, 12, 15]);
    assert_eq!(emitted, 3 * 2 + layout.len());
}

#[test]
fn test_draw_list_rejects_missing_atlas() {
    let font = mono_font();
    let mut layout = TextLayout::new();
    let _ = layout.layout(&font, b"ay", 1000);

    let mut commands: Vec<DrawCommand<u32>> = Vec::new();
    let result = DrawListBuilder::new(&[0u32, 1, 2]).build(&layout, &mut commands);
    assert!(matches!(result, Err(FontError::MissingAtlas { atlas: 5, .. })));
    assert!(commands.is_empty());
}

#[test]
fn test_kerned_layout_positions() {
    let font = kerned_font();
    let mut layout = TextLayout::new();
    assert_eq!(layout.layout(&font, b"AVTo", 1000), LayoutStatus::Complete);

    // A at 0, V kerned to 8 with x offset -1, T at 18, o kerned to 25
    assert_eq!(placements(&layout), vec![(0, 1), (7, 1), (18, 0), (25, 4)]);
    assert_eq!(layout.width(), 32);
    assert_eq!(layout.height(), 14);
}

#[test]
fn test_config_drives_layout_and_draw() {
    let config = TextConfig::from_toml_str(
        r#"
[layout]
max_width = 25
capacity = 4

[draw]
offset_x = 100
offset_y = 200
"#,
    )
    .unwrap();

    let font = mono_font();
    let mut layout = config.layout.new_layout();
    let status = layout.layout(&font, b"aa bb", config.layout.max_width);
    assert_eq!(status, LayoutStatus::Truncated { consumed: 4 });
    assert_eq!(layout.len(), 4);

    let mut commands: Vec<DrawCommand<&str>> = Vec::new();
    config
        .draw
        .builder(&["atlas0"])
        .build(&layout, &mut commands)
        .unwrap();

    let origins: Vec<(i32, i32)> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::TextureRect(r) => Some(r.origin()),
            _ => None,
        })
        .collect();
    assert_eq!(origins, vec![(100, 200), (110, 200), (120, 200), (100, 220)]);
}
