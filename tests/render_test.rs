use tui_globe::core::{RotationState, ScreenGeometry, Texture};
use tui_globe::term::{FrameBuffer, GlobeView};
use tui_globe::types::STATUS_LINE;

fn world(width: usize, height: usize) -> Texture {
    const GLYPHS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let rows: Vec<String> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| GLYPHS[(x + 3 * y) % GLYPHS.len()] as char)
                .collect()
        })
        .collect();
    Texture::from_rows(rows).unwrap()
}

fn globe_cells(fb: &FrameBuffer) -> usize {
    // Everything except the status row.
    (0..fb.height() - 1)
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).unwrap().ch != ' ')
        .count()
}

#[test]
fn default_view_renders_full_screen_with_status() {
    let view = GlobeView::default();
    let fb = view.render(&world(72, 36), RotationState::default());

    assert_eq!((fb.width(), fb.height()), (120, 40));

    let bottom = fb.row_text(39);
    let start = (120 - STATUS_LINE.len()) / 2;
    assert_eq!(&bottom[start..start + STATUS_LINE.len()], STATUS_LINE);

    assert!(globe_cells(&fb) > 1000, "globe disc should cover a large share of the screen");
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    assert_eq!(fb.get(119, 0).unwrap().ch, ' ');
}

#[test]
fn small_screen_reference_frame() {
    let texture = Texture::from_rows(["ABCD", "EFGH"]).unwrap();
    let view = GlobeView::new(ScreenGeometry::new(8, 4, 0.9)).with_status("");
    let fb = view.render(&texture, RotationState::default());

    // Centre cell samples the map's middle; the corner is background.
    assert_eq!(fb.get(4, 2).unwrap().ch, 'G');
    assert_eq!(fb.get(0, 0).unwrap().ch, ' ');

    let text = fb.to_text();
    assert_eq!(text.lines().count(), 4);
    assert!(text.lines().all(|l| l.chars().count() == 8));
}

#[test]
fn frames_do_not_carry_over_between_rotations() {
    let texture = world(72, 36);
    let view = GlobeView::new(ScreenGeometry::new(60, 20, 0.9));
    let a = RotationState::new(0.0, 0.0);
    let b = RotationState::new(1.3, -0.6);

    let mut reused = FrameBuffer::new(60, 20);
    view.render_into(&texture, a, &mut reused);
    view.render_into(&texture, b, &mut reused);

    assert_eq!(reused, view.render(&texture, b));
}

#[test]
fn render_into_resizes_mismatched_buffer() {
    let view = GlobeView::new(ScreenGeometry::new(30, 10, 0.9));
    let mut fb = FrameBuffer::new(3, 3);
    view.render_into(&world(8, 4), RotationState::default(), &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 10));
}

#[test]
fn spinning_changes_the_visible_surface() {
    let texture = world(72, 36);
    let view = GlobeView::new(ScreenGeometry::new(60, 20, 0.9));
    let still = view.render(&texture, RotationState::default());
    let spun = view.render(&texture, RotationState::new(0.5, 0.0));

    assert_ne!(still.to_text(), spun.to_text());
    // Silhouette is rotation-independent.
    assert_eq!(globe_cells(&still), globe_cells(&spun));
}
