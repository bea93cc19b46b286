use cairo::{Context, ImageSurface};
use polyscribe::Config;
use polyscribe::config::{HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition};
use polyscribe::draw::Color;
use polyscribe::input::{InputState, MouseButton};

fn make_input_state() -> InputState {
    let keybindings = KeybindingsConfig::default();
    let action_map = keybindings.build_action_map().unwrap();
    InputState::with_defaults(
        Color {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        },
        4.0,
        10,
        0,
        true,
        action_map,
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

/// BGRA bytes of one pixel (ARgb32 is native-endian; little-endian assumed).
fn pixel(surface: &mut ImageSurface, x: usize, y: usize) -> [u8; 4] {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y * stride + x * 4;
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

#[test]
fn render_status_bar_draws_for_all_positions() {
    let mut input = make_input_state();
    input.update_screen_dimensions(800, 480);
    let style = StatusBarStyle::default();
    let keybindings = KeybindingsConfig::default();
    let positions = [
        StatusPosition::TopLeft,
        StatusPosition::TopRight,
        StatusPosition::BottomLeft,
        StatusPosition::BottomRight,
    ];

    for position in positions {
        let (mut surface, ctx) = surface_with_context(400, 200);
        let rect = polyscribe::ui::render_status_bar(
            &ctx,
            &input,
            &keybindings,
            position,
            &style,
            400,
            200,
        );
        drop(ctx);
        assert!(
            surface_has_pixels(&mut surface),
            "status bar should render pixels for {:?}",
            position
        );
        assert!(rect.is_some(), "status bar should report its area");
    }
}

#[test]
fn render_help_overlay_draws_content() {
    let style = HelpOverlayStyle::default();
    let (mut surface, ctx) = surface_with_context(800, 600);
    polyscribe::ui::render_help_overlay(&ctx, &style, &KeybindingsConfig::default(), 800, 600);
    drop(ctx);
    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_scene_paints_background_and_polylines() {
    let mut config = Config::default();
    config.ui.show_status_bar = false;
    config.drawing.stroke_thickness = 6.0;
    let mut input = InputState::from_config(&config);

    input.on_mouse_press(MouseButton::Left, 10, 50);
    input.on_mouse_motion(90, 50);
    input.on_mouse_press(MouseButton::Left, 90, 50);
    input.commit();

    let (mut surface, ctx) = surface_with_context(100, 100);
    let status = polyscribe::ui::render_scene(&ctx, &input, &config, 100, 100);
    drop(ctx);
    surface.flush();

    assert!(status.is_none());
    // Default stroke is red on a white background
    assert_eq!(pixel(&mut surface, 50, 50), [0, 0, 255, 255]);
    assert_eq!(pixel(&mut surface, 50, 10), [255, 255, 255, 255]);
}

#[test]
fn render_scene_shows_in_progress_segment() {
    let mut config = Config::default();
    config.ui.show_status_bar = false;
    config.drawing.stroke_thickness = 6.0;
    let mut input = InputState::from_config(&config);

    input.on_mouse_press(MouseButton::Left, 50, 10);
    input.on_mouse_motion(50, 90);

    let (mut surface, ctx) = surface_with_context(100, 100);
    polyscribe::ui::render_scene(&ctx, &input, &config, 100, 100);
    drop(ctx);
    surface.flush();

    assert_eq!(pixel(&mut surface, 50, 70), [0, 0, 255, 255]);
}
