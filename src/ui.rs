/// UI rendering: status bar, help overlay, and full scene composition
use crate::config::{
    Action, Config, HelpOverlayStyle, KeybindingsConfig, StatusBarStyle, StatusPosition,
};
use crate::draw::color::color_to_name;
use crate::draw::{render_background, render_shapes};
use crate::input::{DrawingState, InputState};
use crate::util::Rect;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Color indicator dot X offset
const STATUS_DOT_OFFSET_X: f64 = 3.0;
/// Room left of the text for the color dot
const STATUS_DOT_SPACE: f64 = 14.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// Paints the whole scene: background, finished polylines, the polyline being
/// drawn, then the status bar and help overlay when visible.
///
/// Returns the status bar area when it was drawn.
pub fn render_scene(
    ctx: &cairo::Context,
    input_state: &InputState,
    config: &Config,
    width: u32,
    height: u32,
) -> Option<Rect> {
    render_background(ctx, config.canvas.background_color.to_color());
    render_shapes(ctx, &input_state.frame.shapes);
    input_state.render_in_progress(ctx, config.ui.show_vertices);

    let status_rect = if input_state.show_status_bar {
        render_status_bar(
            ctx,
            input_state,
            &config.keybindings,
            config.ui.status_bar_position,
            &config.ui.status_bar_style,
            width,
            height,
        )
    } else {
        None
    };

    if input_state.show_help {
        render_help_overlay(
            ctx,
            &config.ui.help_overlay_style,
            &config.keybindings,
            width,
            height,
        );
    }

    status_rect
}

/// Text shown in the status bar for the current editing state.
///
/// `help_key` is the first binding of the help toggle, if any.
pub fn status_text(input_state: &InputState, help_key: Option<&str>) -> String {
    let mode = match &input_state.state {
        DrawingState::Idle => "Idle".to_string(),
        DrawingState::Drawing { buffer } => format!(
            "Drawing {}/{}",
            buffer.committed_count(),
            input_state.max_points
        ),
    };

    let mut text = format!(
        "[{}] [{}] [{}px] [{} shapes]",
        mode,
        color_to_name(&input_state.stroke_color),
        input_state.stroke_thickness as i32,
        input_state.frame.len()
    );
    if let Some(key) = help_key {
        text.push_str(&format!("  {}=Help", key));
    }
    text
}

/// Render status bar showing editing state, color, and thickness.
///
/// Returns the area covered by the bar so the backend can repaint it next frame.
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    keybindings: &KeybindingsConfig,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) -> Option<Rect> {
    let color = &input_state.stroke_color;
    let help_key = keybindings
        .bindings_for(Action::ToggleHelp)
        .first()
        .map(String::as_str);
    let status_text = status_text(input_state, help_key);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return None;
        }
    };
    let text_width = extents.width() + STATUS_DOT_SPACE;
    let text_height = extents.height();

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - text_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - text_width - padding,
            screen_height as f64 - padding,
        ),
    };

    let bg_x = x - STATUS_BG_OFFSET_X;
    let bg_y = y - text_height - STATUS_BG_OFFSET_Y;
    let bg_width = text_width + STATUS_BG_WIDTH_PAD;
    let bg_height = text_height + STATUS_BG_HEIGHT_PAD;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(bg_x, bg_y, bg_width, bg_height);
    let _ = ctx.fill();

    // Color indicator dot
    let dot_x = x + STATUS_DOT_OFFSET_X;
    let dot_y = y - text_height / 2.0;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(
        dot_x,
        dot_y,
        style.dot_radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x + STATUS_DOT_SPACE, y);
    let _ = ctx.show_text(&status_text);

    Rect::from_min_max(
        bg_x.floor() as i32,
        bg_y.floor() as i32,
        (bg_x + bg_width).ceil() as i32 + 1,
        (bg_y + bg_height).ceil() as i32 + 1,
    )
}

/// Lines of the help overlay, built from the active keybindings.
pub fn help_lines(keybindings: &KeybindingsConfig) -> Vec<String> {
    let mut lines = vec![
        "━━━━━━━━━━━━━━━━ POLYSCRIBE CONTROLS ━━━━━━━━━━━━━━━━".to_string(),
        String::new(),
        format!("  {:<18} {}", "Left click", "Add point / start polyline"),
        format!("  {:<18} {}", "Move", "Drag the open segment"),
        format!("  {:<18} {}", "Right click", "Cancel polyline"),
        String::new(),
    ];

    for action in Action::ALL {
        let bindings = keybindings.bindings_for(action);
        let keys = if bindings.is_empty() {
            "(unbound)".to_string()
        } else {
            bindings.join(" / ")
        };
        lines.push(format!("  {:<18} {}", keys, action.label()));
    }

    lines
}

/// Render help overlay listing every keybinding, centered on the surface.
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    keybindings: &KeybindingsConfig,
    screen_width: u32,
    screen_height: u32,
) {
    let help_text = help_lines(keybindings);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    // Find longest line for width
    let mut max_width: f64 = 0.0;
    for line in &help_text {
        let extents = match ctx.text_extents(line) {
            Ok(ext) => ext,
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                let fallback_width = line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE;
                max_width = max_width.max(fallback_width);
                continue;
            }
        };
        max_width = max_width.max(extents.width());
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in help_text.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::MouseButton;

    #[test]
    fn status_text_reports_idle_and_drawing_progress() {
        let mut state = InputState::from_config(&Config::default());
        assert_eq!(
            status_text(&state, Some("F10")),
            "[Idle] [red] [2px] [0 shapes]  F10=Help"
        );

        state.on_mouse_press(MouseButton::Left, 5, 5);
        state.on_mouse_press(MouseButton::Left, 9, 9);
        assert_eq!(
            status_text(&state, None),
            "[Drawing 2/10] [red] [2px] [0 shapes]"
        );
    }

    #[test]
    fn help_lines_list_every_action_with_bindings() {
        let mut keybindings = KeybindingsConfig::default();
        keybindings.delete_last_point = vec!["Backspace".to_string(), "Delete".to_string()];
        keybindings.toggle_status_bar.clear();

        let lines = help_lines(&keybindings);
        for action in Action::ALL {
            assert!(lines.iter().any(|l| l.contains(action.label())));
        }
        assert!(lines.iter().any(|l| l.contains("Backspace / Delete")));
        assert!(lines.iter().any(|l| l.contains("(unbound)")));
    }
}
