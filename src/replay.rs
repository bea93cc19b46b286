//! Headless replay of scripted input.
//!
//! A replay script drives the same [`InputState`] the Wayland backend uses,
//! one event per line:
//!
//! ```text
//! # draw a triangle
//! click 10 10
//! move 100 10
//! click 100 10
//! move 55 90
//! click 55 90
//! key Return
//! ```
//!
//! Supported commands are `click X Y`, `move X Y`, `right-click X Y` and
//! `key BINDING` (keybinding syntax, e.g. `Ctrl+Q`). Blank lines and lines
//! starting with `#` are skipped. After the script the canvas is rendered to a
//! PNG of the configured size.

use crate::config::{Config, KeyBinding};
use crate::input::{InputState, Key, MouseButton};
use crate::ui;
use log::{debug, info};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading, running, or rendering a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("render failed: {0}")]
    Render(String),
}

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayEvent {
    Click { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    RightClick { x: i32, y: i32 },
    Key(KeyBinding),
}

/// Parses a replay script.
pub fn parse_script(source: &str) -> Result<Vec<ReplayEvent>, ReplayError> {
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| ReplayError::Parse {
            line: index + 1,
            message,
        };

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((line, ""));

        let event = match command {
            "click" => {
                let (x, y) = parse_point(rest).map_err(parse_error)?;
                ReplayEvent::Click { x, y }
            }
            "move" => {
                let (x, y) = parse_point(rest).map_err(parse_error)?;
                ReplayEvent::Move { x, y }
            }
            "right-click" => {
                let (x, y) = parse_point(rest).map_err(parse_error)?;
                ReplayEvent::RightClick { x, y }
            }
            "key" => {
                let binding = KeyBinding::parse(rest).map_err(parse_error)?;
                if Key::from_name(&binding.key).binding_name().is_none() {
                    return Err(parse_error(format!("unknown key '{}'", binding.key)));
                }
                ReplayEvent::Key(binding)
            }
            other => return Err(parse_error(format!("unknown command '{}'", other))),
        };
        events.push(event);
    }

    Ok(events)
}

fn parse_point(args: &str) -> Result<(i32, i32), String> {
    let mut parts = args.split_whitespace();
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected two coordinates, got '{}'", args));
    };
    let x = x
        .parse::<i32>()
        .map_err(|e| format!("invalid x coordinate '{}': {}", x, e))?;
    let y = y
        .parse::<i32>()
        .map_err(|e| format!("invalid y coordinate '{}': {}", y, e))?;
    Ok((x, y))
}

/// Feeds events into the input state, stopping early once exit is requested.
///
/// Returns the number of events applied.
pub fn apply_events(input_state: &mut InputState, events: &[ReplayEvent]) -> usize {
    let mut applied = 0;
    for event in events {
        if input_state.should_exit {
            debug!("Exit requested, skipping remaining replay events");
            break;
        }
        apply_event(input_state, event);
        applied += 1;
    }
    applied
}

fn apply_event(input_state: &mut InputState, event: &ReplayEvent) {
    match event {
        ReplayEvent::Click { x, y } => {
            input_state.on_mouse_press(MouseButton::Left, *x, *y);
        }
        ReplayEvent::Move { x, y } => input_state.on_mouse_motion(*x, *y),
        ReplayEvent::RightClick { x, y } => {
            input_state.on_mouse_press(MouseButton::Right, *x, *y);
        }
        ReplayEvent::Key(binding) => {
            let modifiers = [
                (binding.ctrl, Key::Ctrl),
                (binding.shift, Key::Shift),
                (binding.alt, Key::Alt),
            ];
            for (held, key) in modifiers {
                if held {
                    input_state.on_key_press(key);
                }
            }

            let key = Key::from_name(&binding.key);
            input_state.on_key_press(key);
            input_state.on_key_release(key);

            for (held, key) in modifiers {
                if held {
                    input_state.on_key_release(key);
                }
            }
        }
    }
}

/// Renders the current scene into an image surface of the given size.
pub fn render_image(
    input_state: &InputState,
    config: &Config,
    width: u32,
    height: u32,
) -> Result<cairo::ImageSurface, ReplayError> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .map_err(|e| ReplayError::Render(format!("failed to create surface: {}", e)))?;
    {
        let ctx = cairo::Context::new(&surface)
            .map_err(|e| ReplayError::Render(format!("failed to create context: {}", e)))?;
        ui::render_scene(&ctx, input_state, config, width, height);
    }
    surface.flush();
    Ok(surface)
}

/// Runs a replay script file and writes the final canvas to `output` as PNG.
///
/// Returns the input state after the replay so callers can inspect it.
pub fn run(script: &Path, output: &Path, config: &Config) -> Result<InputState, ReplayError> {
    let source = fs::read_to_string(script)?;
    let events = parse_script(&source)?;
    info!(
        "Replaying {} events from {}",
        events.len(),
        script.display()
    );

    let mut input_state = InputState::from_config(config);
    let applied = apply_events(&mut input_state, &events);
    debug!(
        "Applied {} events; state {}, {} shapes",
        applied,
        input_state.state,
        input_state.frame.len()
    );

    let surface = render_image(
        &input_state,
        config,
        input_state.screen_width,
        input_state.screen_height,
    )?;

    let mut writer = BufWriter::new(File::create(output)?);
    surface
        .write_to_png(&mut writer)
        .map_err(|e| ReplayError::Render(format!("failed to write PNG: {}", e)))?;
    info!("Wrote {}", output.display());

    Ok(input_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::input::DrawingState;

    const TRIANGLE: &str = "\
# triangle
click 10 10
move 100 10
click 100 10

move 55 90
click 55 90
key Return
";

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let events = parse_script(TRIANGLE).unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0], ReplayEvent::Click { x: 10, y: 10 });
        assert_eq!(events[1], ReplayEvent::Move { x: 100, y: 10 });
        assert_eq!(
            events[5],
            ReplayEvent::Key(KeyBinding::parse("Return").unwrap())
        );
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let err = parse_script("click 1 2\n\nclick 3\n").unwrap_err();
        match err {
            ReplayError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_script("# c\njump 1 2").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown command 'jump'");

        assert!(parse_script("move x 2").is_err());
        assert!(parse_script("key").is_err());

        let err = parse_script("click 1 1\nkey Retrun").unwrap_err();
        assert_eq!(err.to_string(), "line 2: unknown key 'Retrun'");
        assert!(parse_script("key Ctrl+Hyper").is_err());
        assert!(parse_script("key Esc").is_ok());
    }

    #[test]
    fn replay_builds_polyline_through_controller() {
        let mut state = InputState::from_config(&Config::default());
        apply_events(&mut state, &parse_script(TRIANGLE).unwrap());

        assert_eq!(state.state, DrawingState::Idle);
        let Shape::Polyline { points, .. } = &state.frame.shapes[0];
        assert_eq!(points, &vec![(10, 10), (100, 10), (55, 90)]);
    }

    #[test]
    fn modifier_bindings_are_held_for_the_key() {
        let mut state = InputState::from_config(&Config::default());
        let events = parse_script("click 5 5\nkey Ctrl+Q\nkey Ctrl+Q\nclick 9 9").unwrap();

        let applied = apply_events(&mut state, &events);
        assert_eq!(applied, 3);
        assert!(state.should_exit);
        assert!(!state.modifiers.ctrl);
        assert!(state.frame.is_empty());
    }

    #[test]
    fn run_writes_png_of_canvas_size() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("draw.txt");
        let output = dir.path().join("out.png");
        fs::write(&script, TRIANGLE).unwrap();

        let state = run(&script, &output, &Config::default()).unwrap();
        assert_eq!(state.frame.len(), 1);

        let mut file = File::open(&output).unwrap();
        let image = cairo::ImageSurface::create_from_png(&mut file).unwrap();
        assert_eq!((image.width(), image.height()), (400, 400));
    }

    #[test]
    fn run_reports_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            &dir.path().join("missing.txt"),
            &dir.path().join("out.png"),
            &Config::default(),
        );
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }
}
