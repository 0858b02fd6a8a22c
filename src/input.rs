use egui::{Context, Key, Modifiers, Pos2, Vec2, pos2};

use crate::command::Command;

/// The line the pointer travelled since the previous frame.
///
/// Both ends are relative to the canvas centre. Built fresh every frame the
/// pointer is held down and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSegment {
    pub current: Pos2,
    pub previous: Pos2,
}

impl PointerSegment {
    /// Recentre raw canvas-pixel positions around the middle of a canvas of `canvas_size`
    pub fn from_raw(current: Pos2, previous: Pos2, canvas_size: Vec2) -> Self {
        let half = canvas_size / 2.0;
        Self {
            current: current - half,
            previous: previous - half,
        }
    }

    /// Horizontal position of the current end in raw canvas pixels
    pub fn raw_current_x(&self, canvas_size: Vec2) -> f32 {
        self.current.x + canvas_size.x / 2.0
    }
}

/// Polls pointer state once per frame and remembers the last position.
///
/// The previous position is tracked whether or not a button is held, so the
/// first frame of a drag starts from where the pointer was hovering.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Pos2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self { last_pos: None }
    }

    /// Feed this frame's pointer state (in raw canvas pixels).
    ///
    /// Returns a segment only when the pointer is pressed on the canvas.
    pub fn update(&mut self, pos: Option<Pos2>, pressed: bool, canvas_size: Vec2) -> Option<PointerSegment> {
        let Some(current) = pos else {
            self.last_pos = None;
            return None;
        };
        let previous = self.last_pos.unwrap_or(current);
        self.last_pos = Some(current);

        if pressed {
            Some(PointerSegment::from_raw(current, previous, canvas_size))
        } else {
            None
        }
    }

    /// Forget the last position, e.g. after the canvas was reallocated
    pub fn reset(&mut self) {
        self.last_pos = None;
    }

    pub fn last_pos(&self) -> Option<Pos2> {
        self.last_pos
    }
}

/// Convert a screen position in points to canvas pixels
pub fn to_canvas_pixels(screen_pos: Pos2, canvas_origin: Pos2, pixels_per_point: f32) -> Pos2 {
    let local = (screen_pos - canvas_origin) * pixels_per_point;
    pos2(local.x, local.y)
}

/// Consume keyboard shortcuts and turn them into commands
pub fn shortcut_commands(ctx: &Context) -> Vec<Command> {
    let mut commands = Vec::new();
    ctx.input_mut(|input| {
        if input.consume_key(Modifiers::COMMAND, Key::S) {
            commands.push(Command::Save);
        }
        if input.consume_key(Modifiers::NONE, Key::Delete) {
            commands.push(Command::Clear);
        }
    });
    commands
}
