//! Input abstraction and recording for replays

use serde::{Deserialize, Serialize};

/// Raw device state: what is held down right now.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub move_x: f32,
    pub jump_held: bool,
}

impl InputState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Digital keys to state, the way a keyboard drives the horizontal axis.
    pub fn from_buttons(left: bool, right: bool, jump: bool) -> Self {
        Self {
            move_x: axis_from_buttons(left, right),
            jump_held: jump,
        }
    }
}

/// Raw digital axis: -1, 0 or 1. Both keys cancel out.
pub fn axis_from_buttons(left: bool, right: bool) -> f32 {
    match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}

/// One tick's input snapshot as the movement core consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputFrame {
    /// Horizontal axis in [-1, 1].
    pub horizontal: f32,
    /// Jump key went down this tick.
    pub jump_pressed: bool,
}

impl InputFrame {
    /// Builds a frame with the axis clamped to [-1, 1]. NaN reads as centered.
    pub fn clamped(horizontal: f32, jump_pressed: bool) -> Self {
        let horizontal = if horizontal.is_nan() {
            0.0
        } else {
            horizontal.clamp(-1.0, 1.0)
        };
        Self {
            horizontal,
            jump_pressed,
        }
    }
}

/// Rising-edge detector for the jump key.
///
/// Holding the key reports a press once; it has to be released before it can
/// fire again.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpEdge {
    was_held: bool,
}

impl JumpEdge {
    pub fn update(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }
}

/// Source of per-tick input.
///
/// Implementations must hand back a clamped axis and an edge-triggered jump.
pub trait InputSampler {
    fn sample(&mut self) -> InputFrame;
}

impl<S: InputSampler + ?Sized> InputSampler for &mut S {
    fn sample(&mut self) -> InputFrame {
        (**self).sample()
    }
}

impl<S: InputSampler + ?Sized> InputSampler for Box<S> {
    fn sample(&mut self) -> InputFrame {
        (**self).sample()
    }
}

/// Plays a fixed list of device states, one per tick, then idles.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: Vec<InputState>,
    cursor: usize,
    edge: JumpEdge,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `state` for `ticks` consecutive ticks.
    pub fn hold(mut self, state: InputState, ticks: usize) -> Self {
        self.script.extend(std::iter::repeat(state).take(ticks));
        self
    }

    pub fn len(&self) -> usize {
        self.script.len()
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.script.len()
    }
}

impl InputSampler for ScriptedInput {
    fn sample(&mut self) -> InputFrame {
        let state = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        let pressed = self.edge.update(state.jump_held);
        InputFrame::clamped(state.move_x, pressed)
    }
}

/// Wraps a sampler and keeps every frame it produced.
#[derive(Debug, Clone)]
pub struct InputRecorder<S> {
    inner: S,
    frames: Vec<InputFrame>,
}

impl<S: InputSampler> InputRecorder<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[InputFrame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<InputFrame> {
        self.frames
    }
}

impl<S: InputSampler> InputSampler for InputRecorder<S> {
    fn sample(&mut self) -> InputFrame {
        let frame = self.inner.sample();
        self.frames.push(frame);
        frame
    }
}

/// Plays recorded frames back verbatim, then idles.
#[derive(Debug, Clone, Default)]
pub struct ReplayInput {
    frames: Vec<InputFrame>,
    cursor: usize,
}

impl ReplayInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSampler for ReplayInput {
    fn sample(&mut self) -> InputFrame {
        let frame = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor = self.cursor.saturating_add(1);
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_from_buttons() {
        assert_eq!(axis_from_buttons(false, false), 0.0);
        assert_eq!(axis_from_buttons(true, false), -1.0);
        assert_eq!(axis_from_buttons(false, true), 1.0);
        assert_eq!(axis_from_buttons(true, true), 0.0);
    }

    #[test]
    fn test_clamped_frame() {
        assert_eq!(InputFrame::clamped(3.0, false).horizontal, 1.0);
        assert_eq!(InputFrame::clamped(-3.0, false).horizontal, -1.0);
        assert_eq!(InputFrame::clamped(f32::NAN, true).horizontal, 0.0);
        assert_eq!(InputFrame::clamped(0.25, true).horizontal, 0.25);
    }

    #[test]
    fn test_jump_edge_only_fires_on_press() {
        let mut edge = JumpEdge::default();
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_scripted_input_holds_and_idles() {
        let jump_right = InputState::from_buttons(false, true, true);
        let mut input = ScriptedInput::new().hold(jump_right, 3);
        assert_eq!(input.len(), 3);

        let frames: Vec<_> = (0..5).map(|_| input.sample()).collect();
        assert!(input.is_finished());

        assert_eq!(frames[0], InputFrame { horizontal: 1.0, jump_pressed: true });
        assert_eq!(frames[1], InputFrame { horizontal: 1.0, jump_pressed: false });
        assert_eq!(frames[2], InputFrame { horizontal: 1.0, jump_pressed: false });
        assert_eq!(frames[3], InputFrame::default());
        assert_eq!(frames[4], InputFrame::default());
    }

    #[test]
    fn test_scripted_input_clamps_axis() {
        let state = InputState {
            move_x: 4.0,
            jump_held: false,
        };
        let mut input = ScriptedInput::new().hold(state, 1);
        assert_eq!(input.sample().horizontal, 1.0);
    }

    #[test]
    fn test_record_and_replay() {
        let tap = InputState::from_buttons(true, false, true);
        let script = ScriptedInput::new()
            .hold(tap, 2)
            .hold(InputState::idle(), 1)
            .hold(tap, 1);
        let mut recorder = InputRecorder::new(script);
        for _ in 0..4 {
            recorder.sample();
        }
        assert_eq!(recorder.frames().len(), 4);

        let recorded = recorder.into_frames();
        let presses = recorded.iter().filter(|frame| frame.jump_pressed).count();
        assert_eq!(presses, 2);

        let mut replay = ReplayInput::new(recorded.clone());
        let replayed: Vec<_> = (0..4).map(|_| replay.sample()).collect();
        assert_eq!(replayed, recorded);
        assert_eq!(replay.sample(), InputFrame::default());
    }
}
