//! Pointer drag gestures.
//!
//! A drag begins on press, forwards every move while active, and ends on
//! release. [`DragGesture`] is the state machine the wasm host drives one
//! event at a time. [`DragSession`] is the scoped form for Rust callers: it
//! holds the engine mutably for the length of the drag and releases on drop,
//! so a session can neither leak nor nest.

use crate::geometry::{CropState, GeometryEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: GestureState,
}

impl DragGesture {
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// `Idle -> Dragging`. Returns false if a drag was already active.
    pub fn press(&mut self) -> bool {
        match self.state {
            GestureState::Idle => {
                log::trace!("drag started");
                self.state = GestureState::Dragging;
                true
            }
            GestureState::Dragging => false,
        }
    }

    /// Emit the position while dragging; swallow it otherwise.
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<(f64, f64)> {
        match self.state {
            GestureState::Dragging => Some((x, y)),
            GestureState::Idle => None,
        }
    }

    /// `Dragging -> Idle`, unconditionally.
    pub fn release(&mut self) {
        if self.state == GestureState::Dragging {
            log::trace!("drag ended");
        }
        self.state = GestureState::Idle;
    }

    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// A drag in progress. Dropping it releases the gesture.
pub struct DragSession<'a> {
    engine: &'a mut GeometryEngine,
}

impl<'a> DragSession<'a> {
    pub(crate) fn new(engine: &'a mut GeometryEngine) -> Self {
        engine.press();
        Self { engine }
    }

    /// Move the crop center to a canvas position.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.engine.pointer_move(x, y);
    }

    /// Apply a stream of positions in order.
    pub fn follow<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        for (x, y) in positions {
            self.move_to(x, y);
        }
    }

    pub fn crop(&self) -> &CropState {
        self.engine.crop()
    }

    /// End the drag explicitly. Same as dropping the session.
    pub fn finish(self) {}
}

impl Drop for DragSession<'_> {
    fn drop(&mut self) {
        self.engine.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::DecodedImage;

    fn cropping_engine() -> GeometryEngine {
        let mut engine = GeometryEngine::default();
        engine.load_image(DecodedImage::filled(4000, 3000, [0, 0, 0]));
        engine.set_aspect_ratio(4.0, 6.0);
        engine
    }

    fn crop_x(engine: &GeometryEngine) -> f64 {
        engine.crop().rect().map(|r| r.x).unwrap_or(f64::NAN)
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut gesture = DragGesture::default();
        assert_eq!(gesture.state(), GestureState::Idle);
        assert_eq!(gesture.move_to(1.0, 2.0), None);

        assert!(gesture.press());
        assert_eq!(gesture.state(), GestureState::Dragging);
        assert_eq!(gesture.move_to(1.0, 2.0), Some((1.0, 2.0)));

        gesture.release();
        assert_eq!(gesture.state(), GestureState::Idle);
        assert_eq!(gesture.move_to(3.0, 4.0), None);
    }

    #[test]
    fn test_press_while_dragging_is_ignored() {
        let mut gesture = DragGesture::default();
        assert!(gesture.press());
        assert!(!gesture.press());
        gesture.release();
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_release_when_idle_is_harmless() {
        let mut gesture = DragGesture::default();
        gesture.release();
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn test_moves_only_apply_between_press_and_release() {
        let mut engine = cropping_engine();

        engine.pointer_move(0.0, 0.0);
        assert_eq!(crop_x(&engine), 1000.0);

        engine.press();
        engine.pointer_move(0.0, 0.0);
        assert_eq!(crop_x(&engine), 0.0);
        engine.release();

        engine.pointer_move(500.0, 0.0);
        assert_eq!(crop_x(&engine), 0.0);
    }

    #[test]
    fn test_load_image_abandons_drag() {
        let mut engine = cropping_engine();
        engine.press();
        engine.load_image(DecodedImage::filled(10, 10, [0, 0, 0]));
        assert_eq!(engine.gesture_state(), GestureState::Idle);
    }

    #[test]
    fn test_session_releases_on_drop() {
        let mut engine = cropping_engine();
        {
            let mut session = engine.begin_drag();
            session.follow([(100.0, 100.0), (500.0, 250.0)]);
            assert_eq!(session.crop().rect().map(|r| r.x), Some(2000.0));
        }
        assert_eq!(engine.gesture_state(), GestureState::Idle);
        assert_eq!(crop_x(&engine), 2000.0);
    }

    #[test]
    fn test_session_finish() {
        let mut engine = cropping_engine();
        let session = engine.begin_drag();
        session.finish();
        assert_eq!(engine.gesture_state(), GestureState::Idle);
    }
}
