use crate::draw::Point;
use crate::input::events::MouseButton;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press: starts a gesture with the current tool's style. Any
    ///   unreleased gesture is discarded by the history, not committed.
    /// - Right press: cancels the gesture in progress, if any.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                self.set_pointer(Some(Point::new(x, y)));
                let style = self.current_style();
                self.history_mut().begin(style, x, y);
                self.needs_redraw = true;
                // Preview hides while the gesture is open
                self.refresh_preview();
            }
            MouseButton::Right => {
                self.track_pointer(x, y);
                if self.history_mut().cancel() {
                    debug!("Gesture cancelled");
                    self.needs_redraw = true;
                }
                self.refresh_preview();
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes pointer motion.
    ///
    /// While a gesture is open the active drawable is extended; otherwise the
    /// hover preview follows the pointer.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        self.set_pointer(Some(Point::new(x, y)));

        if self.history_mut().extend(x, y) {
            self.needs_redraw = true;
        } else {
            self.refresh_preview();
        }
    }

    /// Processes a mouse button release: the left button commits the gesture.
    ///
    /// The release position is not added to the drawable; the last motion
    /// event already recorded where the pointer was. A release after the
    /// pointer left the canvas does not bring the pointer (or the preview)
    /// back.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        self.track_pointer(x, y);
        self.finish_gesture();
    }

    /// Processes a left release delivered while the pointer is off the canvas.
    ///
    /// The gesture still commits; no preview is shown afterwards.
    pub fn on_mouse_release_outside(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        self.set_pointer(None);
        self.finish_gesture();
    }

    /// Processes the pointer leaving the canvas: the preview is cleared.
    ///
    /// An open gesture stays open; it still commits on release.
    pub fn on_mouse_leave(&mut self) {
        self.set_pointer(None);
        self.refresh_preview();
    }

    /// Updates the pointer position only while it is over the canvas.
    fn track_pointer(&mut self, x: f64, y: f64) {
        if self.pointer().is_some() {
            self.set_pointer(Some(Point::new(x, y)));
        }
    }

    fn finish_gesture(&mut self) {
        if self.history_mut().commit() {
            self.needs_redraw = true;
        }
        self.refresh_preview();
    }
}
