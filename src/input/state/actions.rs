use crate::config::Action;
use crate::input::events::Key;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Modifier keys only update the modifier state. Other keys are looked up
    /// in the keybinding table together with the held modifiers; unbound keys
    /// are ignored.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.set(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.set(key, false);
    }

    /// Performs a control action (keybinding or UI button).
    pub fn handle_action(&mut self, action: Action) {
        debug!("Action: {:?}", action);
        match action {
            Action::Undo => {
                if self.history().can_undo() {
                    self.history_mut().undo();
                    self.needs_redraw = true;
                } else {
                    debug!("Nothing to undo");
                }
            }
            Action::Redo => {
                if self.history().can_redo() {
                    self.history_mut().redo();
                    self.needs_redraw = true;
                } else {
                    debug!("Nothing to redo");
                }
            }
            Action::ClearCanvas => {
                if self.history_mut().clear() {
                    self.needs_redraw = true;
                }
                // A cleared gesture lets the preview come back
                self.refresh_preview();
            }
            Action::CancelStroke => {
                if self.history_mut().cancel() {
                    self.needs_redraw = true;
                }
                self.refresh_preview();
            }
            Action::SelectPen => self.select_pen(self.current_thickness),
            Action::SelectThin => self.select_pen(self.thin_thickness),
            Action::SelectThick => self.select_pen(self.thick_thickness),
            Action::NextSticker => self.next_sticker(),
            Action::IncreaseThickness => self.adjust_thickness(self.thickness_step),
            Action::DecreaseThickness => self.adjust_thickness(-self.thickness_step),
        }
    }
}
