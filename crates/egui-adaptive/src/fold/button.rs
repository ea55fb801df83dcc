use std::cell::Cell;
use std::rc::Rc;

use egui::{Button, Response, Sense, Ui, Vec2, Widget};

use super::{Fold, Subscription, WeakFold};

/// The default icon of a [`FoldRevealButton`].
pub const FOLD_REVEAL_BUTTON_ICON: &str = "☰";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ButtonState {
    visible: bool,
    active: bool,
    sensitive: bool,
}

impl ButtonState {
    fn from_fold(fold: &Fold) -> Self {
        let folded = fold.is_folded();
        Self {
            visible: folded,
            active: fold.side_is_revealed(),
            sensitive: folded,
        }
    }
}

/// A toggle button that reveals or hides a fold's side panel. It is hidden
/// and disabled until connected to a fold, and while that fold is unfolded.
pub struct FoldRevealButton {
    icon: String,
    state: Rc<Cell<ButtonState>>,
    fold: Option<(WeakFold, [Subscription; 2])>,
}

impl Default for FoldRevealButton {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldRevealButton {
    pub fn new() -> Self {
        Self {
            icon: FOLD_REVEAL_BUTTON_ICON.to_owned(),
            state: Rc::new(Cell::new(ButtonState::default())),
            fold: None,
        }
    }

    pub fn set_icon_name(&mut self, icon: impl Into<String>) {
        self.icon = icon.into();
    }

    pub fn icon_name(&self) -> &str {
        &self.icon
    }

    /// Binds the button to `fold`, replacing any previous binding.
    pub fn connect_fold(&mut self, fold: &Fold) {
        self.disconnect();
        self.state.set(ButtonState::from_fold(fold));

        let state = self.state.clone();
        let on_reveal = fold.connect_revealed(move |revealed| {
            let mut s = state.get();
            s.active = revealed;
            state.set(s);
        });

        let state = self.state.clone();
        let weak = fold.downgrade();
        let on_fold = fold.connect_folded(move |_| {
            if let Some(fold) = weak.upgrade() {
                state.set(ButtonState::from_fold(&fold));
            }
        });

        self.fold = Some((fold.downgrade(), [on_reveal, on_fold]));
    }

    pub fn disconnect(&mut self) {
        if let Some((fold, subs)) = self.fold.take() {
            if let Some(fold) = fold.upgrade() {
                for sub in subs {
                    fold.disconnect(sub);
                }
            }
        }
        self.state.set(ButtonState::default());
    }

    pub fn is_visible(&self) -> bool {
        self.state.get().visible
    }

    pub fn is_active(&self) -> bool {
        self.state.get().active
    }

    pub fn is_sensitive(&self) -> bool {
        self.state.get().sensitive
    }

    /// Acts as if the button was clicked.
    pub fn toggle(&self) {
        let state = self.state.get();
        if !state.sensitive {
            return;
        }
        if let Some(fold) = self.fold.as_ref().and_then(|(fold, _)| fold.upgrade()) {
            fold.set_reveal_side(!state.active);
        }
    }
}

impl Widget for &FoldRevealButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let state = self.state.get();
        if !state.visible {
            return ui.allocate_response(Vec2::ZERO, Sense::hover());
        }

        let response = ui.add_enabled(
            state.sensitive,
            Button::new(self.icon.as_str()).selected(state.active),
        );
        if response.clicked() {
            self.toggle();
        }
        response
    }
}
