mod button;
mod gesture;
mod group;
mod layout;
mod observer;
mod settings;
mod view;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use egui::Ui;
use tracing::{debug, trace, warn};

use crate::bin::Bin;
use crate::AdaptiveError;
use observer::Observers;
use settings::validate_widths;

pub use button::{FoldRevealButton, FOLD_REVEAL_BUTTON_ICON};
pub use gesture::{Gesture, GestureRecognizer, PointerSource, SwipeBands, TapTarget, VelocityBand};
pub use group::FoldGroup;
pub use layout::{FoldLayout, Slot};
pub use settings::{FoldSettings, Position};
pub use view::FoldView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Topic {
    Folded,
    Revealed,
}

/// Handle returned by [`Fold::connect_folded`] and [`Fold::connect_revealed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    topic: Topic,
    id: u64,
}

#[derive(Clone)]
enum ShouldFold {
    /// Compare the last measured width against the threshold.
    Width,
    /// Compare the width returned by the function against the threshold.
    WidthFn(Rc<dyn Fn() -> i32>),
    Custom(Rc<dyn Fn() -> bool>),
}

struct FoldState {
    fold_threshold: i32,
    side_width: i32,
    folded: bool,
    revealed: bool,
    measured_width: Option<i32>,
    swipe: SwipeBands,
    layout: FoldLayout,
}

impl FoldState {
    /// Recomputes the side panel visibility. Returns the new visibility if it
    /// changed.
    fn apply_reveal(&mut self) -> Option<bool> {
        let visible = self.revealed || !self.folded;
        let changed = visible != self.layout.side_visible;
        self.layout.update_state(self.folded, visible);
        changed.then_some(visible)
    }
}

struct FoldInner {
    position: Position,
    state: RefCell<FoldState>,
    should_fold: RefCell<ShouldFold>,
    on_fold: Observers<bool>,
    on_reveal: Observers<bool>,
    side: RefCell<Bin>,
    content: RefCell<Bin>,
}

/// A sidebar container that folds its side panel into an overlay drawer when
/// the available width drops below a threshold.
///
/// `Fold` is a cheap handle: clones refer to the same fold. It is meant to be
/// driven from the UI thread only.
#[derive(Clone)]
pub struct Fold {
    inner: Rc<FoldInner>,
}

/// A non-owning reference to a [`Fold`].
#[derive(Clone)]
pub struct WeakFold {
    inner: Weak<FoldInner>,
}

impl WeakFold {
    pub fn upgrade(&self) -> Option<Fold> {
        self.inner.upgrade().map(|inner| Fold { inner })
    }
}

impl Fold {
    /// Creates a fold with the default threshold and side width.
    pub fn new(position: Position) -> Self {
        let settings = FoldSettings {
            position,
            ..Default::default()
        };
        Self::from_valid_settings(settings)
    }

    pub fn with_settings(settings: FoldSettings) -> Result<Self, AdaptiveError> {
        settings.validate()?;
        Ok(Self::from_valid_settings(settings))
    }

    fn from_valid_settings(settings: FoldSettings) -> Self {
        let state = FoldState {
            fold_threshold: settings.fold_threshold,
            side_width: settings.side_width,
            folded: false,
            revealed: false,
            measured_width: None,
            swipe: settings.swipe,
            layout: FoldLayout::new(settings.position),
        };
        Self {
            inner: Rc::new(FoldInner {
                position: settings.position,
                state: RefCell::new(state),
                should_fold: RefCell::new(ShouldFold::Width),
                on_fold: Observers::new(),
                on_reveal: Observers::new(),
                side: RefCell::new(Bin::new()),
                content: RefCell::new(Bin::new()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakFold {
        WeakFold {
            inner: Rc::downgrade(&self.inner),
        }
    }

    pub fn ptr_eq(&self, other: &Fold) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn position(&self) -> Position {
        self.inner.position
    }

    /// Sets the function returning the width compared against the fold
    /// threshold, instead of the measured width.
    pub fn set_width_func(&self, width: impl Fn() -> i32 + 'static) {
        *self.inner.should_fold.borrow_mut() = ShouldFold::WidthFn(Rc::new(width));
    }

    /// Sets the predicate deciding whether the fold should be folded. It
    /// overrides [`Fold::set_width_func`].
    pub fn set_should_fold_func(&self, should_fold: impl Fn() -> bool + 'static) {
        *self.inner.should_fold.borrow_mut() = ShouldFold::Custom(Rc::new(should_fold));
    }

    /// Goes back to comparing the measured width against the threshold.
    pub fn reset_should_fold_func(&self) {
        *self.inner.should_fold.borrow_mut() = ShouldFold::Width;
    }

    /// Sets the width below which the fold folds. The side width must stay
    /// lower than the threshold.
    pub fn set_fold_threshold(&self, threshold: i32) -> Result<(), AdaptiveError> {
        {
            let mut state = self.inner.state.borrow_mut();
            if let Err(err) = validate_widths(threshold, state.side_width) {
                warn!("rejected fold threshold: {err}");
                return Err(err);
            }
            state.fold_threshold = threshold;
        }
        self.update_layout();
        Ok(())
    }

    pub fn fold_threshold(&self) -> i32 {
        self.inner.state.borrow().fold_threshold
    }

    /// Sets the width of the side panel. It must be lower than the fold
    /// threshold.
    pub fn set_side_width(&self, width: i32) -> Result<(), AdaptiveError> {
        {
            let mut state = self.inner.state.borrow_mut();
            if let Err(err) = validate_widths(state.fold_threshold, width) {
                warn!("rejected side width: {err}");
                return Err(err);
            }
            state.side_width = width;
        }
        self.update_layout();
        Ok(())
    }

    pub fn side_width(&self) -> i32 {
        self.inner.state.borrow().side_width
    }

    pub fn set_swipe_bands(&self, bands: SwipeBands) {
        self.inner.state.borrow_mut().swipe = bands;
    }

    pub fn swipe_bands(&self) -> SwipeBands {
        self.inner.state.borrow().swipe
    }

    /// Sets the side panel content.
    pub fn set_side_child(&self, child: impl FnMut(&mut Ui) + 'static) {
        self.inner.side.borrow_mut().set_child(Some(Box::new(child)));
    }

    /// Sets the main content.
    pub fn set_child(&self, child: impl FnMut(&mut Ui) + 'static) {
        self.inner.content.borrow_mut().set_child(Some(Box::new(child)));
    }

    pub fn set_folded(&self, folded: bool) {
        self.set_fold(folded);
    }

    pub fn is_folded(&self) -> bool {
        self.inner.state.borrow().folded
    }

    /// Sets whether the side panel is revealed. It has no visible effect
    /// while the fold is unfolded.
    pub fn set_reveal_side(&self, reveal: bool) {
        let changed = {
            let mut state = self.inner.state.borrow_mut();
            state.revealed = reveal;
            state.apply_reveal()
        };
        if let Some(visible) = changed {
            debug!(visible, "fold side visibility changed");
            self.inner.on_reveal.emit(visible);
        }
    }

    /// Returns true if the side panel is shown. An unfolded side panel is
    /// always shown, whatever was given to [`Fold::set_reveal_side`].
    pub fn side_is_revealed(&self) -> bool {
        self.inner.state.borrow().layout.side_visible
    }

    /// Subscribes `f` to fold state changes.
    pub fn connect_folded(&self, f: impl Fn(bool) + 'static) -> Subscription {
        Subscription {
            topic: Topic::Folded,
            id: self.inner.on_fold.subscribe(f),
        }
    }

    /// Subscribes `f` to side panel visibility changes.
    pub fn connect_revealed(&self, f: impl Fn(bool) + 'static) -> Subscription {
        Subscription {
            topic: Topic::Revealed,
            id: self.inner.on_reveal.subscribe(f),
        }
    }

    pub fn disconnect(&self, subscription: Subscription) -> bool {
        match subscription.topic {
            Topic::Folded => self.inner.on_fold.unsubscribe(subscription.id),
            Topic::Revealed => self.inner.on_reveal.unsubscribe(subscription.id),
        }
    }

    /// Feeds the current available width. Widths that are not positive yet
    /// are ignored, which defers the first evaluation until the host has laid
    /// the fold out.
    pub fn notify_resize(&self, width: i32) {
        {
            let mut state = self.inner.state.borrow_mut();
            if width <= 0 {
                trace!(width, "fold width not available yet");
                return;
            }
            if state.measured_width == Some(width) {
                return;
            }
            state.measured_width = Some(width);
        }
        self.update_layout();
    }

    pub fn measured_width(&self) -> Option<i32> {
        self.inner.state.borrow().measured_width
    }

    /// Whether the fold still waits for its first usable width.
    pub fn needs_measurement(&self) -> bool {
        self.inner.state.borrow().measured_width.is_none()
    }

    /// Re-evaluates the layout. Call it when the width source changed
    /// without a resize notification.
    pub fn queue_resize(&self) {
        self.update_layout();
    }

    /// Returns a snapshot of the current arrangement.
    pub fn layout(&self) -> FoldLayout {
        self.inner.state.borrow().layout.clone()
    }

    /// Applies a recognized gesture. Returns whether the gesture was handled.
    pub fn handle_gesture(&self, gesture: Gesture) -> bool {
        let (folded, visible, swipe) = {
            let state = self.inner.state.borrow();
            (state.folded, state.layout.side_visible, state.swipe)
        };

        match gesture {
            Gesture::Tap {
                target: TapTarget::Content,
                ..
            } if folded && visible => {
                self.set_reveal_side(false);
                true
            }
            Gesture::Swipe {
                velocity,
                source: PointerSource::Touch,
            } if folded && swipe.contains(velocity) => {
                // A positive horizontal velocity opens the drawer, whichever
                // side it is docked to.
                self.set_reveal_side(velocity.x > 0.0);
                true
            }
            gesture => {
                trace!(?gesture, folded, "fold ignored gesture");
                false
            }
        }
    }

    fn should_fold(&self) -> Option<bool> {
        let should_fold = self.inner.should_fold.borrow().clone();
        match should_fold {
            ShouldFold::Width => {
                let state = self.inner.state.borrow();
                let threshold = state.fold_threshold;
                state.measured_width.map(|w| w < threshold)
            }
            ShouldFold::WidthFn(width) => {
                let width = width();
                Some(width < self.fold_threshold())
            }
            ShouldFold::Custom(f) => Some(f()),
        }
    }

    pub(crate) fn update_layout(&self) {
        if let Some(fold) = self.should_fold() {
            self.set_fold(fold);
        }
    }

    fn set_fold(&self, fold: bool) {
        let revealed = {
            let mut state = self.inner.state.borrow_mut();
            if state.folded == fold {
                return;
            }
            state.folded = fold;
            if fold {
                state.layout.move_side_to_overlay();
            } else {
                state.layout.move_side_inline(self.inner.position);
            }
            state.apply_reveal()
        };

        debug!(folded = fold, position = ?self.inner.position, "fold layout changed");
        if let Some(visible) = revealed {
            self.inner.on_reveal.emit(visible);
        }
        self.inner.on_fold.emit(fold);
    }

    /// Runs `f` with the side panel and content bins taken out, so children
    /// may call back into the fold while they are shown.
    pub(crate) fn with_children(&self, f: impl FnOnce(&mut Bin, &mut Bin)) {
        let mut side = Bin::new();
        side.set_child(self.inner.side.borrow_mut().take());
        let mut content = Bin::new();
        content.set_child(self.inner.content.borrow_mut().take());

        f(&mut side, &mut content);

        // A child replaced during `f` wins over the one that was shown.
        let mut side_slot = self.inner.side.borrow_mut();
        if !side_slot.has_child() {
            side_slot.set_child(side.take());
        }
        let mut content_slot = self.inner.content.borrow_mut();
        if !content_slot.has_child() {
            content_slot.set_child(content.take());
        }
    }
}

impl std::fmt::Debug for Fold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Fold")
            .field("position", &self.inner.position)
            .field("fold_threshold", &state.fold_threshold)
            .field("side_width", &state.side_width)
            .field("folded", &state.folded)
            .field("revealed", &state.revealed)
            .field("measured_width", &state.measured_width)
            .finish()
    }
}
