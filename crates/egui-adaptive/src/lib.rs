//! Adaptive egui widgets for applications that target both desktop and
//! mobile-like viewports.
//!
//! The centrepiece is [`Fold`], a sidebar container that switches between an
//! inline layout and an overlay drawer depending on the available width.
mod avatar;
mod bin;
mod error_label;
mod errors;
mod fold;
mod loadable_page;
mod status_page;
mod style;

pub use avatar::{initials_font_size, transform_initials, Avatar, AvatarKind, AvatarSource};
pub use bin::{Bin, Child};
pub use error_label::{expand_error, short_error, ErrorLabel};
pub use errors::AdaptiveError;
pub use fold::{
    Fold, FoldGroup, FoldLayout, FoldRevealButton, FoldSettings, FoldView, Gesture, GestureRecognizer,
    PointerSource, Position, Slot, Subscription, SwipeBands, TapTarget, VelocityBand, WeakFold,
    FOLD_REVEAL_BUTTON_ICON,
};
pub use loadable_page::{LoadablePage, PageState};
pub use status_page::{Description, StatusPage};
pub use style::{init, AdaptiveStyle};
pub use tokio_util::sync::CancellationToken;
