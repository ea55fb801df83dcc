use egui::{Color32, Context, Id};
use tracing::debug;

/// Colours and timings shared by the adaptive widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveStyle {
    /// Painted over the content while a drawer is open above it.
    pub dimming: Color32,
    /// Drawer background. `None` uses the panel fill of the current visuals.
    pub drawer_fill: Option<Color32>,
    pub avatar_background: Color32,
    pub avatar_text: Color32,
    /// Seconds taken by the drawer slide animation.
    pub reveal_time: f32,
}

impl Default for AdaptiveStyle {
    fn default() -> Self {
        Self {
            dimming: Color32::from_black_alpha(96),
            drawer_fill: None,
            avatar_background: Color32::from_rgb(0x62, 0xa0, 0xea),
            avatar_text: Color32::WHITE,
            reveal_time: 0.2,
        }
    }
}

impl AdaptiveStyle {
    fn id() -> Id {
        Id::new("egui-adaptive-style")
    }

    /// Returns the installed style, or the default one.
    pub fn load(ctx: &Context) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(Self::id()).unwrap_or_default())
    }

    pub fn store(self, ctx: &Context) {
        ctx.data_mut(|d| d.insert_temp(Self::id(), self));
    }
}

/// Installs the default [`AdaptiveStyle`]. Call it once when the application
/// is created; a style stored earlier is kept.
pub fn init(ctx: &Context) {
    let installed = ctx.data_mut(|d| d.get_temp::<AdaptiveStyle>(AdaptiveStyle::id()).is_some());
    if !installed {
        AdaptiveStyle::default().store(ctx);
        debug!("installed default adaptive style");
    }
}
