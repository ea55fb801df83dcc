use egui::{Context, Id, Pos2, Rect, Response, Vec2};

/// Where a tap landed relative to the fold's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    Content,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A recognized gesture, fed into [`Fold::handle_gesture`](crate::Fold::handle_gesture).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap {
        position: Pos2,
        target: TapTarget,
    },
    /// A completed swipe. Velocities are in points per second; a positive
    /// horizontal velocity moves left-to-right.
    Swipe {
        velocity: Vec2,
        source: PointerSource,
    },
}

/// An inclusive range of velocity magnitudes, matched in both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityBand {
    pub min: f32,
    pub max: f32,
}

impl VelocityBand {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, velocity: f32) -> bool {
        (self.min <= velocity && velocity <= self.max)
            || (-self.min >= velocity && velocity >= -self.max)
    }
}

/// Velocity bands a swipe must fall in to be handled by a fold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeBands {
    pub horizontal: VelocityBand,
    pub vertical: VelocityBand,
}

impl SwipeBands {
    pub const DEFAULT_HORIZONTAL: VelocityBand = VelocityBand::new(800.0, f32::INFINITY);
    pub const DEFAULT_VERTICAL: VelocityBand = VelocityBand::new(0.0, 4000.0);

    pub fn contains(&self, velocity: Vec2) -> bool {
        self.horizontal.contains(velocity.x) && self.vertical.contains(velocity.y)
    }
}

impl Default for SwipeBands {
    fn default() -> Self {
        Self {
            horizontal: Self::DEFAULT_HORIZONTAL,
            vertical: Self::DEFAULT_VERTICAL,
        }
    }
}

#[derive(Clone, Copy, Default)]
struct SwipeState {
    tracking: bool,
}

impl SwipeState {
    fn load(ctx: &Context, id: Id) -> Self {
        ctx.data_mut(|d| d.get_temp::<Self>(id).unwrap_or_default())
    }

    fn store(self, ctx: &Context, id: Id) {
        ctx.data_mut(|d| d.insert_temp(id, self));
    }
}

/// Turns egui input into [`Gesture`]s for one fold area.
pub struct GestureRecognizer {
    id: Id,
    area: Rect,
}

impl GestureRecognizer {
    pub fn new(id: Id, area: Rect) -> Self {
        Self { id, area }
    }

    /// Returns a touch swipe that was released this frame, if it started
    /// inside the area.
    pub fn swipe(&self, ctx: &Context) -> Option<Gesture> {
        let mut state = SwipeState::load(ctx, self.id);
        let (pressed, released, touching, origin, velocity) = ctx.input(|i| {
            (
                i.pointer.any_pressed(),
                i.pointer.any_released(),
                i.any_touches(),
                i.pointer.press_origin(),
                i.pointer.velocity(),
            )
        });

        if pressed {
            state.tracking = touching && origin.is_some_and(|pos| self.area.contains(pos));
        }

        let mut gesture = None;
        if released && state.tracking {
            state.tracking = false;
            gesture = Some(Gesture::Swipe {
                velocity,
                source: PointerSource::Touch,
            });
        }

        state.store(ctx, self.id);
        gesture
    }

    /// Classifies a click on the background into a tap gesture.
    pub fn tap(response: &Response, side: Option<Rect>) -> Option<Gesture> {
        if !response.clicked() {
            return None;
        }
        let position = response.interact_pointer_pos()?;
        let target = match side {
            Some(rect) if rect.contains(position) => TapTarget::Side,
            _ => TapTarget::Content,
        };
        Some(Gesture::Tap { position, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_matches_both_signs() {
        let band = VelocityBand::new(800.0, f32::INFINITY);
        assert!(band.contains(850.0));
        assert!(band.contains(-850.0));
        assert!(band.contains(800.0));
        assert!(!band.contains(500.0));
        assert!(!band.contains(-500.0));
        assert!(!band.contains(0.0));
    }

    #[test]
    fn zero_min_band_includes_zero() {
        let band = VelocityBand::new(0.0, 4000.0);
        assert!(band.contains(0.0));
        assert!(band.contains(-10.0));
        assert!(!band.contains(4001.0));
    }

    #[test]
    fn default_bands() {
        let bands = SwipeBands::default();
        assert!(bands.contains(Vec2::new(850.0, 10.0)));
        assert!(!bands.contains(Vec2::new(850.0, 5000.0)));
        assert!(!bands.contains(Vec2::new(500.0, 10.0)));
    }
}
