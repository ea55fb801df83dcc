use std::collections::VecDeque;

use super::Position;

/// A child slot of a [`Fold`](crate::Fold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Side,
    Content,
}

/// The arrangement of a fold's children, mutated only by the fold itself.
///
/// `row` holds the children laid out side by side. When folded, the side
/// panel moves out of the row and into `overlays`, which are stacked above
/// the row in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldLayout {
    row: VecDeque<Slot>,
    overlays: Vec<Slot>,
    measure_overlay: bool,
    /// Whether the side panel is effectively shown.
    pub side_visible: bool,
    /// Whether the dimming layer over the content is present.
    pub dimming: bool,
    /// Whether the content can receive pointer input.
    pub content_can_target: bool,
    /// Set while the side panel is shown, inline or as a drawer.
    pub open: bool,
}

impl FoldLayout {
    pub(crate) fn new(position: Position) -> Self {
        let row = match position {
            Position::Leading => VecDeque::from([Slot::Side, Slot::Content]),
            Position::Trailing => VecDeque::from([Slot::Content, Slot::Side]),
        };
        Self {
            row,
            overlays: Vec::new(),
            measure_overlay: false,
            side_visible: true,
            dimming: false,
            content_can_target: true,
            open: true,
        }
    }

    pub fn row(&self) -> impl Iterator<Item = Slot> + '_ {
        self.row.iter().copied()
    }

    pub fn overlays(&self) -> &[Slot] {
        &self.overlays
    }

    /// Whether the overlaid side panel participates in size measurement.
    pub fn measures_overlay(&self) -> bool {
        self.measure_overlay
    }

    pub fn side_is_overlaid(&self) -> bool {
        self.overlays.contains(&Slot::Side)
    }

    pub(crate) fn move_side_to_overlay(&mut self) {
        self.row.retain(|slot| *slot != Slot::Side);
        if !self.side_is_overlaid() {
            self.overlays.push(Slot::Side);
        }
        self.measure_overlay = true;
    }

    pub(crate) fn move_side_inline(&mut self, position: Position) {
        self.overlays.retain(|slot| *slot != Slot::Side);
        self.measure_overlay = false;
        if self.row.contains(&Slot::Side) {
            return;
        }
        match position {
            Position::Leading => self.row.push_front(Slot::Side),
            Position::Trailing => self.row.push_back(Slot::Side),
        }
    }

    pub(crate) fn update_state(&mut self, folded: bool, side_visible: bool) {
        self.side_visible = side_visible;
        self.content_can_target = !folded || !side_visible;
        self.dimming = folded;
        self.open = side_visible;
    }
}
