use egui::{pos2, vec2, Id, Rect, Response, Sense, Ui, UiBuilder, Widget};

use super::{Fold, FoldLayout, GestureRecognizer, Position, Slot};
use crate::AdaptiveStyle;

/// Shows a [`Fold`] in the remaining space of a [`Ui`].
///
/// The view is the fold's host: it feeds the available width every frame,
/// recognizes gestures and lays the children out according to
/// [`Fold::layout`].
pub struct FoldView<'a> {
    fold: &'a Fold,
    id_salt: Id,
}

impl<'a> FoldView<'a> {
    pub fn new(fold: &'a Fold) -> Self {
        Self {
            fold,
            id_salt: Id::new("egui-adaptive-fold"),
        }
    }

    /// Needed when several folds are shown in the same [`Ui`].
    #[inline]
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(salt);
        self
    }
}

impl Widget for FoldView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let id = ui.make_persistent_id(self.id_salt);
        let rect = ui.available_rect_before_wrap();
        let style = AdaptiveStyle::load(ui.ctx());

        self.fold.notify_resize(rect.width().floor() as i32);
        if self.fold.needs_measurement() {
            // Try again next frame, the parent has not been sized yet.
            ui.ctx().request_repaint();
        }

        let response = ui.allocate_rect(rect, Sense::hover());

        if let Some(gesture) = GestureRecognizer::new(id.with("swipe"), rect).swipe(ui.ctx()) {
            self.fold.handle_gesture(gesture);
        }

        let layout = self.fold.layout();
        let side_width = (self.fold.side_width() as f32).min(rect.width());
        let position = self.fold.position();
        let shown = ui.ctx().animate_bool_with_time(
            id.with("reveal"),
            layout.side_visible,
            style.reveal_time,
        );
        let drawer_fill = style.drawer_fill.unwrap_or(ui.visuals().panel_fill);

        self.fold.with_children(|side, content| {
            if !layout.side_is_overlaid() {
                for (slot, slot_rect) in row_rects(rect, &layout, side_width) {
                    match slot {
                        Slot::Side => show_in(ui, slot_rect, id.with("side"), |ui| side.show(ui)),
                        Slot::Content => {
                            show_in(ui, slot_rect, id.with("content"), |ui| content.show(ui))
                        }
                    }
                }
                return;
            }

            show_in(ui, rect, id.with("content"), |ui| content.show(ui));
            if shown <= 0.0 {
                return;
            }

            let side_rect = drawer_rect(rect, side_width, position, shown);
            if layout.dimming {
                ui.painter()
                    .rect_filled(rect, 0.0, style.dimming.gamma_multiply(shown));
            }
            if !layout.content_can_target {
                let background = ui.interact(rect, id.with("background"), Sense::click());
                if let Some(gesture) = GestureRecognizer::tap(&background, Some(side_rect)) {
                    self.fold.handle_gesture(gesture);
                }
            }
            ui.painter().rect_filled(side_rect, 0.0, drawer_fill);
            show_in(ui, side_rect, id.with("side"), |ui| side.show(ui));
        });

        response
    }
}

fn show_in(ui: &mut Ui, rect: Rect, id: Id, add_contents: impl FnOnce(&mut Ui)) {
    let mut child = ui.new_child(
        UiBuilder::new()
            .id_salt(id)
            .max_rect(rect)
            .layout(*ui.layout()),
    );
    child.set_clip_rect(rect.intersect(ui.clip_rect()));
    add_contents(&mut child);
}

/// Splits `rect` between the inline children, in row order.
fn row_rects(rect: Rect, layout: &FoldLayout, side_width: f32) -> Vec<(Slot, Rect)> {
    let side_inline = layout.row().any(|slot| slot == Slot::Side);
    let mut x = rect.left();
    layout
        .row()
        .map(|slot| {
            let width = match slot {
                Slot::Side => side_width,
                Slot::Content if side_inline => (rect.width() - side_width).max(0.0),
                Slot::Content => rect.width(),
            };
            let slot_rect = Rect::from_min_size(pos2(x, rect.top()), vec2(width, rect.height()));
            x += width;
            (slot, slot_rect)
        })
        .collect()
}

/// The drawer rectangle, slid in from its edge by `shown` (0 to 1).
fn drawer_rect(rect: Rect, width: f32, position: Position, shown: f32) -> Rect {
    let left = match position {
        Position::Leading => rect.left() - width * (1.0 - shown),
        Position::Trailing => rect.right() - width * shown,
    };
    Rect::from_min_size(pos2(left, rect.top()), vec2(width, rect.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::from_min_size(pos2(10.0, 0.0), vec2(600.0, 300.0))
    }

    #[test]
    fn inline_rows_follow_position() {
        let leading = row_rects(area(), &FoldLayout::new(Position::Leading), 200.0);
        assert_eq!(leading[0].0, Slot::Side);
        assert_eq!(leading[0].1.left(), 10.0);
        assert_eq!(leading[0].1.width(), 200.0);
        assert_eq!(leading[1].1.left(), 210.0);
        assert_eq!(leading[1].1.width(), 400.0);

        let trailing = row_rects(area(), &FoldLayout::new(Position::Trailing), 200.0);
        assert_eq!(trailing[0].0, Slot::Content);
        assert_eq!(trailing[1].1.left(), 410.0);
    }

    #[test]
    fn drawer_slides_from_its_edge() {
        let hidden = drawer_rect(area(), 200.0, Position::Leading, 0.0);
        assert_eq!(hidden.right(), 10.0);
        let open = drawer_rect(area(), 200.0, Position::Leading, 1.0);
        assert_eq!(open.left(), 10.0);

        let hidden = drawer_rect(area(), 200.0, Position::Trailing, 0.0);
        assert_eq!(hidden.left(), 610.0);
        let open = drawer_rect(area(), 200.0, Position::Trailing, 1.0);
        assert_eq!(open.right(), 610.0);
    }

    #[test]
    fn folded_layout_has_no_inline_side() {
        let mut layout = FoldLayout::new(Position::Leading);
        layout.move_side_to_overlay();
        let rows = row_rects(area(), &layout, 200.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, Slot::Content);
        assert_eq!(rows[0].1, area());
    }
}
