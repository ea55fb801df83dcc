use std::cell::RefCell;
use std::rc::Rc;

use egui::{
    pos2, vec2, CentralPanel, Context, Event, Frame, Modifiers, PointerButton, Pos2, RawInput,
    Rect, TouchDeviceId, TouchId, TouchPhase,
};
use egui_adaptive::{
    Fold, FoldGroup, FoldRevealButton, FoldSettings, FoldView, Gesture, GestureRecognizer,
    PointerSource, Position, TapTarget,
};

fn record(log: &Rc<RefCell<Vec<bool>>>) -> impl Fn(bool) + 'static {
    let log = log.clone();
    move |value| log.borrow_mut().push(value)
}

/// Runs one frame with a fold filling a screen of `width` points.
fn run_frame(ctx: &Context, fold: &Fold, width: f32) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(width, 400.0))),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| {
        CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| {
                ui.add(FoldView::new(fold));
            });
    });
}

#[test]
fn narrowing_window_folds_and_hides_the_side() {
    let fold = Fold::new(Position::Leading);
    let folds = Rc::new(RefCell::new(Vec::new()));
    let reveals = Rc::new(RefCell::new(Vec::new()));
    fold.connect_folded(record(&folds));
    fold.connect_revealed(record(&reveals));

    fold.notify_resize(500);
    assert!(!fold.is_folded());
    assert!(folds.borrow().is_empty());

    fold.notify_resize(300);
    assert!(fold.is_folded());
    assert!(!fold.side_is_revealed());

    fold.set_reveal_side(true);
    assert!(fold.side_is_revealed());

    fold.notify_resize(500);
    assert!(!fold.is_folded());
    assert!(fold.side_is_revealed());

    assert_eq!(*folds.borrow(), [true, false]);
    assert_eq!(*reveals.borrow(), [false, true]);
}

#[test]
fn view_measures_the_available_width() {
    let ctx = Context::default();
    let fold = Fold::new(Position::Leading);
    assert!(fold.needs_measurement());

    run_frame(&ctx, &fold, 1000.0);
    assert_eq!(fold.measured_width(), Some(1000));
    assert!(!fold.is_folded());

    run_frame(&ctx, &fold, 320.0);
    assert_eq!(fold.measured_width(), Some(320));
    assert!(fold.is_folded());
    assert!(fold.layout().side_is_overlaid());
}

fn logging_fold(position: Position) -> (Fold, Rc<RefCell<Vec<&'static str>>>) {
    let fold = Fold::new(position);
    let shown = Rc::new(RefCell::new(Vec::new()));

    let log = shown.clone();
    fold.set_side_child(move |_ui| log.borrow_mut().push("side"));
    let log = shown.clone();
    fold.set_child(move |_ui| log.borrow_mut().push("content"));
    (fold, shown)
}

#[test]
fn view_shows_both_children_when_unfolded() {
    let (fold, shown) = logging_fold(Position::Trailing);
    run_frame(&Context::default(), &fold, 800.0);
    assert_eq!(*shown.borrow(), ["content", "side"]);
}

#[test]
fn view_skips_the_hidden_drawer() {
    let (fold, shown) = logging_fold(Position::Leading);
    run_frame(&Context::default(), &fold, 300.0);
    assert!(fold.is_folded());
    assert_eq!(*shown.borrow(), ["content"]);

    // Children survive being shown and can be shown again.
    fold.set_reveal_side(true);
    shown.borrow_mut().clear();
    let ctx = Context::default();
    run_frame(&ctx, &fold, 300.0);
    assert_eq!(*shown.borrow(), ["content", "side"]);
}

#[test]
fn grouped_folds_fold_together() {
    let folds: Vec<Fold> = (0..3).map(|_| Fold::new(Position::Leading)).collect();
    let hidden = Rc::new(RefCell::new(0));
    for fold in &folds {
        let hidden = hidden.clone();
        fold.connect_revealed(move |visible| {
            if !visible {
                *hidden.borrow_mut() += 1;
            }
        });
    }
    let _group = FoldGroup::bind(&folds);

    folds[0].notify_resize(350);
    assert!(folds.iter().all(Fold::is_folded));
    assert_eq!(*hidden.borrow(), 3);

    folds[0].notify_resize(900);
    assert!(folds.iter().all(|fold| !fold.is_folded()));
}

#[test]
fn reveal_button_follows_its_fold() {
    let fold = Fold::new(Position::Leading);
    let mut button = FoldRevealButton::new();
    button.connect_fold(&fold);
    assert!(!button.is_visible());

    fold.notify_resize(300);
    assert!(button.is_visible());
    assert!(!button.is_active());

    button.toggle();
    assert!(fold.side_is_revealed());
    assert!(button.is_active());

    // A tap on the dimmed content closes the drawer.
    assert!(fold.handle_gesture(Gesture::Tap {
        position: pos2(250.0, 10.0),
        target: TapTarget::Content,
    }));
    assert!(!button.is_active());

    fold.notify_resize(600);
    assert!(!button.is_visible());
}

#[test]
fn touch_swipe_opens_the_drawer() {
    let fold = Fold::with_settings(FoldSettings {
        position: Position::Leading,
        fold_threshold: 500,
        side_width: 250,
        ..Default::default()
    })
    .expect("valid settings");
    fold.notify_resize(480);
    assert!(fold.is_folded());

    let swipe = |x: f32| Gesture::Swipe {
        velocity: vec2(x, 0.0),
        source: PointerSource::Touch,
    };
    assert!(fold.handle_gesture(swipe(1200.0)));
    assert!(fold.side_is_revealed());
    assert!(fold.handle_gesture(swipe(-1200.0)));
    assert!(!fold.side_is_revealed());
}

/// Drives a fold through consecutive frames with synthetic input, 1/60 s
/// apart.
struct Screen {
    ctx: Context,
    width: f32,
    time: f64,
}

impl Screen {
    const DT: f32 = 1.0 / 60.0;

    fn new(width: f32) -> Self {
        Self {
            ctx: Context::default(),
            width,
            time: 0.0,
        }
    }

    fn run(&mut self, events: Vec<Event>, mut run_ui: impl FnMut(&Context)) {
        self.time += f64::from(Self::DT);
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(self.width, 400.0))),
            time: Some(self.time),
            predicted_dt: Self::DT,
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| run_ui(ctx));
    }

    fn frame(&mut self, fold: &Fold, events: Vec<Event>) {
        self.run(events, |ctx| {
            CentralPanel::default()
                .frame(Frame::NONE)
                .show(ctx, |ui| {
                    ui.add(FoldView::new(fold));
                });
        });
    }

    fn click(&mut self, fold: &Fold, pos: Pos2) {
        self.frame(fold, vec![Event::PointerMoved(pos)]);
        self.frame(fold, vec![button(pos, true)]);
        self.frame(fold, vec![button(pos, false)]);
    }

    fn drag(&mut self, fold: &Fold, from: Pos2, by_touch: bool) {
        for events in drag_events(from, by_touch) {
            self.frame(fold, events);
        }
    }
}

/// Input for a left-to-right drag of 40 points per frame over five frames,
/// then a release, by touch or by mouse.
fn drag_events(from: Pos2, by_touch: bool) -> Vec<Vec<Event>> {
    let mut frames = Vec::new();
    let mut pos = from;
    for i in 0..5 {
        pos = from + vec2(40.0 * i as f32, 0.0);
        let mut events = vec![Event::PointerMoved(pos)];
        let phase = if i == 0 {
            events.push(button(pos, true));
            TouchPhase::Start
        } else {
            TouchPhase::Move
        };
        if by_touch {
            events.push(touch(phase, pos));
        }
        frames.push(events);
    }

    let mut release = vec![button(pos, false)];
    if by_touch {
        release.push(touch(TouchPhase::End, pos));
    }
    frames.push(release);
    frames
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn touch(phase: TouchPhase, pos: Pos2) -> Event {
    Event::Touch {
        device_id: TouchDeviceId(0),
        id: TouchId(0),
        phase,
        pos,
        force: None,
    }
}

/// A Leading fold, folded on a 300 point wide screen, with its drawer 200
/// points wide.
fn folded_on_small_screen() -> (Fold, Screen) {
    let fold = Fold::new(Position::Leading);
    fold.notify_resize(300);
    assert!(fold.is_folded());
    (fold, Screen::new(300.0))
}

#[test]
fn click_on_dimmed_content_closes_the_drawer() {
    let (fold, mut screen) = folded_on_small_screen();
    fold.set_reveal_side(true);
    screen.frame(&fold, Vec::new());

    screen.click(&fold, pos2(260.0, 200.0));
    assert!(fold.is_folded());
    assert!(!fold.side_is_revealed());
}

#[test]
fn click_inside_the_drawer_keeps_it_open() {
    let (fold, mut screen) = folded_on_small_screen();
    fold.set_reveal_side(true);
    screen.frame(&fold, Vec::new());

    screen.click(&fold, pos2(100.0, 200.0));
    assert!(fold.side_is_revealed());
}

#[test]
fn touch_drag_reveals_the_drawer() {
    let (fold, mut screen) = folded_on_small_screen();
    screen.frame(&fold, Vec::new());
    assert!(!fold.side_is_revealed());

    screen.drag(&fold, pos2(20.0, 200.0), true);
    assert!(fold.side_is_revealed());
}

#[test]
fn mouse_drag_does_not_reveal_the_drawer() {
    let (fold, mut screen) = folded_on_small_screen();
    screen.frame(&fold, Vec::new());

    screen.drag(&fold, pos2(20.0, 200.0), false);
    assert!(!fold.side_is_revealed());
}

#[test]
fn swipes_are_recognized_only_from_inside_the_area() {
    let area = Rect::from_min_size(pos2(100.0, 0.0), vec2(200.0, 400.0));
    let recognizer = GestureRecognizer::new(egui::Id::new("swipe"), area);
    let mut screen = Screen::new(300.0);
    let mut gestures = Vec::new();

    for from in [pos2(20.0, 200.0), pos2(110.0, 200.0)] {
        for events in drag_events(from, true) {
            screen.run(events, |ctx| gestures.extend(recognizer.swipe(ctx)));
        }
    }

    assert_eq!(gestures.len(), 1);
    let Gesture::Swipe { velocity, source } = gestures[0] else {
        panic!("expected a swipe, got {:?}", gestures[0]);
    };
    assert_eq!(source, PointerSource::Touch);
    assert!(velocity.x > 800.0, "velocity {velocity:?}");
}
