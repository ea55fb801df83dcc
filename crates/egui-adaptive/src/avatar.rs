use egui::{
    Align2, CornerRadius, FontId, Image, ImageSource, Response, Sense, Ui, Vec2, Widget,
};

use crate::AdaptiveStyle;

/// Turns a name into initials: the first two uppercase letters if there are
/// any, otherwise the first letter.
pub fn transform_initials(input: &str) -> String {
    if input.chars().any(char::is_uppercase) {
        input.chars().filter(|c| c.is_uppercase()).take(2).collect()
    } else {
        input.chars().filter(|c| c.is_alphabetic()).take(1).collect()
    }
}

/// The font size fitting initials measured at `text_size` into an avatar of
/// `size` points.
pub fn initials_font_size(size: f32, text_size: Vec2) -> f32 {
    // Size of the biggest square fitting inside the circle.
    let square = size / 1.1412;
    // The padding grows with the size; the -5 only matters for small avatars.
    let padding = (size * 0.4 - 5.0).max(0.0);
    let max = square - padding;
    if text_size.x <= 0.0 || max <= 0.0 {
        return max.max(0.0).round();
    }
    let font_size = text_size.y * (max / text_size.x);
    font_size.clamp(0.0, max).round()
}

/// What an avatar is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarKind {
    Label,
    Icon,
    Image,
}

#[derive(Clone, Default)]
pub enum AvatarSource {
    #[default]
    None,
    Image(ImageSource<'static>),
    /// A glyph drawn in place of an image.
    Icon(String),
}

/// A round avatar showing an image, an icon or initials.
pub struct Avatar {
    size: f32,
    source: AvatarSource,
    initials: String,
    initials_fn: fn(&str) -> String,
}

impl Avatar {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            source: AvatarSource::None,
            initials: String::new(),
            initials_fn: transform_initials,
        }
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Shows the image at `uri`, such as `file://avatar.png`. An empty uri
    /// clears the image.
    pub fn set_from_uri(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.source = if uri.is_empty() {
            AvatarSource::None
        } else {
            AvatarSource::Image(ImageSource::Uri(uri.into()))
        };
    }

    pub fn set_from_image(&mut self, source: Option<ImageSource<'static>>) {
        self.source = source.map_or(AvatarSource::None, AvatarSource::Image);
    }

    pub fn set_from_icon_name(&mut self, icon: impl Into<String>) {
        self.source = AvatarSource::Icon(icon.into());
    }

    pub fn source(&self) -> &AvatarSource {
        &self.source
    }

    pub fn set_initials_transformer(&mut self, initials_fn: fn(&str) -> String) {
        self.initials_fn = initials_fn;
    }

    /// Sets the name the initials are taken from.
    pub fn set_initials(&mut self, name: &str) {
        self.initials = (self.initials_fn)(name);
    }

    pub fn initials(&self) -> &str {
        &self.initials
    }

    pub fn kind(&self) -> AvatarKind {
        match &self.source {
            AvatarSource::Image(_) => AvatarKind::Image,
            AvatarSource::Icon(_) => AvatarKind::Icon,
            AvatarSource::None if !self.initials.is_empty() => AvatarKind::Label,
            AvatarSource::None => AvatarKind::Image,
        }
    }
}

impl Widget for &Avatar {
    fn ui(self, ui: &mut Ui) -> Response {
        let style = AdaptiveStyle::load(ui.ctx());
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());
        if !ui.is_rect_visible(rect) {
            return response;
        }

        let radius = self.size / 2.0;
        let painter = ui.painter();
        match (&self.source, self.kind()) {
            (AvatarSource::Image(source), _) => {
                Image::new(source.clone())
                    .corner_radius(CornerRadius::same(radius.round() as u8))
                    .paint_at(ui, rect);
            }
            (AvatarSource::Icon(icon), _) => {
                painter.circle_filled(rect.center(), radius, style.avatar_background);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    icon,
                    FontId::proportional(self.size * 0.5),
                    style.avatar_text,
                );
            }
            (AvatarSource::None, AvatarKind::Label) => {
                painter.circle_filled(rect.center(), radius, style.avatar_background);
                // Measure at a reference size, then scale to fit the circle.
                let reference = FontId::proportional(100.0);
                let measured = painter
                    .layout_no_wrap(self.initials.clone(), reference, style.avatar_text)
                    .size();
                let font_size = initials_font_size(self.size, measured).max(1.0);
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    &self.initials,
                    FontId::proportional(font_size),
                    style.avatar_text,
                );
            }
            (AvatarSource::None, _) => {
                painter.circle_filled(rect.center(), radius, ui.visuals().faint_bg_color);
            }
        }

        response
    }
}
