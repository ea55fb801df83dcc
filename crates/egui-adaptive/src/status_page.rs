use egui::{Align, Label, Layout, RichText, Ui};

use crate::bin::{Bin, Child};

pub enum Description {
    Text(String),
    Widget(Bin),
}

/// A centred page made of an icon, a title and a description, all optional.
/// Only the parts that were set are shown.
#[derive(Default)]
pub struct StatusPage {
    icon: Option<String>,
    title: Option<String>,
    description: Option<Description>,
}

impl StatusPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_icon_name(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(Description::Text(description.into()));
    }

    /// Shows a widget in place of the description text.
    pub fn set_description_widget(&mut self, child: Child) {
        let mut bin = Bin::new();
        bin.set_child(Some(child));
        self.description = Some(Description::Widget(bin));
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            if let Some(icon) = &self.icon {
                ui.label(RichText::new(icon).size(48.0).weak());
            }
            if let Some(title) = &self.title {
                ui.add(Label::new(RichText::new(title).heading()).truncate())
                    .on_hover_text(title);
            }
            match &mut self.description {
                Some(Description::Text(text)) => {
                    ui.set_max_width(ui.available_width().min(50.0 * 8.0));
                    ui.add(Label::new(text.as_str()).selectable(true).wrap());
                }
                Some(Description::Widget(bin)) => bin.show(ui),
                None => {}
            }
        });
    }
}

impl std::fmt::Debug for StatusPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusPage")
            .field("icon", &self.icon)
            .field("title", &self.title)
            .field(
                "description",
                &match &self.description {
                    Some(Description::Text(text)) => Some(text.as_str()),
                    Some(Description::Widget(_)) => Some("<widget>"),
                    None => None,
                },
            )
            .finish()
    }
}
