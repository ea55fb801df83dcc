use std::error::Error;

use egui::{Button, Label, Response, Ui, Widget};

/// The part of an error message before its first `": "`.
pub fn short_error(message: &str) -> &str {
    message.split(": ").next().unwrap_or_default()
}

/// Lays a `"context: cause: root cause"` message out as an indented tree,
/// leaving out the outermost context when there is more than one part.
pub fn expand_error(message: &str) -> String {
    let mut parts: Vec<&str> = message.split_inclusive(": ").collect();
    if parts.len() > 1 {
        parts.remove(0);
    }

    let last = parts.len().saturating_sub(1);
    let mut out = String::with_capacity(message.len() * 2);
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&"    ".repeat(i));
        out.push_str("└ ");

        let part = part.trim();
        out.push_str(&capitalize(part));
        if i == last {
            if !part.ends_with('.') {
                out.push('.');
            }
        } else if !part.ends_with(':') {
            out.push(':');
        }
    }
    out
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Joins an error with its sources as `"error: source: root"`. Sources
/// already spelled out by their parent's message are not repeated.
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// A label showing the short form of an error, which expands into the full
/// error when clicked.
#[derive(Debug, Clone)]
pub struct ErrorLabel {
    short: String,
    full: String,
    revealed: bool,
    pub revealed_icon: String,
    pub collapsed_icon: String,
}

impl ErrorLabel {
    pub fn new(err: &dyn Error) -> Self {
        let message = error_chain(err);
        Self::full(
            format!("Error: {}", short_error(&message)),
            expand_error(&message),
        )
    }

    pub fn full(short: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            full: full.into(),
            revealed: false,
            revealed_icon: "⏷".to_owned(),
            collapsed_icon: "⏵".to_owned(),
        }
    }

    pub fn short_text(&self) -> &str {
        &self.short
    }

    pub fn full_text(&self) -> &str {
        &self.full
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    pub fn toggle(&mut self) {
        self.revealed = !self.revealed;
    }

    fn icon(&self) -> &str {
        if self.revealed {
            &self.revealed_icon
        } else {
            &self.collapsed_icon
        }
    }
}

impl Widget for &mut ErrorLabel {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            let short = ui.add(
                Button::new(format!("{} {}", self.icon(), self.short))
                    .frame(false)
                    .wrap(),
            );
            if short.clicked() {
                self.toggle();
            }
            if self.revealed {
                ui.add(Label::new(&self.full).selectable(true).wrap());
            }
            short
        })
        .inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    const MESSAGE: &str = "failed to open hello.txt: filesystem error: missing hard drive";

    #[test]
    fn short_takes_first_part() {
        assert_eq!(short_error(MESSAGE), "failed to open hello.txt");
        assert_eq!(short_error("boom"), "boom");
        assert_eq!(short_error(""), "");
    }

    #[test]
    fn expand_builds_an_indented_tree() {
        assert_eq!(
            expand_error(MESSAGE),
            "└ Filesystem error:\n    └ Missing hard drive."
        );
    }

    #[test]
    fn expand_single_part() {
        assert_eq!(expand_error("boom"), "└ Boom.");
        assert_eq!(expand_error("already done."), "└ Already done.");
        assert_eq!(expand_error(""), "");
    }

    #[test]
    fn expand_keeps_existing_colons() {
        assert_eq!(expand_error("a: b:: c"), "└ B::\n    └ C.");
    }

    #[test]
    fn label_from_error_chain() {
        let err = std::fs::File::open("/definitely/not/here")
            .context("filesystem error")
            .context("failed to open hello.txt")
            .unwrap_err();

        let label = ErrorLabel::new(&*err);
        assert_eq!(label.short_text(), "Error: failed to open hello.txt");
        assert!(label.full_text().starts_with("└ Filesystem error:\n    └ "));
        assert!(label.full_text().ends_with('.'));
        assert!(!label.is_revealed());
    }

    #[test]
    fn chain_skips_repeated_sources() {
        #[derive(Debug)]
        struct Outer(std::io::Error);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "read failed: {}", self.0)
            }
        }
        impl Error for Outer {
            fn source(&self) -> Option<&(dyn Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::other("disk gone"));
        assert_eq!(error_chain(&err), "read failed: disk gone");
    }

    #[test]
    fn toggle_reveals_full_text() {
        let mut label = ErrorLabel::full("Error: x", "└ X.");
        label.toggle();
        assert!(label.is_revealed());
        assert_eq!(label.icon(), "⏷");
        label.set_revealed(false);
        assert_eq!(label.icon(), "⏵");
    }
}
