use egui::Ui;

/// A child widget. Containers in this crate hold their children as closures
/// that are invoked every frame with the region they were laid out into.
pub type Child = Box<dyn FnMut(&mut Ui)>;

/// Bin is a container that holds a single child.
#[derive(Default)]
pub struct Bin {
    child: Option<Child>,
}

impl Bin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the child in the bin. If child is `None`, then the bin is cleared.
    pub fn set_child(&mut self, child: Option<Child>) {
        self.child = child;
    }

    pub fn has_child(&self) -> bool {
        self.child.is_some()
    }

    pub fn take(&mut self) -> Option<Child> {
        self.child.take()
    }

    pub fn show(&mut self, ui: &mut Ui) {
        if let Some(child) = self.child.as_mut() {
            child(ui);
        }
    }
}

impl std::fmt::Debug for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bin")
            .field("has_child", &self.has_child())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_child_replaces_and_clears() {
        let mut bin = Bin::new();
        assert!(!bin.has_child());

        bin.set_child(Some(Box::new(|_ui: &mut Ui| {})));
        assert!(bin.has_child());

        bin.set_child(None);
        assert!(!bin.has_child());
    }

    #[test]
    fn take_leaves_bin_empty() {
        let mut bin = Bin::new();
        bin.set_child(Some(Box::new(|_ui: &mut Ui| {})));
        assert!(bin.take().is_some());
        assert!(bin.take().is_none());
    }
}
