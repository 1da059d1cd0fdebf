//=========================================================================
// Info Display
//=========================================================================
//
// Sink for the title/body text shown next to the globe.
//
// The selection coordinator and overlay controller publish text here;
// the embedding UI renders whatever the surface currently holds.
//
//=========================================================================

//=== DisplaySurface ======================================================

/// Text panel the interaction core writes feature facts into.
pub trait DisplaySurface: Send {
    fn show(&mut self, title: &str, body: &str);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
    fn title(&self) -> &str;
    fn body(&self) -> &str;
}

//=== InfoPanel ===========================================================

/// In-memory `DisplaySurface`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InfoPanel {
    title: String,
    body: String,
    visible: bool,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for InfoPanel {
    fn show(&mut self, title: &str, body: &str) {
        self.title.clear();
        self.title.push_str(title);
        self.body.clear();
        self.body.push_str(body);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_text() {
        let mut panel = InfoPanel::new();
        assert!(!panel.is_visible());

        panel.show("Andes", "Longest continental range.");
        panel.show("Alps", "Formed by the African plate.");

        assert!(panel.is_visible());
        assert_eq!(panel.title(), "Alps");
        assert_eq!(panel.body(), "Formed by the African plate.");
    }

    #[test]
    fn hide_keeps_text() {
        let mut panel = InfoPanel::new();
        panel.show("Nile", "");
        panel.hide();
        assert!(!panel.is_visible());
        assert_eq!(panel.title(), "Nile");
    }
}
