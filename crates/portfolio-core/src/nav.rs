//! Navigation bar state: scrolled style and the collapsible link panel.

use std::time::Duration;

use crate::motion::{presets, Pose, Property, Timeline};

/// Vertical scroll, in pixels, past which the header switches style.
pub const SCROLL_THRESHOLD: f32 = 10.0;

#[derive(Debug)]
pub struct NavBar {
    scrolled: bool,
    panel_open: bool,
    header: Timeline,
    panel: Timeline,
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            scrolled: false,
            panel_open: false,
            header: presets::header_scrolled(),
            panel: presets::panel(),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Feed the current vertical scroll offset. Returns true if the header
    /// style flipped.
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        if scrolled {
            self.header.play();
        } else {
            self.header.reverse();
        }
        true
    }

    /// Open or close the panel. Returns the new open state.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        if self.panel_open {
            self.panel.play();
        } else {
            self.panel.reverse();
        }
        self.panel_open
    }

    /// A link was chosen: close the panel if it is open.
    pub fn choose_link(&mut self) -> bool {
        if !self.panel_open {
            return false;
        }
        self.toggle_panel();
        true
    }

    pub fn is_animating(&self) -> bool {
        self.header.is_active() || self.panel.is_active()
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let header = self.header.advance(dt);
        let panel = self.panel.advance(dt);
        header || panel
    }

    /// `opacity` is the background alpha, `accent` the shadow strength.
    pub fn header_pose(&self) -> Pose {
        self.header.pose(presets::HEADER)
    }

    /// Panel height in pixels for a panel whose content is `natural_height` tall.
    pub fn panel_height(&self, natural_height: f32) -> f32 {
        natural_height * self.panel.value(presets::PANEL, Property::Height)
    }

    pub fn panel_opacity(&self) -> f32 {
        self.panel.value(presets::PANEL, Property::Opacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn settle(nav: &mut NavBar) {
        while nav.advance(FRAME) {}
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut nav = NavBar::new();
        assert!(!nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(10.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(400.0));
    }

    #[test]
    fn header_style_follows_scroll() {
        let mut nav = NavBar::new();
        nav.on_scroll(50.0);
        settle(&mut nav);
        assert!((nav.header_pose().opacity - 0.8).abs() < 1e-5);
        assert!((nav.header_pose().accent - 1.0).abs() < 1e-5);

        nav.on_scroll(0.0);
        settle(&mut nav);
        assert!((nav.header_pose().opacity - 0.95).abs() < 1e-5);
    }

    #[test]
    fn panel_rests_at_natural_height_or_zero() {
        let mut nav = NavBar::new();
        assert_eq!(nav.panel_height(240.0), 0.0);

        assert!(nav.toggle_panel());
        settle(&mut nav);
        assert!((nav.panel_height(240.0) - 240.0).abs() < 1e-3);
        assert!((nav.panel_opacity() - 1.0).abs() < 1e-5);

        assert!(!nav.toggle_panel());
        settle(&mut nav);
        assert_eq!(nav.panel_height(240.0), 0.0);
    }

    #[test]
    fn height_and_opacity_move_together() {
        let mut nav = NavBar::new();
        nav.toggle_panel();
        nav.advance(Duration::from_millis(120));
        let height = nav.panel_height(1.0);
        assert!(height > 0.0 && height < 1.0);
        assert!((height - nav.panel_opacity()).abs() < 1e-6);
    }

    #[test]
    fn choosing_a_link_closes_the_panel() {
        let mut nav = NavBar::new();
        assert!(!nav.choose_link());
        nav.toggle_panel();
        assert!(nav.choose_link());
        assert!(!nav.is_panel_open());
    }
}
