//! Scroll and pointer driven style values.

/// Everything the mobile menu toggles, derived from its open flag so the
/// four effects always move together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEffects {
    pub panel_open: bool,
    pub hamburger_active: bool,
    pub overlay_shown: bool,
    pub scroll_locked: bool,
}

impl MenuEffects {
    pub fn for_state(open: bool) -> Self {
        Self {
            panel_open: open,
            hamburger_active: open,
            overlay_shown: open,
            scroll_locked: open,
        }
    }

    /// Inline `overflow` value for the document body.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            ""
        }
    }
}

/// One-shot trigger: `fire` reports true the first time only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Delay before a reveal element at `sibling_index` becomes visible.
pub fn stagger_delay(sibling_index: usize, step_ms: u32) -> u32 {
    (sibling_index as u32).saturating_mul(step_ms)
}

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Pointer position relative to a card's top-left corner. Mouse events
/// report whole CSS pixels, so the card origin is snapped to the same grid.
pub fn relative_point(client_x: i32, client_y: i32, left: f64, top: f64) -> (f64, f64) {
    (f64::from(client_x) - left.round(), f64::from(client_y) - top.round())
}

pub fn glow_background(x: f64, y: f64) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(200,168,75,0.04) 0%, #fff 60%)",
        x, y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_open_then_close_restores_initial_state() {
        let initial = MenuEffects::for_state(false);
        let open = MenuEffects::for_state(true);
        assert!(open.panel_open && open.hamburger_active && open.overlay_shown && open.scroll_locked);
        assert_eq!(open.body_overflow(), "hidden");
        assert_eq!(MenuEffects::for_state(false), initial);
        assert_eq!(initial.body_overflow(), "");
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = Latch::default();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(latch.has_fired());
        // a second intersection must not restart anything
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!navbar_scrolled(0.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(50.5, 50.0));
        assert!(navbar_scrolled(2000.0, 50.0));
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0, 80), 0);
        assert_eq!(stagger_delay(1, 80), 80);
        assert_eq!(stagger_delay(5, 80), 400);
    }

    #[test]
    fn parallax_drifts_slower_than_content() {
        assert_eq!(parallax_transform(0.0, 0.15), "translateY(0px)");
        assert_eq!(parallax_transform(200.0, 0.25), "translateY(50px)");
    }

    #[test]
    fn glow_is_centered_on_pointer() {
        let (x, y) = relative_point(340, 512, 300.0, 480.0);
        assert_eq!((x, y), (40.0, 32.0));
        assert_eq!(
            glow_background(x, y),
            "radial-gradient(circle at 40px 32px, rgba(200,168,75,0.04) 0%, #fff 60%)"
        );
    }

    #[test]
    fn glow_offset_stays_on_whole_pixels_for_fractional_cards() {
        assert_eq!(relative_point(340, 512, 299.6, 480.4), (40.0, 32.0));
        assert_eq!(relative_point(340, 512, 300.25, 479.75), (40.0, 32.0));
        assert_eq!(
            glow_background(relative_point(10, 10, 0.5, 0.4).0, 0.0),
            "radial-gradient(circle at 9px 0px, rgba(200,168,75,0.04) 0%, #fff 60%)"
        );
    }
}
