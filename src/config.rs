use log::{debug, warn, Level};
use serde::Deserialize;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block in index.html
/// that overrides any of the tunables below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Scroll offset (px) past which the navbar is marked `scrolled`.
    pub navbar_threshold: f64,
    /// Offset (px) added to scrollY before resolving the active section.
    pub spy_lookahead: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    pub stats_threshold: f64,
    pub counter_stagger_ms: u32,
    pub counter_duration_ms: f64,
    pub submit_delay_ms: u32,
    pub reset_delay_ms: u32,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,
    pub parallax_factor: f64,
    /// Viewports at or below this width (px) skip parallax and card glow.
    pub desktop_breakpoint: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_threshold: 50.0,
            spy_lookahead: 120.0,
            reveal_threshold: 0.12,
            reveal_root_margin: "0px 0px -40px 0px".to_string(),
            reveal_stagger_ms: 80,
            stats_threshold: 0.4,
            counter_stagger_ms: 150,
            counter_duration_ms: 1800.0,
            submit_delay_ms: 1600,
            reset_delay_ms: 3500,
            toast_display_ms: 5000,
            toast_exit_ms: 400,
            parallax_factor: 0.15,
            desktop_breakpoint: 768.0,
        }
    }
}

impl PageConfig {
    /// Reads the inline config block, falling back to defaults when it is
    /// absent or malformed.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => {
                debug!("no #{} block, using default page config", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring malformed page config: {}", e);
                Self::default()
            }
        }
    }

    pub fn is_desktop(&self, viewport_width: f64) -> bool {
        viewport_width > self.desktop_breakpoint
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = PageConfig::from_json(r#"{ "navbar_threshold": 80, "toast_display_ms": 3000 }"#);
        assert_eq!(config.navbar_threshold, 80.0);
        assert_eq!(config.toast_display_ms, 3000);
        assert_eq!(config.submit_delay_ms, 1600);
        assert_eq!(config.reveal_root_margin, "0px 0px -40px 0px");
    }

    #[test]
    fn malformed_or_empty_config_falls_back() {
        assert_eq!(PageConfig::from_json("{ not json"), PageConfig::default());
        assert_eq!(PageConfig::from_json("   "), PageConfig::default());
    }

    #[test]
    fn desktop_breakpoint_is_exclusive() {
        let config = PageConfig::default();
        assert!(!config.is_desktop(768.0));
        assert!(config.is_desktop(769.0));
        assert!(!config.is_desktop(375.0));
    }
}
