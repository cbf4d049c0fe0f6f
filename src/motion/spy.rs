use crate::content::NavLink;

/// Vertical extent of a page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Section containing `scroll_y + lookahead`, if any.
pub fn containing_section(sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> Option<&str> {
    let position = scroll_y + lookahead;
    sections
        .iter()
        .find(|section| section.contains(position))
        .map(|section| section.id.as_str())
}

/// Remembers the active section across scroll ticks. Positions that fall
/// between or outside all sections keep the previous highlight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Returns true when the highlight changed.
    pub fn update(&mut self, sections: &[SectionBounds], scroll_y: f64, lookahead: f64) -> bool {
        match containing_section(sections, scroll_y, lookahead) {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

/// Whether a nav anchor's href points at `section_id`.
pub fn anchor_targets(href: &str, section_id: &str) -> bool {
    href.strip_prefix('#') == Some(section_id)
}

/// Per-link highlight flags for the nav bar; only the link pointing at
/// `active` is set.
pub fn highlighted(links: &[NavLink], active: Option<&str>) -> Vec<bool> {
    let mut found = false;
    links
        .iter()
        .map(|link| {
            let on = !found && active.map_or(false, |id| anchor_targets(link.href, id));
            found |= on;
            on
        })
        .collect()
}
