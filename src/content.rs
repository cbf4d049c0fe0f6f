//! The page skeleton as typed descriptors. Components render from these
//! instead of discovering structure in the document.

use crate::motion::counter::CounterTarget;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatDescriptor {
    /// Counter target as written in the markup (`"120"`).
    pub raw_target: &'static str,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl StatDescriptor {
    pub fn target(&self) -> CounterTarget {
        self.raw_target.parse().unwrap_or(CounterTarget::Invalid)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub body: &'static str,
}

pub const BRAND: &str = "Consilium Africa";

/// Sections tracked by the scroll-spy, in document order.
pub const SECTION_IDS: &[&str] = &["accueil", "services", "chiffres", "apropos", "contact"];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Accueil", href: "#accueil" },
    NavLink { label: "Services", href: "#services" },
    NavLink { label: "Chiffres", href: "#chiffres" },
    NavLink { label: "À propos", href: "#apropos" },
    NavLink { label: "Contact", href: "#contact" },
];

pub const STATS: &[StatDescriptor] = &[
    StatDescriptor { raw_target: "15", suffix: "+", label: "Années d'expérience" },
    StatDescriptor { raw_target: "120", suffix: "+", label: "Missions accomplies" },
    StatDescriptor { raw_target: "18", suffix: "", label: "Pays couverts" },
    StatDescriptor { raw_target: "98", suffix: "%", label: "Clients satisfaits" },
];

pub const SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        title: "Stratégie & gouvernance",
        body: "Accompagnement des directions dans la définition et le pilotage de leur stratégie.",
    },
    ServiceDescriptor {
        title: "Études de marché",
        body: "Analyses sectorielles et études terrain sur l'ensemble du continent.",
    },
    ServiceDescriptor {
        title: "Transformation organisationnelle",
        body: "Conduite du changement, structuration des équipes et des processus.",
    },
    ServiceDescriptor {
        title: "Financement & investissement",
        body: "Recherche de financements, due diligence et structuration de projets.",
    },
];

pub const TOAST_RECEIVED: &str = "Votre demande a bien été reçue. Nous reviendrons vers vous sous 24h.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::spy::anchor_targets;
    use std::collections::HashSet;

    #[test]
    fn every_anchor_points_at_a_tracked_section() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.iter().any(|id| anchor_targets(link.href, id)),
                "{} has no section",
                link.href
            );
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn stat_targets_are_numeric() {
        assert!(STATS.iter().all(|s| matches!(s.target(), CounterTarget::Value(v) if v > 0)));
        assert_eq!(STATS[1].target(), CounterTarget::Value(120));
    }

    #[test]
    fn non_numeric_target_renders_nan() {
        let stat = StatDescriptor { raw_target: "beaucoup", suffix: "", label: "" };
        assert_eq!(stat.target(), CounterTarget::Invalid);
        assert_eq!(stat.target().to_string(), "NaN");
    }
}
