//! Static display metadata for each provider.
//!
//! One read-only entry per `ProviderKey`: human-readable name, icon glyph,
//! and the accent color pair that stands in for the original gradient.

use ratatui::style::Color;

use datacard_types::{ProviderKey, UiOptions};

/// Display metadata for one provider. Defined once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct ProviderDisplay {
    pub name: &'static str,
    pub short_name: &'static str,
    icon: &'static str,
    icon_ascii: &'static str,
    accent: Color,
    accent_dim: Color,
    /// Named-color stand-in used when high contrast is requested.
    accent_basic: Color,
}

impl ProviderDisplay {
    #[must_use]
    pub fn icon(&self, options: UiOptions) -> &'static str {
        if options.ascii_only {
            self.icon_ascii
        } else {
            self.icon
        }
    }

    #[must_use]
    pub fn accent(&self, options: UiOptions) -> Color {
        if options.high_contrast {
            self.accent_basic
        } else {
            self.accent
        }
    }

    #[must_use]
    pub fn accent_dim(&self, options: UiOptions) -> Color {
        if options.high_contrast {
            self.accent_basic
        } else {
            self.accent_dim
        }
    }
}

const PROFESSIONAL_NETWORK: ProviderDisplay = ProviderDisplay {
    name: "Professional Network Data Provider",
    short_name: "Professional",
    icon: "◆",
    icon_ascii: "@",
    accent: Color::Rgb(59, 130, 246),
    accent_dim: Color::Rgb(37, 99, 235),
    accent_basic: Color::Blue,
};

const SOCIAL_NETWORK: ProviderDisplay = ProviderDisplay {
    name: "Social Network Data Provider",
    short_name: "Social",
    icon: "✉",
    icon_ascii: "#",
    accent: Color::Rgb(56, 189, 248),
    accent_dim: Color::Rgb(14, 165, 233),
    accent_basic: Color::Cyan,
};

const REAL_ESTATE: ProviderDisplay = ProviderDisplay {
    name: "Real Estate Data Provider",
    short_name: "Real",
    icon: "⌂",
    icon_ascii: "H",
    accent: Color::Rgb(16, 185, 129),
    accent_dim: Color::Rgb(5, 150, 105),
    accent_basic: Color::Green,
};

const RETAIL: ProviderDisplay = ProviderDisplay {
    name: "Retail Data Provider",
    short_name: "Retail",
    icon: "▣",
    icon_ascii: "R",
    accent: Color::Rgb(249, 115, 22),
    accent_dim: Color::Rgb(234, 88, 12),
    accent_basic: Color::Yellow,
};

const FINANCE: ProviderDisplay = ProviderDisplay {
    name: "Finance Data Provider",
    short_name: "Finance",
    icon: "↗",
    icon_ascii: "$",
    accent: Color::Rgb(168, 85, 247),
    accent_dim: Color::Rgb(147, 51, 234),
    accent_basic: Color::Magenta,
};

const JOBS: ProviderDisplay = ProviderDisplay {
    name: "Jobs Data Provider",
    short_name: "Jobs",
    icon: "◈",
    icon_ascii: "J",
    accent: Color::Rgb(99, 102, 241),
    accent_dim: Color::Rgb(79, 70, 229),
    accent_basic: Color::Blue,
};

// Shares the jobs accent pair, matching the original theme.
const WEATHER: ProviderDisplay = ProviderDisplay {
    name: "Weather Data Provider",
    short_name: "Weather",
    icon: "☁",
    icon_ascii: "W",
    accent: Color::Rgb(99, 102, 241),
    accent_dim: Color::Rgb(79, 70, 229),
    accent_basic: Color::Cyan,
};

/// Look up the display entry for a provider key. Total over the enumeration.
#[must_use]
pub fn provider_display(key: ProviderKey) -> &'static ProviderDisplay {
    match key {
        ProviderKey::ProfessionalNetwork => &PROFESSIONAL_NETWORK,
        ProviderKey::SocialNetwork => &SOCIAL_NETWORK,
        ProviderKey::RealEstate => &REAL_ESTATE,
        ProviderKey::Retail => &RETAIL,
        ProviderKey::Finance => &FINANCE,
        ProviderKey::Jobs => &JOBS,
        ProviderKey::Weather => &WEATHER,
    }
}

#[cfg(test)]
mod tests {
    use datacard_types::{ProviderKey, UiOptions};

    use super::provider_display;

    #[test]
    fn every_key_has_a_display_entry() {
        for key in ProviderKey::ALL {
            let display = provider_display(key);
            assert!(!display.name.is_empty());
            assert!(!display.short_name.is_empty());
            assert!(!display.icon(UiOptions::default()).is_empty());
        }
    }

    #[test]
    fn ascii_icons_are_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        for key in ProviderKey::ALL {
            assert!(provider_display(key).icon(options).is_ascii());
        }
    }

    #[test]
    fn names_are_unique() {
        for a in ProviderKey::ALL {
            for b in ProviderKey::ALL {
                if a != b {
                    assert_ne!(provider_display(a).name, provider_display(b).name);
                }
            }
        }
    }
}
