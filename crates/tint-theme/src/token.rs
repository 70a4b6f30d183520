//! The fixed token namespace.
//!
//! External stylesheets reference these names, so both the set and the order
//! are a wire contract: never rename, never reorder, only append.

use std::fmt;

/// One named slot in the derived palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    // ── Page ──────────────────────────────────────────────────
    Background,
    BackgroundForeground,
    Foreground,

    // ── Surfaces ──────────────────────────────────────────────
    Card,
    CardForeground,
    Popover,
    PopoverForeground,

    // ── Brand ─────────────────────────────────────────────────
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    /// Danger/error lane, always hue-shifted away from primary.
    Destructive,
    DestructiveForeground,

    // ── Controls ──────────────────────────────────────────────
    Border,
    Input,
    Ring,

    // ── Categorical chart colors ──────────────────────────────
    Chart1,
    Chart2,
    Chart3,
    Chart4,
    Chart5,

    // ── Sidebar mini-theme ────────────────────────────────────
    Sidebar,
    SidebarForeground,
    SidebarPrimary,
    SidebarPrimaryForeground,
    SidebarAccent,
    SidebarAccentForeground,
    SidebarBorder,
    SidebarRing,
}

impl Token {
    /// Number of tokens in the namespace.
    pub const COUNT: usize = 33;

    /// Every token, in wire order.
    #[rustfmt::skip]
    pub const ALL: [Self; Self::COUNT] = [
        Self::Background, Self::BackgroundForeground, Self::Foreground,
        Self::Card, Self::CardForeground, Self::Popover, Self::PopoverForeground,
        Self::Primary, Self::PrimaryForeground, Self::Secondary, Self::SecondaryForeground,
        Self::Muted, Self::MutedForeground, Self::Accent, Self::AccentForeground,
        Self::Destructive, Self::DestructiveForeground,
        Self::Border, Self::Input, Self::Ring,
        Self::Chart1, Self::Chart2, Self::Chart3, Self::Chart4, Self::Chart5,
        Self::Sidebar, Self::SidebarForeground,
        Self::SidebarPrimary, Self::SidebarPrimaryForeground,
        Self::SidebarAccent, Self::SidebarAccentForeground,
        Self::SidebarBorder, Self::SidebarRing,
    ];

    /// Flat token name, e.g. `primary-foreground`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::BackgroundForeground => "background-foreground",
            Self::Foreground => "foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
            Self::Chart1 => "chart-1",
            Self::Chart2 => "chart-2",
            Self::Chart3 => "chart-3",
            Self::Chart4 => "chart-4",
            Self::Chart5 => "chart-5",
            Self::Sidebar => "sidebar",
            Self::SidebarForeground => "sidebar-foreground",
            Self::SidebarPrimary => "sidebar-primary",
            Self::SidebarPrimaryForeground => "sidebar-primary-foreground",
            Self::SidebarAccent => "sidebar-accent",
            Self::SidebarAccentForeground => "sidebar-accent-foreground",
            Self::SidebarBorder => "sidebar-border",
            Self::SidebarRing => "sidebar-ring",
        }
    }

    /// Style property name written to a live target, e.g. `--primary-foreground`.
    #[must_use]
    pub fn property(self) -> String {
        format!("--{}", self.name())
    }

    /// Position in [`Token::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a token by flat name or property name (`--` prefix optional).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.strip_prefix("--").unwrap_or(name);
        Self::ALL.iter().find(|t| t.name() == name).copied()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, token) in Token::ALL.iter().enumerate() {
            assert_eq!(token.index(), i, "{token} out of order");
        }
    }

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = Token::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), Token::COUNT);
    }

    #[test]
    #[rustfmt::skip]
    fn wire_order_is_stable() {
        let names: Vec<_> = Token::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            [
                "background", "background-foreground", "foreground",
                "card", "card-foreground", "popover", "popover-foreground",
                "primary", "primary-foreground", "secondary", "secondary-foreground",
                "muted", "muted-foreground", "accent", "accent-foreground",
                "destructive", "destructive-foreground", "border", "input", "ring",
                "chart-1", "chart-2", "chart-3", "chart-4", "chart-5",
                "sidebar", "sidebar-foreground", "sidebar-primary",
                "sidebar-primary-foreground", "sidebar-accent",
                "sidebar-accent-foreground", "sidebar-border", "sidebar-ring",
            ]
        );
    }

    #[test]
    fn property_has_css_prefix() {
        assert_eq!(Token::SidebarRing.property(), "--sidebar-ring");
        assert_eq!(Token::Chart1.to_string(), "chart-1");
    }

    #[test]
    fn from_name_accepts_both_forms() {
        assert_eq!(Token::from_name("primary-foreground"), Some(Token::PrimaryForeground));
        assert_eq!(Token::from_name("--chart-5"), Some(Token::Chart5));
        assert_eq!(Token::from_name("radius"), None);
    }
}
