//! Design tokens shared by every component.
//!
//! Colors live here once and reach the page two ways: as CSS custom
//! properties emitted into the document `<style>` (see [`css_variables`]),
//! and as `var(--e9-*)` references built with [`Token::var`] for the few
//! inline styles that depend on data (accent borders, bar segment fills).
//!
//! ```rust
//! use e9th_site::tokens::{Accent, Token};
//!
//! assert_eq!(Token::Background.value(), "#0B0B10");
//! assert_eq!(Accent::Violet.token(), Token::Violet);
//! assert_eq!(Token::Cyan.var(), "var(--e9-cyan)");
//! ```

use serde::Serialize;

/// Named theme values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// Page background, also the nav and section fill
    Background,
    /// Translucent background behind the fixed nav
    NavBackground,
    /// Primary brand color
    Violet,
    /// Secondary brand color
    Cyan,
    /// Body copy and neutral accent
    Silver,
    /// Headings
    White,
    /// Glass card fill
    Surface,
    /// Empty track behind the allocation bar
    Track,
    /// Hairline borders for the nav and footer
    Hairline,
    /// Roadmap connector line
    Connector,
    /// Glow around value-proposition images
    Glow,
    /// "In Progress" badge fill
    BadgeFill,
}

impl Token {
    pub const ALL: [Token; 12] = [
        Token::Background,
        Token::NavBackground,
        Token::Violet,
        Token::Cyan,
        Token::Silver,
        Token::White,
        Token::Surface,
        Token::Track,
        Token::Hairline,
        Token::Connector,
        Token::Glow,
        Token::BadgeFill,
    ];

    /// CSS custom property name without the `--` prefix.
    pub fn name(self) -> &'static str {
        match self {
            Token::Background => "e9-bg",
            Token::NavBackground => "e9-nav-bg",
            Token::Violet => "e9-violet",
            Token::Cyan => "e9-cyan",
            Token::Silver => "e9-silver",
            Token::White => "e9-white",
            Token::Surface => "e9-surface",
            Token::Track => "e9-track",
            Token::Hairline => "e9-hairline",
            Token::Connector => "e9-connector",
            Token::Glow => "e9-glow",
            Token::BadgeFill => "e9-badge-fill",
        }
    }

    /// Literal CSS value.
    pub fn value(self) -> &'static str {
        match self {
            Token::Background => "#0B0B10",
            Token::NavBackground => "rgba(11, 11, 16, 0.9)",
            Token::Violet => "#7B61FF",
            Token::Cyan => "#3EC3FF",
            Token::Silver => "#C9CED6",
            Token::White => "#FFFFFF",
            Token::Surface => "rgba(255, 255, 255, 0.05)",
            Token::Track => "rgba(255, 255, 255, 0.1)",
            Token::Hairline => "rgba(123, 97, 255, 0.3)",
            Token::Connector => "rgba(201, 206, 214, 0.3)",
            Token::Glow => "rgba(123, 97, 255, 0.3)",
            Token::BadgeFill => "rgba(123, 97, 255, 0.2)",
        }
    }

    /// `var(--name)` reference for inline styles.
    pub fn var(self) -> String {
        format!("var(--{})", self.name())
    }
}

/// Highlight color attached to a card or data row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Violet,
    Cyan,
    Silver,
}

impl Accent {
    pub fn token(self) -> Token {
        match self {
            Accent::Violet => Token::Violet,
            Accent::Cyan => Token::Cyan,
            Accent::Silver => Token::Silver,
        }
    }

    pub fn var(self) -> String {
        self.token().var()
    }

    /// Inline style binding the card-local `--accent` property.
    ///
    /// Borders, bullets and hover gradients in the stylesheet read
    /// `var(--accent)`, so one declaration themes the whole card.
    pub fn style(self) -> String {
        format!("--accent: {}", self.var())
    }
}

/// `:root { --e9-*: value; ... }` block for every token.
pub fn css_variables() -> String {
    let mut css = String::from(":root {\n");
    for token in Token::ALL {
        css.push_str(&format!("    --{}: {};\n", token.name(), token.value()));
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn token_names_are_unique() {
        let names: HashSet<_> = Token::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), Token::ALL.len());
    }

    #[test]
    fn css_variables_cover_every_token() {
        let css = css_variables();
        for token in Token::ALL {
            let decl = format!("--{}: {};", token.name(), token.value());
            assert!(css.contains(&decl), "missing {decl}");
        }
        assert!(css.starts_with(":root {"));
    }

    #[test]
    fn accents_map_to_brand_tokens() {
        assert_eq!(Accent::Violet.token().value(), "#7B61FF");
        assert_eq!(Accent::Cyan.token().value(), "#3EC3FF");
        assert_eq!(Accent::Silver.token().value(), "#C9CED6");
        assert_eq!(Accent::Cyan.style(), "--accent: var(--e9-cyan)");
    }
}
