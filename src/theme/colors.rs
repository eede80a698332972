//! Palette constants, mirrored as CSS custom properties in the global styles.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#ffffff";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e4e4e7";

// === TEXT ===
pub const FOREGROUND: &str = "#09090b";
pub const MUTED_FOREGROUND: &str = "#71717a";

// === ACCENT ===
pub const PRIMARY: &str = "#18181b";
pub const PRIMARY_FOREGROUND: &str = "#fafafa";
pub const HIGHLIGHT: &str = "#6366f1";

// === STATUS ===
pub const SUCCESS: &str = "#16a34a";
pub const DANGER: &str = "#dc2626";

/// Header background alpha for the given timeline opacity value.
pub fn header_background(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {alpha:.3})")
}

/// Header shadow at `strength` (0 = none, 1 = full).
pub fn header_shadow(strength: f32) -> String {
    format!("0 2px 4px rgba(0, 0, 0, {:.3})", 0.1 * strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_colors_follow_timeline_values() {
        assert_eq!(header_background(0.95), "rgba(255, 255, 255, 0.950)");
        assert_eq!(header_shadow(0.0), "0 2px 4px rgba(0, 0, 0, 0.000)");
        assert_eq!(header_shadow(1.0), "0 2px 4px rgba(0, 0, 0, 0.100)");
    }
}
