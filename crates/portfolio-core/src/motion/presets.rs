//! Timelines used across the site.
//!
//! Target names are the keys passed to [`Timeline::pose`].

use super::ease::Ease;
use super::timeline::{Position, Property, Timeline, Tween};

pub const FIELD: &str = "field";
pub const ICON: &str = "icon";
pub const ITEM: &str = "item";
pub const LOGO: &str = "logo";
pub const NAME: &str = "name";
pub const TAGLINE: &str = "tagline";
pub const HEADER: &str = "header";
pub const PANEL: &str = "panel";

/// Form field focus: slight grow and accent border.
pub fn field_focus() -> Timeline {
    Timeline::paused().then(
        Tween::new(FIELD, 0.3)
            .ease(Ease::Power2Out)
            .to(Property::Scale, 1.02)
            .to(Property::Accent, 1.0),
    )
}

/// Skill card hover: icon grows and tints, hops up, then bounces back.
pub fn skill_hover() -> Timeline {
    Timeline::paused()
        .then(
            Tween::new(ICON, 0.3)
                .ease(Ease::Power2Out)
                .to(Property::Scale, 1.2)
                .to(Property::Accent, 1.0),
        )
        .add(
            Tween::new(ICON, 0.2)
                .ease(Ease::Power1InOut)
                .to(Property::TranslateY, -5.0),
            Position::BeforeEnd(0.2),
        )
        .then(
            Tween::new(ICON, 0.3)
                .ease(Ease::BounceOut)
                .to(Property::TranslateY, 0.0),
        )
}

/// Qualification item fade/slide in. Plays on creation.
pub fn reveal() -> Timeline {
    Timeline::new().then(
        Tween::new(ITEM, 0.8)
            .ease(Ease::Power3Out)
            .from_to(Property::Opacity, 0.0, 1.0)
            .from_to(Property::TranslateY, 50.0, 0.0),
    )
}

/// Home page entrance: logo, then name and tagline with overlapping starts.
pub fn home_intro() -> Timeline {
    Timeline::new()
        .then(
            Tween::new(LOGO, 1.0)
                .ease(Ease::Power3Out)
                .from_to(Property::Opacity, 0.0, 1.0)
                .from_to(Property::TranslateY, 50.0, 0.0),
        )
        .add(
            Tween::new(NAME, 0.8)
                .ease(Ease::Power3Out)
                .from_to(Property::Opacity, 0.0, 1.0)
                .from_to(Property::TranslateY, 30.0, 0.0),
            Position::BeforeEnd(0.5),
        )
        .add(
            Tween::new(TAGLINE, 0.6)
                .ease(Ease::Power3Out)
                .from_to(Property::Opacity, 0.0, 1.0)
                .from_to(Property::TranslateY, 20.0, 0.0),
            Position::BeforeEnd(0.4),
        )
}

/// Header style once the page is scrolled. `Opacity` is the background
/// alpha and `Accent` the shadow strength.
pub fn header_scrolled() -> Timeline {
    Timeline::paused().then(
        Tween::new(HEADER, 0.3)
            .ease(Ease::Power2Out)
            .from_to(Property::Opacity, 0.95, 0.8)
            .from_to(Property::Accent, 0.0, 1.0),
    )
}

/// Collapsible nav panel: height and opacity move together.
pub fn panel() -> Timeline {
    Timeline::paused().then(
        Tween::new(PANEL, 0.3)
            .ease(Ease::Power2Out)
            .from_to(Property::Height, 0.0, 1.0)
            .from_to(Property::Opacity, 0.0, 1.0),
    )
}
