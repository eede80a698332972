//! Reversible tween timelines.
//!
//! A [`Timeline`] is a list of tweens laid out on a shared clock. The
//! playhead moves forward or backward as [`Timeline::advance`] is called from
//! a frame loop; reversing keeps the current position, so toggling direction
//! mid-flight is visually continuous.

use std::time::Duration;

use super::ease::Ease;

/// An animatable property of a target element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Property {
    Opacity,
    /// Vertical offset in pixels
    TranslateY,
    Scale,
    /// 0 = base colour, 1 = accent colour
    Accent,
    /// Fraction of the natural content height
    Height,
}

impl Property {
    /// Value of the property when no tween has touched it.
    pub fn rest(&self) -> f32 {
        match self {
            Property::Opacity | Property::Scale | Property::Height => 1.0,
            Property::TranslateY | Property::Accent => 0.0,
        }
    }
}

/// Where a tween starts on the timeline, in seconds.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Position {
    /// Right after the current end of the timeline
    #[default]
    End,
    /// Overlapping the current end by the given number of seconds
    BeforeEnd(f32),
    /// At an absolute time
    At(f32),
}

#[derive(Clone, PartialEq, Debug)]
struct Track {
    property: Property,
    from: Option<f32>,
    to: f32,
}

/// A tween description, resolved against the timeline when added.
#[derive(Clone, PartialEq, Debug)]
pub struct Tween {
    target: &'static str,
    duration: f32,
    ease: Ease,
    tracks: Vec<Track>,
}

impl Tween {
    pub fn new(target: &'static str, duration_secs: f32) -> Self {
        Self {
            target,
            duration: duration_secs.max(0.0),
            ease: Ease::default(),
            tracks: Vec::new(),
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Animate `property` from wherever it is when the tween starts.
    pub fn to(mut self, property: Property, value: f32) -> Self {
        self.tracks.push(Track {
            property,
            from: None,
            to: value,
        });
        self
    }

    /// Animate `property` between explicit values. The start value is shown
    /// before the tween begins.
    pub fn from_to(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tracks.push(Track {
            property,
            from: Some(from),
            to,
        });
        self
    }
}

#[derive(Clone, PartialEq, Debug)]
struct Segment {
    target: &'static str,
    property: Property,
    from: f32,
    to: f32,
    explicit_from: bool,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl Segment {
    fn value_at(&self, t: f32) -> f32 {
        let local = if self.duration <= f32::EPSILON {
            1.0
        } else {
            (t - self.start) / self.duration
        };
        let eased = self.ease.apply(local);
        self.from + (self.to - self.from) * eased
    }
}

/// Playback state of a timeline.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Playback {
    Paused,
    Forward,
    Reverse,
    Killed,
}

/// Resolved property values for one target at the current playhead.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Pose {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub accent: f32,
    pub height: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            opacity: Property::Opacity.rest(),
            translate_y: Property::TranslateY.rest(),
            scale: Property::Scale.rest(),
            accent: Property::Accent.rest(),
            height: Property::Height.rest(),
        }
    }
}

impl Pose {
    /// Inline CSS for the pose. Accent is exposed as `--accent-mix` (percent)
    /// so stylesheets decide which colour it tints.
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4}); --accent-mix: {:.1}%;",
            self.opacity,
            self.translate_y,
            self.scale,
            self.accent * 100.0
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Timeline {
    segments: Vec<Segment>,
    duration: f32,
    head: f32,
    playback: Playback,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::paused()
    }
}

impl Timeline {
    /// A timeline that plays forward as soon as it is advanced.
    pub fn new() -> Self {
        Self {
            playback: Playback::Forward,
            ..Self::paused()
        }
    }

    /// A timeline that waits for [`play`](Self::play).
    pub fn paused() -> Self {
        Self {
            segments: Vec::new(),
            duration: 0.0,
            head: 0.0,
            playback: Playback::Paused,
        }
    }

    /// Append a tween at `position`.
    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::End => self.duration,
            Position::BeforeEnd(overlap) => (self.duration - overlap).max(0.0),
            Position::At(at) => at.max(0.0),
        };

        for track in &tween.tracks {
            let from = track
                .from
                .unwrap_or_else(|| self.value_at(tween.target, track.property, start));
            self.segments.push(Segment {
                target: tween.target,
                property: track.property,
                from,
                to: track.to,
                explicit_from: track.from.is_some(),
                start,
                duration: tween.duration,
                ease: tween.ease,
            });
        }
        self.segments.sort_by(|a, b| a.start.total_cmp(&b.start));
        self.duration = self.duration.max(start + tween.duration);
        self
    }

    /// Shorthand for `add(tween, Position::End)`.
    pub fn then(self, tween: Tween) -> Self {
        self.add(tween, Position::End)
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    /// Playhead position as a fraction of the duration.
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            0.0
        } else {
            self.head / self.duration
        }
    }

    /// Play forward from the current position.
    pub fn play(&mut self) {
        if self.playback != Playback::Killed {
            self.playback = Playback::Forward;
        }
    }

    /// Play backward from the current position.
    pub fn reverse(&mut self) {
        if self.playback != Playback::Killed {
            self.playback = Playback::Reverse;
        }
    }

    pub fn pause(&mut self) {
        if self.playback != Playback::Killed {
            self.playback = Playback::Paused;
        }
    }

    /// Stop permanently. A killed timeline ignores further playback calls.
    pub fn kill(&mut self) {
        self.playback = Playback::Killed;
    }

    pub fn is_killed(&self) -> bool {
        self.playback == Playback::Killed
    }

    /// Whether advancing would move the playhead.
    pub fn is_active(&self) -> bool {
        match self.playback {
            Playback::Forward => self.head < self.duration,
            Playback::Reverse => self.head > 0.0,
            Playback::Paused | Playback::Killed => false,
        }
    }

    /// Move the playhead by `dt` in the current direction.
    ///
    /// Returns true if the playhead moved. Reaching either end pauses the
    /// timeline.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_active() {
            return false;
        }

        let step = dt.as_secs_f32();
        let before = self.head;
        match self.playback {
            Playback::Forward => {
                self.head = (self.head + step).min(self.duration);
                if self.head >= self.duration {
                    self.playback = Playback::Paused;
                }
            }
            Playback::Reverse => {
                self.head = (self.head - step).max(0.0);
                if self.head <= 0.0 {
                    self.playback = Playback::Paused;
                }
            }
            Playback::Paused | Playback::Killed => {}
        }
        self.head != before
    }

    /// Jump the playhead to an absolute time without changing direction.
    pub fn seek(&mut self, at_secs: f32) {
        self.head = at_secs.clamp(0.0, self.duration);
    }

    /// Current value of one property of `target`.
    pub fn value(&self, target: &str, property: Property) -> f32 {
        self.value_at(target, property, self.head)
    }

    /// Current pose of `target`.
    pub fn pose(&self, target: &str) -> Pose {
        Pose {
            opacity: self.value(target, Property::Opacity),
            translate_y: self.value(target, Property::TranslateY),
            scale: self.value(target, Property::Scale),
            accent: self.value(target, Property::Accent),
            height: self.value(target, Property::Height),
        }
    }

    fn value_at(&self, target: &str, property: Property, t: f32) -> f32 {
        let mut value = None;
        for segment in self
            .segments
            .iter()
            .filter(|s| s.target == target && s.property == property)
        {
            if t < segment.start {
                if value.is_none() && segment.explicit_from {
                    value = Some(segment.from);
                }
                break;
            }
            value = Some(segment.value_at(t));
        }
        value.unwrap_or_else(|| property.rest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn focus() -> Timeline {
        Timeline::paused().then(
            Tween::new("field", 0.3)
                .ease(Ease::Power2Out)
                .to(Property::Scale, 1.02)
                .to(Property::Accent, 1.0),
        )
    }

    #[test]
    fn paused_timeline_does_not_move() {
        let mut tl = focus();
        assert!(!tl.advance(FRAME));
        assert_eq!(tl.progress(), 0.0);
        assert_eq!(tl.pose("field"), Pose::default());
    }

    #[test]
    fn play_runs_to_end_then_pauses() {
        let mut tl = focus();
        tl.play();
        while tl.advance(FRAME) {}
        assert_eq!(tl.playback(), Playback::Paused);
        assert!((tl.value("field", Property::Scale) - 1.02).abs() < 1e-5);
        assert!((tl.value("field", Property::Accent) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn reverse_continues_from_current_position() {
        let mut tl = focus();
        tl.play();
        tl.advance(Duration::from_millis(100));
        let mid = tl.progress();

        tl.reverse();
        tl.advance(Duration::from_millis(40));
        let after = tl.progress();
        assert!(after < mid);
        assert!(after > 0.0, "reverse must not restart from zero");

        while tl.advance(FRAME) {}
        assert_eq!(tl.progress(), 0.0);
        assert_eq!(tl.pose("field"), Pose::default());
    }

    #[test]
    fn to_tweens_chain_from_previous_value() {
        let mut tl = Timeline::new()
            .then(Tween::new("icon", 0.2).ease(Ease::Linear).to(Property::TranslateY, -5.0))
            .then(Tween::new("icon", 0.2).ease(Ease::Linear).to(Property::TranslateY, 0.0));
        tl.seek(0.2);
        assert!((tl.value("icon", Property::TranslateY) + 5.0).abs() < 1e-5);
        tl.seek(0.3);
        assert!((tl.value("icon", Property::TranslateY) + 2.5).abs() < 1e-4);
    }

    #[test]
    fn from_to_renders_start_value_before_it_begins() {
        let mut tl = Timeline::new()
            .then(Tween::new("logo", 1.0).from_to(Property::Opacity, 0.0, 1.0))
            .add(
                Tween::new("name", 0.8).from_to(Property::Opacity, 0.0, 1.0),
                Position::BeforeEnd(0.5),
            );
        assert!((tl.duration() - 1.3).abs() < 1e-5);

        tl.seek(0.2);
        assert_eq!(tl.value("name", Property::Opacity), 0.0);
        assert!(tl.value("logo", Property::Opacity) > 0.0);

        tl.seek(1.3);
        assert!((tl.value("name", Property::Opacity) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn overlap_positions_clamp_at_zero() {
        let tl = Timeline::new().add(
            Tween::new("x", 0.5).to(Property::Scale, 2.0),
            Position::BeforeEnd(3.0),
        );
        assert!((tl.duration() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn killed_timeline_ignores_playback() {
        let mut tl = focus();
        tl.kill();
        tl.play();
        assert!(tl.is_killed());
        assert!(!tl.advance(FRAME));
    }

    #[test]
    fn untouched_targets_rest() {
        let tl = focus();
        assert_eq!(tl.pose("other"), Pose::default());
    }

    #[test]
    fn pose_style_formats_accent_as_percent() {
        let pose = Pose {
            accent: 0.5,
            ..Pose::default()
        };
        let style = pose.to_style();
        assert!(style.contains("--accent-mix: 50.0%"));
        assert!(style.contains("scale(1.0000)"));
    }
}
