// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style values and CSS class names written to cards.

use core::fmt;
use core::time::Duration;

use kurbo::Vec2;

use crate::gesture::SwipeDirection;
use crate::role::CardRole;

/// A `translate3d` transform with a zero Z component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Translation(pub Vec2);

impl Translation {
    /// No offset.
    pub const ZERO: Self = Self(Vec2::ZERO);

    /// Creates a translation by `(x, y)` pixels.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero turns -0.0 into 0.0.
        write!(
            f,
            "translate3d({}px,{}px,0px)",
            self.0.x + 0.0,
            self.0.y + 0.0
        )
    }
}

/// Opacity as a whole percentage in `0..=100`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Opacity(u8);

impl Opacity {
    /// Fully opaque.
    pub const OPAQUE: Self = Self(100);

    /// Creates an opacity, clamping `percent` to `0..=100`.
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// Opacity ramp for a drag that has covered `progress` of the card
    /// (`1.0` = a full card extent), never below `floor` percent.
    #[must_use]
    pub fn ramp(progress: f64, floor: u8) -> Self {
        let percent = (progress * 100.0).round();
        let floor = floor.min(100);
        if percent.is_nan() || percent < f64::from(floor) {
            Self(floor)
        } else if percent >= 100.0 {
            Self::OPAQUE
        } else {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "percent is a whole number checked to be in floor..100"
            )]
            let percent = percent as u8;
            Self(percent)
        }
    }

    /// The percentage.
    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            100 => f.write_str("1"),
            0 => f.write_str("0"),
            p if p % 10 == 0 => write!(f, "0.{}", p / 10),
            p => write!(f, "0.{p:02}"),
        }
    }
}

/// A `transition: all <ms>ms ease` declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition(pub Duration);

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {}ms ease", self.0.as_millis())
    }
}

/// Classes the controller toggles on individual cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardClass {
    /// The card's role.
    Role(CardRole),
    /// Set on the active card while a release animation runs.
    Animate,
    /// Set on the active card once a swipe is committed.
    DragComplete,
}

impl CardClass {
    /// The CSS class name.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Role(role) => role.class_name(),
            Self::Animate => "animate",
            Self::DragComplete => "drag-complete",
        }
    }
}

/// Body-level marker set while a committed swipe animates out.
///
/// Stylesheets key the exit animation of the old active card off these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompleteMarker(pub SwipeDirection);

impl CompleteMarker {
    /// Markers for every swipe direction.
    pub const ALL: [Self; 4] = [
        Self(SwipeDirection::Up),
        Self(SwipeDirection::Down),
        Self(SwipeDirection::Left),
        Self(SwipeDirection::Right),
    ];

    /// The CSS class name, e.g. `dragup-complete`.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self.0 {
            SwipeDirection::Up => "dragup-complete",
            SwipeDirection::Down => "dragdown-complete",
            SwipeDirection::Left => "dragleft-complete",
            SwipeDirection::Right => "dragright-complete",
            SwipeDirection::None => "drag-complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_css() {
        assert_eq!(
            Translation::new(0.0, -100.0).to_string(),
            "translate3d(0px,-100px,0px)"
        );
        assert_eq!(
            Translation::new(12.5, 0.0).to_string(),
            "translate3d(12.5px,0px,0px)"
        );
        assert_eq!(
            Translation::new(-0.0, -0.0).to_string(),
            "translate3d(0px,0px,0px)"
        );
    }

    #[test]
    fn opacity_ramp_has_floor_and_ceiling() {
        assert_eq!(Opacity::ramp(0.0, 30).percent(), 30);
        assert_eq!(Opacity::ramp(0.294, 30).percent(), 30);
        assert_eq!(Opacity::ramp(0.456, 30).percent(), 46);
        assert_eq!(Opacity::ramp(1.0, 30), Opacity::OPAQUE);
        assert_eq!(Opacity::ramp(1.7, 30), Opacity::OPAQUE);
        assert_eq!(Opacity::ramp(-0.5, 30).percent(), 30);
        assert_eq!(Opacity::ramp(f64::NAN, 30).percent(), 30);
    }

    #[test]
    fn opacity_css() {
        assert_eq!(Opacity::from_percent(30).to_string(), "0.3");
        assert_eq!(Opacity::from_percent(46).to_string(), "0.46");
        assert_eq!(Opacity::from_percent(5).to_string(), "0.05");
        assert_eq!(Opacity::from_percent(100).to_string(), "1");
        assert_eq!(Opacity::from_percent(250).to_string(), "1");
    }

    #[test]
    fn transition_css() {
        assert_eq!(
            Transition(Duration::from_millis(200)).to_string(),
            "all 200ms ease"
        );
    }

    #[test]
    fn class_names() {
        assert_eq!(CardClass::Role(CardRole::After).class_name(), "after");
        assert_eq!(CardClass::DragComplete.class_name(), "drag-complete");
        assert_eq!(
            CompleteMarker(SwipeDirection::Left).class_name(),
            "dragleft-complete"
        );
    }
}
