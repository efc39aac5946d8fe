// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cards and tuning for a swipe controller.

use core::time::Duration;

use crate::error::ConfigError;
use crate::role::{CardRole, RoleSet};

/// The cards of one group, as supplied by the caller.
///
/// `before`, `active` and `after` are required; [`CardsConfig::into_roles`]
/// reports the first one missing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardsConfig<C> {
    /// Card above the active one.
    pub before: Option<C>,
    /// Card in view.
    pub active: Option<C>,
    /// Card below the active one.
    pub after: Option<C>,
    /// Optional card to the left.
    pub left: Option<C>,
    /// Optional card to the right.
    pub right: Option<C>,
}

impl<C> Default for CardsConfig<C> {
    fn default() -> Self {
        Self {
            before: None,
            active: None,
            after: None,
            left: None,
            right: None,
        }
    }
}

impl<C> CardsConfig<C> {
    /// A vertical group with all required cards.
    pub fn vertical(before: C, active: C, after: C) -> Self {
        Self {
            before: Some(before),
            active: Some(active),
            after: Some(after),
            left: None,
            right: None,
        }
    }

    /// Adds side cards.
    #[must_use]
    pub fn with_sides(mut self, left: Option<C>, right: Option<C>) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Validates the required cards and builds the role association.
    pub fn into_roles(self) -> Result<RoleSet<C>, ConfigError> {
        let before = self.before.ok_or(ConfigError::missing(CardRole::Before))?;
        let active = self.active.ok_or(ConfigError::missing(CardRole::Active))?;
        let after = self.after.ok_or(ConfigError::missing(CardRole::After))?;
        Ok(RoleSet::new(before, active, after).with_sides(self.left, self.right))
    }
}

/// Timing and threshold tuning.
///
/// The defaults suit phone-sized viewports. Note that the duration picked
/// for a fast release is [`SwipeConfig::slow_animation`]: a release faster than
/// [`SwipeConfig::velocity_boundary`] animates with the *slow* constant.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Named-fast release duration, used when the release is slow.
    pub fast_animation: Duration,
    /// Named-slow release duration, used when the release is fast.
    pub slow_animation: Duration,
    /// Vertical release velocity (px/ms) separating slow from fast releases.
    pub velocity_boundary: f64,
    /// Delay before a snapped-back card loses its transition.
    pub cleanup_delay: Duration,
    /// Lowest opacity, in percent, of a card being revealed.
    pub opacity_floor: u8,
    /// Pointer travel in pixels before a press becomes a drag.
    pub drag_min_distance: f64,
    /// Fraction of the viewport height subtracted from the card height to get
    /// the upward commit threshold.
    pub up_threshold: f64,
    /// Fraction of the viewport height a downward drag must cover to commit.
    pub down_threshold: f64,
    /// Fraction of the viewport width a side drag must cover to commit.
    pub side_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            fast_animation: Duration::from_millis(200),
            slow_animation: Duration::from_millis(100),
            velocity_boundary: 2.0,
            cleanup_delay: Duration::from_millis(400),
            opacity_floor: 30,
            drag_min_distance: 10.0,
            up_threshold: 4.0 / 6.0,
            down_threshold: 2.0 / 6.0,
            side_threshold: 1.0 / 3.0,
        }
    }
}

impl SwipeConfig {
    /// Sets the two release durations.
    #[must_use]
    pub fn with_animations(mut self, fast: Duration, slow: Duration) -> Self {
        self.fast_animation = fast;
        self.slow_animation = slow;
        self
    }

    /// Sets the release velocity boundary.
    #[must_use]
    pub fn with_velocity_boundary(mut self, boundary: f64) -> Self {
        self.velocity_boundary = boundary;
        self
    }

    /// Sets the snap-back cleanup delay.
    #[must_use]
    pub fn with_cleanup_delay(mut self, delay: Duration) -> Self {
        self.cleanup_delay = delay;
        self
    }

    /// Sets the opacity floor, clamped to 100.
    #[must_use]
    pub fn with_opacity_floor(mut self, percent: u8) -> Self {
        self.opacity_floor = percent.min(100);
        self
    }

    /// Sets the drag start distance.
    #[must_use]
    pub fn with_drag_min_distance(mut self, distance: f64) -> Self {
        self.drag_min_distance = distance.max(0.0);
        self
    }

    /// Release duration for a gesture ending with vertical velocity `velocity_y`.
    #[must_use]
    pub fn release_duration(&self, velocity_y: f64) -> Duration {
        if velocity_y > self.velocity_boundary {
            self.slow_animation
        } else {
            self.fast_animation
        }
    }
}
