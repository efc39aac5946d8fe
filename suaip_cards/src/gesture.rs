// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag recognition: turn raw pointer samples into directional drag gestures.
//!
//! ## Usage
//!
//! 1) Call [`DragRecognizer::press`] when a pointer goes down on the active card.
//! 2) On each move, call [`DragRecognizer::moved`]. Once the pointer has travelled
//!    the minimum distance it returns a [`DragGesture`] for every move.
//! 3) Call [`DragRecognizer::release`] when the pointer goes up. It returns the
//!    final gesture if a drag was recognized.
//! 4) Call [`DragRecognizer::cancel`] to drop the current drag without a gesture.
//!
//! Distances are Euclidean from the (corrected) drag start, directions come from
//! the dominant axis of the total offset, and velocities are per axis in pixels
//! per millisecond over the whole gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use suaip_cards::{DragRecognizer, SwipeDirection};
//!
//! let mut drag = DragRecognizer::new(10.0);
//! drag.press(Point::new(100.0, 300.0), 0.0);
//!
//! // Too short to count as a drag yet.
//! assert!(drag.moved(Point::new(100.0, 295.0), 16.0).is_none());
//!
//! let gesture = drag.moved(Point::new(100.0, 250.0), 32.0).unwrap();
//! assert_eq!(gesture.direction, SwipeDirection::Up);
//! assert_eq!(gesture.distance, 40.0);
//! ```

use kurbo::{Point, Vec2};

/// Direction of a drag gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// No movement.
    #[default]
    None,
    /// Toward the top of the viewport.
    Up,
    /// Toward the bottom of the viewport.
    Down,
    /// Toward the left edge of the viewport.
    Left,
    /// Toward the right edge of the viewport.
    Right,
}

impl SwipeDirection {
    /// Classifies an offset by its dominant axis. Ties go horizontal.
    #[must_use]
    pub fn from_offset(offset: Vec2) -> Self {
        if offset.x == 0.0 && offset.y == 0.0 {
            Self::None
        } else if offset.x.abs() >= offset.y.abs() {
            if offset.x < 0.0 {
                Self::Left
            } else {
                Self::Right
            }
        } else if offset.y < 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// The matching flag in a [`Directions`] set.
    #[must_use]
    pub fn flag(self) -> Directions {
        match self {
            Self::None => Directions::empty(),
            Self::Up => Directions::UP,
            Self::Down => Directions::DOWN,
            Self::Left => Directions::LEFT,
            Self::Right => Directions::RIGHT,
        }
    }

    /// Event name suffix: `up`, `down`, `left`, `right` or `none`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

bitflags::bitflags! {
    /// A set of drag directions a host should listen for.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// Upward drags.
        const UP = 1 << 0;
        /// Downward drags.
        const DOWN = 1 << 1;
        /// Leftward drags.
        const LEFT = 1 << 2;
        /// Rightward drags.
        const RIGHT = 1 << 3;
        /// Both vertical directions.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

/// A recognized drag, as delivered with `drag{direction}` and `dragend`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragGesture {
    /// Distance from the drag start in pixels.
    pub distance: f64,
    /// Dominant direction of the total offset.
    pub direction: SwipeDirection,
    /// Absolute velocity per axis in pixels per millisecond.
    pub velocity: Vec2,
    /// Signed offset from the drag start.
    pub offset: Vec2,
}

impl DragGesture {
    /// Builds a gesture from the three fields the controller reads.
    #[must_use]
    pub fn new(direction: SwipeDirection, distance: f64, velocity_y: f64) -> Self {
        let offset = match direction {
            SwipeDirection::Up => Vec2::new(0.0, -distance),
            SwipeDirection::Down => Vec2::new(0.0, distance),
            SwipeDirection::Left => Vec2::new(-distance, 0.0),
            SwipeDirection::Right => Vec2::new(distance, 0.0),
            SwipeDirection::None => Vec2::ZERO,
        };
        Self {
            distance,
            direction,
            velocity: Vec2::new(0.0, velocity_y),
            offset,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Sample {
    pos: Point,
    time: f64,
}

/// Recognizes drags from pointer samples.
#[derive(Clone, Debug)]
pub struct DragRecognizer {
    min_distance: f64,
    start: Option<Sample>,
    last: Option<Sample>,
    dragging: bool,
}

impl Default for DragRecognizer {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl DragRecognizer {
    /// Creates a recognizer that starts a drag after `min_distance` pixels.
    #[must_use]
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance: min_distance.max(0.0),
            start: None,
            last: None,
            dragging: false,
        }
    }

    /// Start tracking a pointer that went down at `pos`.
    ///
    /// A press during an ongoing track restarts it.
    pub fn press(&mut self, pos: Point, time_ms: f64) {
        let sample = Sample { pos, time: time_ms };
        self.start = Some(sample);
        self.last = Some(sample);
        self.dragging = false;
    }

    /// Feed a pointer move. Returns a gesture once a drag is recognized.
    pub fn moved(&mut self, pos: Point, time_ms: f64) -> Option<DragGesture> {
        let mut start = self.start?;
        self.last = Some(Sample { pos, time: time_ms });

        if !self.dragging {
            let offset = pos - start.pos;
            let distance = offset.hypot();
            if distance < self.min_distance {
                return None;
            }
            self.dragging = true;
            // Move the start along the motion so the drag begins near zero.
            if distance > 0.0 {
                start.pos += offset * (self.min_distance / distance);
                self.start = Some(start);
            }
        }

        Some(gesture_between(start, Sample { pos, time: time_ms }))
    }

    /// End the tracked pointer at `pos`. Returns the `dragend` gesture if a
    /// drag was recognized, and resets.
    pub fn release(&mut self, pos: Point, time_ms: f64) -> Option<DragGesture> {
        let out = match (self.dragging, self.start) {
            (true, Some(start)) => Some(gesture_between(start, Sample { pos, time: time_ms })),
            _ => None,
        };
        self.cancel();
        out
    }

    /// Drop the tracked pointer without producing a gesture.
    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
        self.dragging = false;
    }

    /// Returns `true` while a pointer is tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Returns `true` once the tracked pointer has passed the minimum distance.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Position of the most recent sample.
    pub fn last_pos(&self) -> Option<Point> {
        self.last.map(|s| s.pos)
    }
}

fn gesture_between(start: Sample, end: Sample) -> DragGesture {
    let offset = end.pos - start.pos;
    let elapsed = end.time - start.time;
    let velocity = if elapsed > 0.0 {
        Vec2::new(offset.x.abs() / elapsed, offset.y.abs() / elapsed)
    } else {
        Vec2::ZERO
    };
    DragGesture {
        distance: offset.hypot(),
        direction: SwipeDirection::from_offset(offset),
        velocity,
        offset,
    }
}
