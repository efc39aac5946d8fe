// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe controller: a per-group state machine over a [`CardHost`].
//!
//! ## Phases
//!
//! ```text
//!            drag                 release
//!   Idle ───────────▶ Dragging ───────────▶ Deciding
//!    ▲                   ▲                    │
//!    │                   │ drag               ├── below threshold ──▶ AnimatingCancel
//!    │                   └────────────────────┼──────────────────────────┘   │
//!    │ cleanup timer                          │                              │
//!    ├────────────────────────────────────────┼──────────────────────────────┘
//!    │                                        └── at/above threshold ─▶ AnimatingCommit
//!    │ transitionend (roles rotated)                                          │
//!    └────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Gestures are bound in `Idle`, `Dragging` and `AnimatingCancel`. Releasing a
//! drag unbinds them before anything else happens, so no drag is processed
//! while the controller is `Deciding` or `AnimatingCommit`.
//!
//! ## Minimal example
//!
//! ```
//! # use core::time::Duration;
//! # use kurbo::Size;
//! # use suaip_cards::*;
//! # #[derive(Default)]
//! # struct Null;
//! # impl CardHost for Null {
//! #     type Card = u8;
//! #     fn viewport(&self) -> Size { Size::new(360.0, 900.0) }
//! #     fn extent(&self, _: &u8) -> Size { Size::new(360.0, 600.0) }
//! #     fn set_transform(&mut self, _: &u8, _: Option<Translation>) {}
//! #     fn set_opacity(&mut self, _: &u8, _: Option<Opacity>) {}
//! #     fn set_transition(&mut self, _: &u8, _: Option<Transition>) {}
//! #     fn set_class(&mut self, _: &u8, _: CardClass, _: bool) {}
//! #     fn set_marker(&mut self, _: CompleteMarker, _: bool) {}
//! #     fn find(&self, _: CardRole) -> Option<u8> { None }
//! #     fn bind_gestures(&mut self, _: &u8, _: Directions) {}
//! #     fn unbind_gestures(&mut self) {}
//! #     fn block_touch(&mut self, _: &u8, _: bool) {}
//! #     fn schedule_cleanup(&mut self, _: Duration, _: CleanupTicket) {}
//! #     fn watch_transition_end(&mut self, _: &u8, _: bool) {}
//! # }
//! let mut host = Null;
//! let mut cards = SwipeCards::new(&mut host, CardsConfig::vertical(1, 2, 3)).unwrap();
//!
//! cards.on_drag(&mut host, &DragGesture::new(SwipeDirection::Up, 100.0, 0.5));
//! let release = cards.on_drag_end(&mut host, &DragGesture::new(SwipeDirection::Up, 100.0, 0.5));
//! assert_eq!(release, Release::Commit(SwipeDirection::Up));
//!
//! // The host reports the end of the CSS transition.
//! cards.on_transition_end(&mut host);
//! assert_eq!(cards.cards().active(), &3);
//! assert_eq!(cards.phase(), Phase::Idle);
//! ```

use core::time::Duration;

use crate::config::{CardsConfig, SwipeConfig};
use crate::error::ConfigError;
use crate::gesture::{DragGesture, DragRecognizer, Directions, SwipeDirection};
use crate::host::{CardHost, CleanupTicket};
use crate::role::{CardRole, RoleSet};
use crate::style::{CardClass, CompleteMarker, Opacity, Transition, Translation};

/// Where a card group is in its gesture cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Listening, nothing moving.
    Idle,
    /// Listening, cards follow a drag in the given direction.
    Dragging(SwipeDirection),
    /// Not listening; a release is being evaluated.
    Deciding,
    /// Listening; cards ease back while the cleanup timer runs.
    AnimatingCancel,
    /// Not listening; cards ease out, waiting for `transitionend`.
    AnimatingCommit(SwipeDirection),
}

impl Phase {
    /// Returns `true` while gesture listeners are bound.
    #[must_use]
    pub fn is_listening(self) -> bool {
        matches!(self, Self::Idle | Self::Dragging(_) | Self::AnimatingCancel)
    }
}

/// What a release did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// Gestures were not bound; nothing happened.
    Ignored,
    /// The drag fell short and the cards ease back.
    SnapBack,
    /// The drag was committed and roles rotate once the animation ends.
    Commit(SwipeDirection),
}

/// Swipe controller for one card group.
///
/// Each group carries its own state, so any number of groups can coexist on
/// a page.
#[derive(Clone, Debug)]
pub struct SwipeCards<C> {
    cards: RoleSet<C>,
    config: SwipeConfig,
    phase: Phase,
    direction: SwipeDirection,
    distance_delta: f64,
    animating: bool,
    drag_complete: bool,
    marker: Option<CompleteMarker>,
    generation: u64,
}

impl<C: Clone + PartialEq> SwipeCards<C> {
    /// Sets up a card group with the default [`SwipeConfig`].
    ///
    /// See [`SwipeCards::with_config`].
    pub fn new<H>(host: &mut H, cards: CardsConfig<C>) -> Result<Self, ConfigError>
    where
        H: CardHost<Card = C>,
    {
        Self::with_config(host, cards, SwipeConfig::default())
    }

    /// Sets up a card group.
    ///
    /// Fails without touching the host if a required card is missing.
    /// Otherwise tags every card with its role class, binds gestures on the
    /// active card and unblocks touch on all cards.
    pub fn with_config<H>(
        host: &mut H,
        cards: CardsConfig<C>,
        config: SwipeConfig,
    ) -> Result<Self, ConfigError>
    where
        H: CardHost<Card = C>,
    {
        let cards = cards.into_roles()?;
        for (role, card) in cards.iter() {
            host.set_class(card, CardClass::Role(role), true);
        }

        let mut this = Self {
            cards,
            config,
            phase: Phase::Idle,
            direction: SwipeDirection::None,
            distance_delta: 0.0,
            animating: false,
            drag_complete: false,
            marker: None,
            generation: 0,
        };
        this.bind(host);
        log::debug!(
            "card group ready ({} cards, sides {:?})",
            this.cards.cards().count(),
            this.drag_directions()
        );
        Ok(this)
    }

    /// The current role association.
    pub fn cards(&self) -> &RoleSet<C> {
        &self.cards
    }

    /// The tuning in use.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Direction of the most recent release.
    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// Vertical offset carried over from earlier partial drags.
    ///
    /// Zero or negative after upward drags; reset to zero by every commit.
    pub fn distance_delta(&self) -> f64 {
        self.distance_delta
    }

    /// Returns `true` while a release transition is applied to the cards.
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    /// Returns `true` between a commit and the role rotation.
    pub fn is_drag_complete(&self) -> bool {
        self.drag_complete
    }

    /// The body marker currently set, if any.
    pub fn marker(&self) -> Option<CompleteMarker> {
        self.marker
    }

    /// A recognizer configured with this group's drag start distance.
    pub fn recognizer(&self) -> DragRecognizer {
        DragRecognizer::new(self.config.drag_min_distance)
    }

    /// Directions a drag may take with the current cards.
    ///
    /// Vertical drags are always possible; a side drag needs the card it
    /// reveals.
    pub fn drag_directions(&self) -> Directions {
        let mut directions = Directions::VERTICAL;
        if self.cards.get(CardRole::Right).is_some() {
            directions |= Directions::LEFT;
        }
        if self.cards.get(CardRole::Left).is_some() {
            directions |= Directions::RIGHT;
        }
        directions
    }

    /// Handles a `drag{direction}` event.
    ///
    /// Moves the active card with the gesture and slides the revealed
    /// neighbor in, fading it from the opacity floor toward fully opaque.
    /// Returns `false` if gestures are unbound or the direction is not enabled.
    pub fn on_drag<H>(&mut self, host: &mut H, gesture: &DragGesture) -> bool
    where
        H: CardHost<Card = C>,
    {
        if !self.phase.is_listening() {
            log::trace!("drag ignored while {:?}", self.phase);
            return false;
        }
        let direction = gesture.direction;
        if !self.drag_directions().contains(direction.flag()) {
            log::trace!("drag {} not enabled", direction.name());
            return false;
        }

        let distance = gesture.distance;
        let delta = self.distance_delta;
        let floor = self.config.opacity_floor;
        let active = self.cards.active().clone();
        let extent = host.extent(&active);
        let Some(revealed) = self.cards.revealed_by(direction).cloned() else {
            return false;
        };

        match direction {
            SwipeDirection::Up => {
                let lifted = distance - delta;
                host.set_transform(&active, Some(Translation::new(0.0, delta - distance)));
                host.set_transform(
                    &revealed,
                    Some(Translation::new(0.0, extent.height - lifted)),
                );
                host.set_opacity(&revealed, Some(Opacity::ramp(lifted / extent.height, floor)));
            }
            SwipeDirection::Down => {
                let pulled = delta + distance;
                host.set_transform(&active, Some(Translation::new(0.0, pulled)));
                host.set_transform(
                    &revealed,
                    Some(Translation::new(0.0, -(extent.height - pulled))),
                );
                host.set_opacity(&revealed, Some(Opacity::ramp(pulled / extent.height, floor)));
            }
            SwipeDirection::Left => {
                host.set_transform(&active, Some(Translation::new(-distance, delta)));
                host.set_transform(
                    &revealed,
                    Some(Translation::new(extent.width - distance, 0.0)),
                );
                host.set_opacity(
                    &revealed,
                    Some(Opacity::ramp(distance / extent.width, floor)),
                );
            }
            SwipeDirection::Right => {
                host.set_transform(&active, Some(Translation::new(distance, delta)));
                host.set_transform(
                    &revealed,
                    Some(Translation::new(-(extent.width - distance), 0.0)),
                );
                host.set_opacity(
                    &revealed,
                    Some(Opacity::ramp(distance / extent.width, floor)),
                );
            }
            SwipeDirection::None => return false,
        }

        self.phase = Phase::Dragging(direction);
        true
    }

    /// Handles a `dragend` event.
    ///
    /// Unbinds gestures, applies the release transition to every card and
    /// either snaps back or commits, depending on how far the drag went.
    pub fn on_drag_end<H>(&mut self, host: &mut H, gesture: &DragGesture) -> Release
    where
        H: CardHost<Card = C>,
    {
        if !self.phase.is_listening() {
            log::trace!("drag end ignored while {:?}", self.phase);
            return Release::Ignored;
        }

        self.direction = gesture.direction;
        self.phase = Phase::Deciding;
        self.generation += 1;
        self.unbind(host);

        let duration = self.config.release_duration(gesture.velocity.y);
        self.add_animations(host, duration);

        let release = match self.direction {
            SwipeDirection::Up => self.complete_up(host, gesture.distance),
            SwipeDirection::Down => self.complete_down(host, gesture.distance),
            direction @ (SwipeDirection::Left | SwipeDirection::Right) => {
                self.complete_side(host, direction, gesture.distance)
            }
            SwipeDirection::None => self.restore(host),
        };
        log::debug!(
            "release {} ({:?}, {}ms): {:?}",
            self.direction.name(),
            gesture.distance,
            duration.as_millis(),
            release
        );
        release
    }

    /// Handles the cleanup timer scheduled by a snap-back.
    ///
    /// Drops the release transition so later drags track the finger without
    /// easing. Tickets issued before the latest release are ignored. Returns
    /// whether the ticket was current.
    pub fn on_cleanup_elapsed<H>(&mut self, host: &mut H, ticket: CleanupTicket) -> bool
    where
        H: CardHost<Card = C>,
    {
        if ticket != CleanupTicket(self.generation) {
            log::trace!("stale cleanup {ticket:?}");
            return false;
        }
        host.set_class(self.cards.active(), CardClass::Animate, false);
        for card in self.cards.cards() {
            host.set_transition(card, None);
        }
        self.animating = false;
        if self.phase == Phase::AnimatingCancel {
            self.phase = Phase::Idle;
        }
        true
    }

    /// Handles `transitionend` on the active card after a commit.
    ///
    /// Clears every transient class and inline style, rotates the roles,
    /// re-reads them from the host and binds gestures on the new active card.
    /// Returns `false` outside [`Phase::AnimatingCommit`].
    pub fn on_transition_end<H>(&mut self, host: &mut H) -> bool
    where
        H: CardHost<Card = C>,
    {
        let Phase::AnimatingCommit(direction) = self.phase else {
            log::trace!("transitionend ignored while {:?}", self.phase);
            return false;
        };

        let active = self.cards.active().clone();
        host.set_class(&active, CardClass::Animate, false);
        for marker in CompleteMarker::ALL {
            host.set_marker(marker, false);
        }
        self.marker = None;
        for card in self.cards.cards() {
            host.set_transition(card, None);
            host.set_transform(card, None);
            host.set_opacity(card, None);
        }
        self.animating = false;
        host.watch_transition_end(&active, false);

        if self.drag_complete {
            host.set_class(&active, CardClass::DragComplete, false);
            self.drag_complete = false;
            self.rotate(host, direction);
        }

        self.resync(host);
        self.phase = Phase::Idle;
        self.bind(host);
        true
    }

    fn bind<H: CardHost<Card = C>>(&self, host: &mut H) {
        host.bind_gestures(self.cards.active(), self.drag_directions());
        for card in self.cards.cards() {
            host.block_touch(card, false);
        }
    }

    fn unbind<H: CardHost<Card = C>>(&self, host: &mut H) {
        host.unbind_gestures();
        for card in self.cards.cards() {
            host.block_touch(card, true);
        }
    }

    fn add_animations<H: CardHost<Card = C>>(&mut self, host: &mut H, duration: Duration) {
        host.set_class(self.cards.active(), CardClass::Animate, true);
        for card in self.cards.cards() {
            host.set_transition(card, Some(Transition(duration)));
        }
        self.animating = true;
    }

    fn complete_up<H: CardHost<Card = C>>(&mut self, host: &mut H, distance: f64) -> Release {
        let height = host.extent(self.cards.active()).height;
        let viewport = host.viewport().height;

        self.distance_delta -= distance;
        if -self.distance_delta < height - viewport * self.config.up_threshold {
            // Not far enough to leave the card, but never past its bottom edge.
            if -self.distance_delta + viewport > height {
                self.distance_delta = -(height - viewport);
                host.set_transform(
                    self.cards.active(),
                    Some(Translation::new(0.0, self.distance_delta)),
                );
            }
            self.snap_back(host)
        } else {
            self.commit(host, SwipeDirection::Up)
        }
    }

    fn complete_down<H: CardHost<Card = C>>(&mut self, host: &mut H, distance: f64) -> Release {
        let viewport = host.viewport().height;

        self.distance_delta += distance;
        if self.distance_delta < viewport * self.config.down_threshold {
            if self.distance_delta > 0.0 {
                self.distance_delta = 0.0;
                host.set_transform(self.cards.active(), Some(Translation::ZERO));
            }
            self.snap_back(host)
        } else {
            self.commit(host, SwipeDirection::Down)
        }
    }

    fn complete_side<H: CardHost<Card = C>>(
        &mut self,
        host: &mut H,
        direction: SwipeDirection,
        distance: f64,
    ) -> Release {
        if self.cards.revealed_by(direction).is_none() {
            return self.restore(host);
        }
        let viewport = host.viewport().width;
        if distance < viewport * self.config.side_threshold {
            self.restore(host)
        } else {
            self.commit(host, direction)
        }
    }

    /// Puts the active card back at the carried vertical offset.
    fn restore<H: CardHost<Card = C>>(&mut self, host: &mut H) -> Release {
        host.set_transform(
            self.cards.active(),
            Some(Translation::new(0.0, self.distance_delta)),
        );
        self.snap_back(host)
    }

    fn snap_back<H: CardHost<Card = C>>(&mut self, host: &mut H) -> Release {
        self.phase = Phase::AnimatingCancel;
        self.bind(host);
        host.schedule_cleanup(self.config.cleanup_delay, CleanupTicket(self.generation));
        Release::SnapBack
    }

    fn commit<H: CardHost<Card = C>>(&mut self, host: &mut H, direction: SwipeDirection) -> Release {
        self.distance_delta = 0.0;
        let marker = CompleteMarker(direction);
        host.set_marker(marker, true);
        self.marker = Some(marker);

        let active = self.cards.active();
        host.set_class(active, CardClass::DragComplete, true);
        self.drag_complete = true;
        host.watch_transition_end(active, true);

        self.phase = Phase::AnimatingCommit(direction);
        Release::Commit(direction)
    }

    fn rotate<H: CardHost<Card = C>>(&mut self, host: &mut H, direction: SwipeDirection) {
        let next = self.cards.rotated(direction);
        for (card, from, to) in self.cards.changes_to(&next) {
            if let Some(from) = from {
                host.set_class(&card, CardClass::Role(from), false);
            }
            if let Some(to) = to {
                host.set_class(&card, CardClass::Role(to), true);
            }
        }
        self.cards = next;
        log::debug!("roles rotated {}", direction.name());
    }

    /// Re-reads the association from the host's classes.
    ///
    /// Only cards of this group count: an unrelated element carrying a role
    /// class is skipped. Roles the host cannot find keep their rotated card.
    /// A lookup that would give one card two roles is discarded.
    fn resync<H: CardHost<Card = C>>(&mut self, host: &H) {
        let lookup = |role: CardRole| {
            let found = host.find(role).filter(|card| {
                let tracked = self.cards.role_of(card).is_some();
                if !tracked {
                    log::debug!("untracked element has class {}", role.class_name());
                }
                tracked
            });
            found.or_else(|| self.cards.get(role).cloned())
        };
        let found = CardsConfig {
            before: lookup(CardRole::Before),
            active: lookup(CardRole::Active),
            after: lookup(CardRole::After),
            left: lookup(CardRole::Left),
            right: lookup(CardRole::Right),
        };
        match found.into_roles() {
            Ok(roles) if roles.is_exclusive() => {
                if roles != self.cards {
                    log::debug!("card classes changed outside the controller");
                }
                self.cards = roles;
            }
            _ => log::warn!("card classes are ambiguous; keeping rotated roles"),
        }
    }
}
