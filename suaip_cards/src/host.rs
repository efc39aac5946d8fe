// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the document it drives.
//!
//! [`SwipeCards`](crate::SwipeCards) never touches a DOM directly. It reads
//! geometry from, and writes classes, inline styles and listener state to, a
//! [`CardHost`]. The web adapter implements it over `web_sys::HtmlElement`;
//! tests implement it over plain ids and record every call.

use core::time::Duration;

use kurbo::Size;

use crate::gesture::Directions;
use crate::role::CardRole;
use crate::style::{CardClass, CompleteMarker, Opacity, Transition, Translation};

/// Identifies one scheduled animation cleanup.
///
/// Hosts hand the ticket back to
/// [`SwipeCards::on_cleanup_elapsed`](crate::SwipeCards::on_cleanup_elapsed)
/// when the delay has passed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CleanupTicket(pub u64);

/// Everything the controller needs from its document.
///
/// Setting a style to `None` removes the inline declaration.
pub trait CardHost {
    /// Handle to one card.
    type Card: Clone + PartialEq;

    /// Size of the layout viewport (`innerWidth` × `innerHeight`).
    fn viewport(&self) -> Size;

    /// Scrollable extent of a card (`scrollWidth` × `scrollHeight`).
    fn extent(&self, card: &Self::Card) -> Size;

    /// Sets or clears the inline transform (including the prefixed one).
    fn set_transform(&mut self, card: &Self::Card, transform: Option<Translation>);

    /// Sets or clears the inline opacity.
    fn set_opacity(&mut self, card: &Self::Card, opacity: Option<Opacity>);

    /// Sets or clears the inline transition.
    fn set_transition(&mut self, card: &Self::Card, transition: Option<Transition>);

    /// Adds or removes a class on a card.
    fn set_class(&mut self, card: &Self::Card, class: CardClass, on: bool);

    /// Adds or removes a completion marker on the document body.
    fn set_marker(&mut self, marker: CompleteMarker, on: bool);

    /// Finds the card currently carrying `role`'s class in this group.
    fn find(&self, role: CardRole) -> Option<Self::Card>;

    /// Starts delivering drags in `directions` (and drag-ends) for `active`.
    fn bind_gestures(&mut self, active: &Self::Card, directions: Directions);

    /// Stops delivering drags.
    fn unbind_gestures(&mut self);

    /// Blocks or unblocks native touch start on a card.
    fn block_touch(&mut self, card: &Self::Card, blocked: bool);

    /// Arranges for the cleanup with `ticket` to fire after `delay`.
    fn schedule_cleanup(&mut self, delay: Duration, ticket: CleanupTicket);

    /// Starts or stops waiting for `transitionend` on a card.
    fn watch_transition_end(&mut self, card: &Self::Card, watch: bool);
}
