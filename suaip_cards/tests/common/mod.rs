// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recording [`CardHost`] standing in for a page.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use kurbo::Size;
use suaip_cards::{
    CardClass, CardHost, CardRole, CleanupTicket, CompleteMarker, Directions, Opacity, Transition,
    Translation,
};

pub const BEFORE: u32 = 1;
pub const ACTIVE: u32 = 2;
pub const AFTER: u32 = 3;
pub const LEFT: u32 = 4;
pub const RIGHT: u32 = 5;

/// Inline state of one card.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardState {
    pub classes: BTreeSet<&'static str>,
    pub transform: Option<Translation>,
    pub opacity: Option<Opacity>,
    pub transition: Option<Transition>,
    pub touch_blocked: bool,
    pub watching_transition_end: bool,
}

impl CardState {
    pub fn has_inline_style(&self) -> bool {
        self.transform.is_some() || self.opacity.is_some() || self.transition.is_some()
    }
}

#[derive(Debug)]
pub struct Page {
    pub viewport: Size,
    pub extent: Size,
    pub cards: BTreeMap<u32, CardState>,
    pub body: BTreeSet<&'static str>,
    pub bound: Option<(u32, Directions)>,
    pub cleanups: Vec<(Duration, CleanupTicket)>,
    pub class_writes: Vec<(u32, &'static str, bool)>,
}

impl Page {
    /// A page whose cards all measure `card` against a `viewport`.
    pub fn new(viewport: Size, card: Size) -> Self {
        Self {
            viewport,
            extent: card,
            cards: BTreeMap::new(),
            body: BTreeSet::new(),
            bound: None,
            cleanups: Vec::new(),
            class_writes: Vec::new(),
        }
    }

    /// 360×900 viewport with 360×600 cards.
    pub fn phone() -> Self {
        Self::new(Size::new(360.0, 900.0), Size::new(360.0, 600.0))
    }

    pub fn card(&self, id: u32) -> &CardState {
        self.cards
            .get(&id)
            .unwrap_or_else(|| panic!("card {id} was never touched"))
    }

    pub fn transform(&self, id: u32) -> Option<Translation> {
        self.cards.get(&id).and_then(|c| c.transform)
    }

    pub fn has_class(&self, id: u32, class: &str) -> bool {
        self.cards.get(&id).is_some_and(|c| c.classes.contains(class))
    }

    pub fn role_classes(&self, id: u32) -> Vec<&'static str> {
        let roles: Vec<&'static str> = CardRole::ALL.iter().map(|r| r.class_name()).collect();
        self.cards
            .get(&id)
            .map(|c| {
                c.classes
                    .iter()
                    .copied()
                    .filter(|class| roles.contains(class))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_bound_on(&self, id: u32) -> bool {
        matches!(self.bound, Some((card, _)) if card == id)
    }

    pub fn last_cleanup(&self) -> Option<CleanupTicket> {
        self.cleanups.last().map(|(_, ticket)| *ticket)
    }

    fn state(&mut self, id: u32) -> &mut CardState {
        self.cards.entry(id).or_default()
    }
}

impl CardHost for Page {
    type Card = u32;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn extent(&self, _card: &u32) -> Size {
        self.extent
    }

    fn set_transform(&mut self, card: &u32, transform: Option<Translation>) {
        self.state(*card).transform = transform;
    }

    fn set_opacity(&mut self, card: &u32, opacity: Option<Opacity>) {
        self.state(*card).opacity = opacity;
    }

    fn set_transition(&mut self, card: &u32, transition: Option<Transition>) {
        self.state(*card).transition = transition;
    }

    fn set_class(&mut self, card: &u32, class: CardClass, on: bool) {
        let name = class.class_name();
        self.class_writes.push((*card, name, on));
        let classes = &mut self.state(*card).classes;
        if on {
            classes.insert(name);
        } else {
            classes.remove(name);
        }
    }

    fn set_marker(&mut self, marker: CompleteMarker, on: bool) {
        if on {
            self.body.insert(marker.class_name());
        } else {
            self.body.remove(marker.class_name());
        }
    }

    fn find(&self, role: CardRole) -> Option<u32> {
        self.cards
            .iter()
            .find(|(_, state)| state.classes.contains(role.class_name()))
            .map(|(id, _)| *id)
    }

    fn bind_gestures(&mut self, active: &u32, directions: Directions) {
        self.bound = Some((*active, directions));
    }

    fn unbind_gestures(&mut self) {
        self.bound = None;
    }

    fn block_touch(&mut self, card: &u32, blocked: bool) {
        self.state(*card).touch_blocked = blocked;
    }

    fn schedule_cleanup(&mut self, delay: Duration, ticket: CleanupTicket) {
        self.cleanups.push((delay, ticket));
    }

    fn watch_transition_end(&mut self, card: &u32, watch: bool) {
        self.state(*card).watching_transition_end = watch;
    }
}
