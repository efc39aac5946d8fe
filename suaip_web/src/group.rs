// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One card group: controller, DOM host and pointer tracking.

use kurbo::Point;
use suaip_cards::{CardHost, CleanupTicket, DragRecognizer, SwipeCards};
use web_sys::{HtmlElement, PointerEvent};

use crate::dom::DomHost;

#[derive(Debug)]
pub(crate) struct Group {
    cards: SwipeCards<HtmlElement>,
    host: DomHost,
    recognizer: DragRecognizer,
    /// The pointer being tracked. Only one drag per group at a time.
    pointer: Option<i32>,
}

fn position(event: &PointerEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

impl Group {
    pub(crate) fn new(cards: SwipeCards<HtmlElement>, host: DomHost) -> Self {
        let recognizer = cards.recognizer();
        Self {
            cards,
            host,
            recognizer,
            pointer: None,
        }
    }

    pub(crate) fn pointer_down(&mut self, event: &PointerEvent) {
        if self.pointer.is_some() || !event.is_primary() {
            return;
        }
        let Some(target) = self.host.gesture_target() else {
            return;
        };
        let id = event.pointer_id();
        if let Err(err) = target.set_pointer_capture(id) {
            log::debug!("pointer capture refused: {err:?}");
        }
        self.pointer = Some(id);
        self.recognizer.press(position(event), event.time_stamp());
    }

    pub(crate) fn pointer_move(&mut self, event: &PointerEvent) {
        if self.pointer != Some(event.pointer_id()) {
            return;
        }
        let Some(gesture) = self
            .recognizer
            .moved(position(event), event.time_stamp())
        else {
            return;
        };
        self.cards.on_drag(&mut self.host, &gesture);
    }

    pub(crate) fn pointer_up(&mut self, event: &PointerEvent) {
        if self.pointer != Some(event.pointer_id()) {
            return;
        }
        self.pointer = None;
        if let Some(gesture) = self
            .recognizer
            .release(position(event), event.time_stamp())
        {
            self.cards.on_drag_end(&mut self.host, &gesture);
        }
    }

    /// A cancelled pointer ends the drag where it was last seen.
    pub(crate) fn pointer_cancel(&mut self, event: &PointerEvent) {
        if self.pointer != Some(event.pointer_id()) {
            return;
        }
        self.pointer = None;
        let Some(last) = self.recognizer.last_pos() else {
            self.recognizer.cancel();
            return;
        };
        if let Some(gesture) = self.recognizer.release(last, event.time_stamp()) {
            self.cards.on_drag_end(&mut self.host, &gesture);
        }
    }

    pub(crate) fn transition_end(&mut self) {
        self.cards.on_transition_end(&mut self.host);
    }

    pub(crate) fn cleanup_elapsed(&mut self, ticket: CleanupTicket) {
        self.cards.on_cleanup_elapsed(&mut self.host, ticket);
    }

    /// Removes every listener this group added to the document.
    pub(crate) fn detach(&mut self) {
        self.host.unbind_gestures();
        let cards: Vec<HtmlElement> = self.cards.cards().cards().cloned().collect();
        for card in &cards {
            self.host.block_touch(card, false);
            self.host.watch_transition_end(card, false);
        }
        self.pointer = None;
        self.recognizer.cancel();
    }
}
