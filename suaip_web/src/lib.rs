// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=suaip_web --heading-base-level=0

//! DOM bindings for [`suaip_cards`].
//!
//! This crate wires a [`SwipeCards`](suaip_cards::SwipeCards) controller to
//! real elements when targeting `wasm32`: pointer events on the active card
//! drive the drag recognizer, styles and classes are written to the elements,
//! and `setTimeout`/`transitionend` report back to the controller.
//!
//! # Usage
//!
//! From JavaScript, after loading the generated module:
//!
//! ```js
//! const cards = init(
//!   document.querySelector("#intro"),
//!   document.querySelector("#news"),
//!   document.querySelector("#weather"),
//! );
//! // Later, to remove every listener:
//! cards.free();
//! ```
//!
//! `init` throws a string starting with `Invalid config` if `before`, `active`
//! or `after` is missing. `left` and `right` are optional; passing them
//! enables horizontal swipes toward them.
//!
//! Notes:
//! - Role classes are looked up inside the active card's parent element, so
//!   several groups can live on one page.
//! - The completion markers (`dragup-complete` and friends) go on
//!   `document.body`, as stylesheets expect them there.
//! - On other targets this crate is empty.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod group;

#[cfg(target_arch = "wasm32")]
pub use web::{SwipeCardsHandle, init};

#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "`wasm_bindgen` expands to unsafe glue")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use suaip_cards::{CardsConfig, SwipeCards};
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlElement};

    use crate::dom::{DomHost, Listeners, Slot};
    use crate::group::Group;

    /// A live card group. Freeing it detaches the group from the document.
    #[wasm_bindgen(js_name = SwipeCards)]
    #[derive(Debug)]
    pub struct SwipeCardsHandle {
        slot: Rc<Slot>,
    }

    impl Drop for SwipeCardsHandle {
        fn drop(&mut self) {
            let group = match self.slot.try_borrow_mut() {
                Ok(mut slot) => slot.take(),
                Err(_) => {
                    log::warn!("card group dropped while handling an event");
                    None
                }
            };
            if let Some(mut group) = group {
                group.detach();
                log::debug!("card group detached");
            }
        }
    }

    /// Sets up a card group on existing elements.
    ///
    /// Tags each card with its role class and starts listening for drags on
    /// `active`. Fails with `Invalid config: missing <role> card` when a
    /// required card is absent, and when there is no window or body.
    #[wasm_bindgen]
    pub fn init(
        before: Option<HtmlElement>,
        active: Option<HtmlElement>,
        after: Option<HtmlElement>,
        left: Option<HtmlElement>,
        right: Option<HtmlElement>,
    ) -> Result<SwipeCardsHandle, JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;
        let scope: Element = match active.as_ref().and_then(|card| card.parent_element()) {
            Some(parent) => parent,
            None => document
                .document_element()
                .ok_or_else(|| JsValue::from_str("no document element"))?,
        };

        let config = CardsConfig {
            before,
            active,
            after,
            left,
            right,
        };

        let slot: Rc<Slot> = Rc::new(RefCell::new(None));
        let listeners = Listeners::new(Rc::downgrade(&slot));
        let mut host = DomHost::new(window, body, scope, listeners);
        let cards = SwipeCards::new(&mut host, config)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        *slot.borrow_mut() = Some(Group::new(cards, host));

        Ok(SwipeCardsHandle { slot })
    }
}
