// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`CardHost`] over real DOM elements.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use kurbo::Size;
use suaip_cards::{
    CardClass, CardHost, CardRole, CleanupTicket, CompleteMarker, Directions, Opacity, Transition,
    Translation,
};
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Element, Event, HtmlElement, PointerEvent, Window};

use crate::group::Group;

/// `touch-action` for a bound card: the browser may only pan along axes the
/// group does not drag on.
fn touch_action(directions: Directions) -> &'static str {
    if directions.intersects(Directions::LEFT | Directions::RIGHT) {
        "none"
    } else {
        "pan-x"
    }
}

/// The group a set of listeners belongs to. Empty until setup succeeded.
pub(crate) type Slot = RefCell<Option<Group>>;

const POINTER_EVENTS: [&str; 4] = ["pointerdown", "pointermove", "pointerup", "pointercancel"];

/// Runs `f` on the group behind `slot`, if it still exists.
pub(crate) fn with_group(slot: &Weak<Slot>, f: impl FnOnce(&mut Group)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut slot) = slot.try_borrow_mut() else {
        log::warn!("card group busy; event dropped");
        return;
    };
    if let Some(group) = slot.as_mut() {
        f(group);
    }
}

/// JS callbacks shared by every element of one group.
pub(crate) struct Listeners {
    slot: Weak<Slot>,
    pointer: [Closure<dyn FnMut(PointerEvent)>; 4],
    prevent_default: Closure<dyn FnMut(Event)>,
    transition_end: Closure<dyn FnMut(Event)>,
}

impl Listeners {
    pub(crate) fn new(slot: Weak<Slot>) -> Self {
        let pointer = |handle: fn(&mut Group, &PointerEvent)| {
            let slot = slot.clone();
            Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
                with_group(&slot, |group| handle(group, &event));
            })
        };
        let pointer = [
            pointer(Group::pointer_down),
            pointer(Group::pointer_move),
            pointer(Group::pointer_up),
            pointer(Group::pointer_cancel),
        ];

        let prevent_default = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            event.prevent_default();
        });

        let transition_end = {
            let slot = slot.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                with_group(&slot, Group::transition_end);
            })
        };

        Self {
            slot,
            pointer,
            prevent_default,
            transition_end,
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners").finish_non_exhaustive()
    }
}

/// Document access for one card group.
#[derive(Debug)]
pub(crate) struct DomHost {
    window: Window,
    body: HtmlElement,
    /// Role lookups search the children of this element only.
    scope: Element,
    listeners: Listeners,
    gesture_target: Option<HtmlElement>,
}

impl DomHost {
    pub(crate) fn new(
        window: Window,
        body: HtmlElement,
        scope: Element,
        listeners: Listeners,
    ) -> Self {
        Self {
            window,
            body,
            scope,
            listeners,
            gesture_target: None,
        }
    }

    /// The card currently receiving pointer events, if gestures are bound.
    pub(crate) fn gesture_target(&self) -> Option<&HtmlElement> {
        self.gesture_target.as_ref()
    }

    fn set_style(card: &HtmlElement, property: &str, value: Option<&str>) {
        let style = card.style();
        let result = match value {
            Some(value) => style.set_property(property, value),
            None => style.remove_property(property).map(drop),
        };
        if let Err(err) = result {
            log::warn!("failed to update {property}: {err:?}");
        }
    }

    fn listen(target: &HtmlElement, event: &str, callback: &JsValue, passive: bool) {
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        let result = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &options,
        );
        if let Err(err) = result {
            log::warn!("failed to listen for {event}: {err:?}");
        }
    }

    fn unlisten(target: &HtmlElement, event: &str, callback: &JsValue) {
        if let Err(err) = target.remove_event_listener_with_callback(event, callback.unchecked_ref())
        {
            log::warn!("failed to stop listening for {event}: {err:?}");
        }
    }
}

impl CardHost for DomHost {
    type Card = HtmlElement;

    fn viewport(&self) -> Size {
        let read = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
        };
        Size::new(
            read(self.window.inner_width()),
            read(self.window.inner_height()),
        )
    }

    fn extent(&self, card: &HtmlElement) -> Size {
        Size::new(
            f64::from(card.scroll_width()),
            f64::from(card.scroll_height()),
        )
    }

    fn set_transform(&mut self, card: &HtmlElement, transform: Option<Translation>) {
        let value = transform.map(|t| t.to_string());
        Self::set_style(card, "transform", value.as_deref());
        Self::set_style(card, "-webkit-transform", value.as_deref());
    }

    fn set_opacity(&mut self, card: &HtmlElement, opacity: Option<Opacity>) {
        let value = opacity.map(|o| o.to_string());
        Self::set_style(card, "opacity", value.as_deref());
    }

    fn set_transition(&mut self, card: &HtmlElement, transition: Option<Transition>) {
        let value = transition.map(|t| t.to_string());
        Self::set_style(card, "transition", value.as_deref());
    }

    fn set_class(&mut self, card: &HtmlElement, class: CardClass, on: bool) {
        let classes = card.class_list();
        let name = class.class_name();
        let result = if on {
            classes.add_1(name)
        } else {
            classes.remove_1(name)
        };
        if let Err(err) = result {
            log::warn!("failed to toggle class {name}: {err:?}");
        }
    }

    fn set_marker(&mut self, marker: CompleteMarker, on: bool) {
        let classes = self.body.class_list();
        let name = marker.class_name();
        let result = if on {
            classes.add_1(name)
        } else {
            classes.remove_1(name)
        };
        if let Err(err) = result {
            log::warn!("failed to toggle body class {name}: {err:?}");
        }
    }

    /// Searches the direct children of the group's parent element only.
    fn find(&self, role: CardRole) -> Option<HtmlElement> {
        let children = self.scope.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .find(|element| element.class_list().contains(role.class_name()))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn bind_gestures(&mut self, active: &HtmlElement, directions: Directions) {
        self.unbind_gestures();
        for (event, callback) in POINTER_EVENTS.iter().zip(&self.listeners.pointer) {
            Self::listen(active, event, callback.as_ref(), true);
        }
        // Keep the page from scrolling under the drag.
        Self::listen(
            active,
            "touchmove",
            self.listeners.prevent_default.as_ref(),
            false,
        );
        Self::set_style(active, "touch-action", Some(touch_action(directions)));
        self.gesture_target = Some(active.clone());
    }

    fn unbind_gestures(&mut self) {
        let Some(target) = self.gesture_target.take() else {
            return;
        };
        for (event, callback) in POINTER_EVENTS.iter().zip(&self.listeners.pointer) {
            Self::unlisten(&target, event, callback.as_ref());
        }
        Self::unlisten(
            &target,
            "touchmove",
            self.listeners.prevent_default.as_ref(),
        );
        Self::set_style(&target, "touch-action", None);
    }

    fn block_touch(&mut self, card: &HtmlElement, blocked: bool) {
        let callback = self.listeners.prevent_default.as_ref();
        if blocked {
            Self::listen(card, "touchstart", callback, false);
        } else {
            Self::unlisten(card, "touchstart", callback);
        }
    }

    fn schedule_cleanup(&mut self, delay: Duration, ticket: CleanupTicket) {
        let slot = self.listeners.slot.clone();
        let callback = Closure::once_into_js(move || {
            with_group(&slot, |group| group.cleanup_elapsed(ticket));
        });
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis,
            )
        {
            log::warn!("failed to schedule animation cleanup: {err:?}");
        }
    }

    fn watch_transition_end(&mut self, card: &HtmlElement, watch: bool) {
        let callback = self.listeners.transition_end.as_ref();
        if watch {
            Self::listen(card, "transitionend", callback, true);
        } else {
            Self::unlisten(card, "transitionend", callback);
        }
    }
}
