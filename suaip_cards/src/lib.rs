// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=suaip_cards --heading-base-level=0

//! Suaip Cards: a swipeable card stack as a host-agnostic state machine.
//!
//! Three or five adjacent cards (before, active, after, and optionally left
//! and right) form a stack. Dragging the active card moves it and slides the
//! neighbor it reveals into view. On release the stack either eases back or
//! commits, in which case the neighbor becomes active once the CSS transition
//! has finished.
//!
//! The crate is split into small pieces:
//!
//! - [`gesture`]: [`DragRecognizer`] turns pointer samples into [`DragGesture`]s
//! - [`role`]: [`CardRole`] and the role → card association [`RoleSet`]
//! - [`style`]: the transforms, opacities, transitions and classes written to cards
//! - [`host`]: the [`CardHost`] trait a document implements
//! - [`controller`]: [`SwipeCards`], the per-group state machine
//!
//! ## Design
//!
//! The controller owns all state for one card group and never touches a
//! document directly. Hosts feed it gestures, timer expiries and
//! `transitionend` notifications; it answers by calling back into the host.
//! Class names only exist at that boundary: the controller tracks roles,
//! the animation flag and the completion marker as typed fields.
//!
//! The `suaip_web` crate provides the DOM host.
//!
//! ## Driving a group
//!
//! ```rust
//! # use core::time::Duration;
//! # use kurbo::{Point, Size};
//! # use suaip_cards::*;
//! # struct Page;
//! # impl CardHost for Page {
//! #     type Card = &'static str;
//! #     fn viewport(&self) -> Size { Size::new(360.0, 640.0) }
//! #     fn extent(&self, _: &Self::Card) -> Size { Size::new(360.0, 640.0) }
//! #     fn set_transform(&mut self, _: &Self::Card, _: Option<Translation>) {}
//! #     fn set_opacity(&mut self, _: &Self::Card, _: Option<Opacity>) {}
//! #     fn set_transition(&mut self, _: &Self::Card, _: Option<Transition>) {}
//! #     fn set_class(&mut self, _: &Self::Card, _: CardClass, _: bool) {}
//! #     fn set_marker(&mut self, _: CompleteMarker, _: bool) {}
//! #     fn find(&self, _: CardRole) -> Option<Self::Card> { None }
//! #     fn bind_gestures(&mut self, _: &Self::Card, _: Directions) {}
//! #     fn unbind_gestures(&mut self) {}
//! #     fn block_touch(&mut self, _: &Self::Card, _: bool) {}
//! #     fn schedule_cleanup(&mut self, _: Duration, _: CleanupTicket) {}
//! #     fn watch_transition_end(&mut self, _: &Self::Card, _: bool) {}
//! # }
//! let mut page = Page;
//! let config = CardsConfig::vertical("intro", "news", "weather");
//! let mut cards = SwipeCards::new(&mut page, config).unwrap();
//! let mut recognizer = cards.recognizer();
//!
//! // A short flick downward.
//! recognizer.press(Point::new(180.0, 100.0), 0.0);
//! if let Some(drag) = recognizer.moved(Point::new(180.0, 160.0), 50.0) {
//!     cards.on_drag(&mut page, &drag);
//! }
//! if let Some(end) = recognizer.release(Point::new(180.0, 160.0), 60.0) {
//!     // 50px is short of a third of the viewport: the card eases back.
//!     assert_eq!(cards.on_drag_end(&mut page, &end), Release::SnapBack);
//! }
//! assert_eq!(cards.cards().active(), &"news");
//! ```
//!
//! ## Errors
//!
//! The only checked condition is a missing required card, reported as
//! [`ConfigError`] before anything is written to the host.

pub mod controller;
pub mod gesture;
pub mod host;
pub mod role;
pub mod style;

mod config;
mod error;

pub use config::{CardsConfig, SwipeConfig};
pub use controller::{Phase, Release, SwipeCards};
pub use error::ConfigError;
pub use gesture::{Directions, DragGesture, DragRecognizer, SwipeDirection};
pub use host::{CardHost, CleanupTicket};
pub use role::{CardRole, RoleSet};
pub use style::{CardClass, CompleteMarker, Opacity, Transition, Translation};
