// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card roles and the role → card association.
//!
//! A card group tracks at most five cards. Each card holds exactly one
//! [`CardRole`]; [`RoleSet`] stores the association and knows how a committed
//! swipe rotates it.
//!
//! ## Minimal example
//!
//! ```
//! use suaip_cards::{CardRole, RoleSet, SwipeDirection};
//!
//! let cards = RoleSet::new("b", "a", "c");
//! let next = cards.rotated(SwipeDirection::Up);
//!
//! // The card below moves into view, the old active card goes on top.
//! assert_eq!(next.active(), &"c");
//! assert_eq!(next.get(CardRole::Before), Some(&"a"));
//! assert_eq!(next.get(CardRole::After), Some(&"b"));
//! ```

use crate::gesture::SwipeDirection;

/// Position of a card relative to the current view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CardRole {
    /// The card above the active card, revealed by dragging down.
    Before,
    /// The card currently in view. Gestures are recognized on this card only.
    Active,
    /// The card below the active card, revealed by dragging up.
    After,
    /// The card left of the active card, revealed by dragging right.
    Left,
    /// The card right of the active card, revealed by dragging left.
    Right,
}

impl CardRole {
    /// All roles, in the order hosts are asked to look them up.
    pub const ALL: [Self; 5] = [
        Self::Before,
        Self::Active,
        Self::After,
        Self::Left,
        Self::Right,
    ];

    /// The CSS class marking a card with this role.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::Active => "active",
            Self::After => "after",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// The role → card association of one card group.
///
/// `C` is the host's card handle (a DOM element in the web adapter, any
/// comparable id in tests). The mandatory roles are always filled; the side
/// roles are optional.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleSet<C> {
    before: C,
    active: C,
    after: C,
    left: Option<C>,
    right: Option<C>,
}

impl<C> RoleSet<C> {
    /// Creates a vertical-only card group.
    pub fn new(before: C, active: C, after: C) -> Self {
        Self {
            before,
            active,
            after,
            left: None,
            right: None,
        }
    }

    /// Sets the optional side cards.
    #[must_use]
    pub fn with_sides(mut self, left: Option<C>, right: Option<C>) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Returns the active card.
    pub fn active(&self) -> &C {
        &self.active
    }

    /// Returns the card holding `role`, if any.
    pub fn get(&self, role: CardRole) -> Option<&C> {
        match role {
            CardRole::Before => Some(&self.before),
            CardRole::Active => Some(&self.active),
            CardRole::After => Some(&self.after),
            CardRole::Left => self.left.as_ref(),
            CardRole::Right => self.right.as_ref(),
        }
    }

    /// Iterates over the filled roles and their cards.
    pub fn iter(&self) -> impl Iterator<Item = (CardRole, &C)> + '_ {
        CardRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|card| (role, card)))
    }

    /// Iterates over every tracked card.
    pub fn cards(&self) -> impl Iterator<Item = &C> + '_ {
        self.iter().map(|(_, card)| card)
    }

    /// The card a drag in `direction` pulls into view.
    ///
    /// Returns `None` for [`SwipeDirection::None`] and for side swipes whose
    /// card is absent.
    pub fn revealed_by(&self, direction: SwipeDirection) -> Option<&C> {
        match direction {
            SwipeDirection::Up => Some(&self.after),
            SwipeDirection::Down => Some(&self.before),
            SwipeDirection::Left => self.right.as_ref(),
            SwipeDirection::Right => self.left.as_ref(),
            SwipeDirection::None => None,
        }
    }
}

impl<C: Clone> RoleSet<C> {
    /// Returns the association after a committed swipe in `direction`.
    ///
    /// | swipe | becomes active | old active becomes | third card     |
    /// |-------|----------------|--------------------|----------------|
    /// | up    | after          | before             | before → after |
    /// | down  | before         | after              | after → before |
    /// | left  | right          | left               | left → right   |
    /// | right | left           | right              | right → left   |
    ///
    /// Roles not named in the row are untouched. A side swipe without its
    /// revealed card, and [`SwipeDirection::None`], return an unchanged copy.
    #[must_use]
    pub fn rotated(&self, direction: SwipeDirection) -> Self {
        let mut next = self.clone();
        match direction {
            SwipeDirection::Up => {
                next.active = self.after.clone();
                next.before = self.active.clone();
                next.after = self.before.clone();
            }
            SwipeDirection::Down => {
                next.active = self.before.clone();
                next.after = self.active.clone();
                next.before = self.after.clone();
            }
            SwipeDirection::Left => {
                if let Some(right) = &self.right {
                    next.active = right.clone();
                    next.left = Some(self.active.clone());
                    next.right = self.left.clone();
                }
            }
            SwipeDirection::Right => {
                if let Some(left) = &self.left {
                    next.active = left.clone();
                    next.right = Some(self.active.clone());
                    next.left = self.right.clone();
                }
            }
            SwipeDirection::None => {}
        }
        next
    }
}

impl<C: PartialEq> RoleSet<C> {
    /// Returns the role held by `card`, if it is tracked.
    pub fn role_of(&self, card: &C) -> Option<CardRole> {
        self.iter()
            .find_map(|(role, tracked)| (tracked == card).then_some(role))
    }

    /// Returns `true` when no card holds two roles.
    pub fn is_exclusive(&self) -> bool {
        let cards: Vec<&C> = self.cards().collect();
        cards
            .iter()
            .enumerate()
            .all(|(i, a)| cards[i + 1..].iter().all(|b| a != b))
    }
}

impl<C: Clone + PartialEq> RoleSet<C> {
    /// Lists the cards whose role differs between `self` and `next`.
    ///
    /// Each entry is `(card, old role, new role)`; a `None` role means the
    /// card is not tracked on that side.
    pub fn changes_to(&self, next: &Self) -> Vec<(C, Option<CardRole>, Option<CardRole>)> {
        let mut out: Vec<(C, Option<CardRole>, Option<CardRole>)> = Vec::new();
        for card in self.cards().chain(next.cards()) {
            if out.iter().any(|(seen, _, _)| seen == card) {
                continue;
            }
            let from = self.role_of(card);
            let to = next.role_of(card);
            if from != to {
                out.push((card.clone(), from, to));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> RoleSet<u32> {
        RoleSet::new(1, 2, 3).with_sides(Some(4), Some(5))
    }

    #[test]
    fn rotation_up_cycles_vertical_roles() {
        let next = five().rotated(SwipeDirection::Up);
        assert_eq!(next.get(CardRole::Before), Some(&2));
        assert_eq!(next.get(CardRole::Active), Some(&3));
        assert_eq!(next.get(CardRole::After), Some(&1));
        assert_eq!(next.get(CardRole::Left), Some(&4));
        assert_eq!(next.get(CardRole::Right), Some(&5));
    }

    #[test]
    fn rotation_down_cycles_vertical_roles() {
        let next = five().rotated(SwipeDirection::Down);
        assert_eq!(next.get(CardRole::Before), Some(&3));
        assert_eq!(next.get(CardRole::Active), Some(&1));
        assert_eq!(next.get(CardRole::After), Some(&2));
    }

    #[test]
    fn rotation_left_and_right_cycle_side_roles() {
        let left = five().rotated(SwipeDirection::Left);
        assert_eq!(left.active(), &5);
        assert_eq!(left.get(CardRole::Left), Some(&2));
        assert_eq!(left.get(CardRole::Right), Some(&4));
        assert_eq!(left.get(CardRole::Before), Some(&1));

        let right = five().rotated(SwipeDirection::Right);
        assert_eq!(right.active(), &4);
        assert_eq!(right.get(CardRole::Right), Some(&2));
        assert_eq!(right.get(CardRole::Left), Some(&5));
    }

    #[test]
    fn opposite_swipes_undo_each_other() {
        let cards = five();
        for (a, b) in [
            (SwipeDirection::Up, SwipeDirection::Down),
            (SwipeDirection::Left, SwipeDirection::Right),
        ] {
            assert_eq!(cards.rotated(a).rotated(b), cards);
        }
    }

    #[test]
    fn side_swipe_with_one_side_card() {
        let cards = RoleSet::new(1, 2, 3).with_sides(None, Some(5));
        let next = cards.rotated(SwipeDirection::Left);
        assert_eq!(next.active(), &5);
        assert_eq!(next.get(CardRole::Left), Some(&2));
        assert_eq!(next.get(CardRole::Right), None);
        assert!(next.is_exclusive());

        // Nothing to reveal on the left: unchanged.
        assert_eq!(cards.rotated(SwipeDirection::Right), cards);
    }

    #[test]
    fn changes_list_only_moved_cards() {
        let cards = five();
        let next = cards.rotated(SwipeDirection::Up);
        let changes = cards.changes_to(&next);
        assert_eq!(changes.len(), 3);
        assert!(changes.iter().all(|(card, _, _)| [1, 2, 3].contains(card)));
        assert!(changes.contains(&(2, Some(CardRole::Active), Some(CardRole::Before))));
    }

    #[test]
    fn exclusivity_detects_shared_cards() {
        assert!(five().is_exclusive());
        assert!(!RoleSet::new(1, 1, 3).is_exclusive());
        assert!(!RoleSet::new(1, 2, 3).with_sides(Some(2), None).is_exclusive());
    }

    #[test]
    fn revealed_cards_follow_drag_direction() {
        let cards = RoleSet::new(1, 2, 3).with_sides(Some(4), None);
        assert_eq!(cards.revealed_by(SwipeDirection::Up), Some(&3));
        assert_eq!(cards.revealed_by(SwipeDirection::Down), Some(&1));
        assert_eq!(cards.revealed_by(SwipeDirection::Right), Some(&4));
        assert_eq!(cards.revealed_by(SwipeDirection::Left), None);
        assert_eq!(cards.revealed_by(SwipeDirection::None), None);
    }
}
