// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer samples through the recognizer into the controller.

mod common;

use std::time::Duration;

use common::{ACTIVE, AFTER, BEFORE, Page};
use kurbo::Point;
use suaip_cards::{
    CardsConfig, DragRecognizer, Phase, Release, SwipeCards, SwipeConfig, SwipeDirection,
    Transition, Translation,
};

fn vertical(page: &mut Page) -> SwipeCards<u32> {
    SwipeCards::new(page, CardsConfig::vertical(BEFORE, ACTIVE, AFTER)).unwrap()
}

/// Presses at `from`, moves through `path` 16ms apart and releases at the last point.
fn swipe(
    cards: &mut SwipeCards<u32>,
    page: &mut Page,
    recognizer: &mut DragRecognizer,
    from: Point,
    path: &[Point],
) -> Option<Release> {
    let mut time = 0.0;
    recognizer.press(from, time);
    for &pos in path {
        time += 16.0;
        if let Some(drag) = recognizer.moved(pos, time) {
            cards.on_drag(page, &drag);
        }
    }
    let last = path.last().copied().unwrap_or(from);
    recognizer
        .release(last, time + 16.0)
        .map(|end| cards.on_drag_end(page, &end))
}

#[test]
fn tap_does_not_move_cards() {
    let mut page = Page::phone();
    let mut cards = vertical(&mut page);
    let mut recognizer = cards.recognizer();

    let release = swipe(
        &mut cards,
        &mut page,
        &mut recognizer,
        Point::new(100.0, 400.0),
        &[Point::new(103.0, 404.0)],
    );

    assert_eq!(release, None);
    assert_eq!(cards.phase(), Phase::Idle);
    assert_eq!(page.transform(ACTIVE), None);
}

#[test]
fn slow_upward_swipe_commits_with_fast_animation() {
    let mut page = Page::phone();
    let mut cards = vertical(&mut page);
    let mut recognizer = cards.recognizer();

    // 10px of slop, then 100px of drag: under 1px/ms.
    let path: Vec<Point> = (1..=6)
        .map(|step| Point::new(100.0, 600.0 - 110.0 * f64::from(step) / 6.0))
        .collect();
    let release = swipe(
        &mut cards,
        &mut page,
        &mut recognizer,
        Point::new(100.0, 600.0),
        &path,
    );

    assert_eq!(release, Some(Release::Commit(SwipeDirection::Up)));
    assert_eq!(
        page.card(ACTIVE).transition,
        Some(Transition(Duration::from_millis(200)))
    );
    assert!(cards.on_transition_end(&mut page));
    assert_eq!(cards.cards().active(), &AFTER);
}

#[test]
fn flick_uses_slow_named_duration() {
    let mut page = Page::phone();
    let mut cards = vertical(&mut page);
    let mut recognizer = cards.recognizer();

    // 200px down in 32ms.
    let release = swipe(
        &mut cards,
        &mut page,
        &mut recognizer,
        Point::new(100.0, 100.0),
        &[Point::new(100.0, 310.0)],
    );

    assert_eq!(release, Some(Release::SnapBack));
    assert_eq!(
        page.card(ACTIVE).transition,
        Some(Transition(Duration::from_millis(100)))
    );
    assert_eq!(page.transform(ACTIVE), Some(Translation::ZERO));
}

#[test]
fn custom_min_distance_reaches_recognizer() {
    let mut page = Page::phone();
    let config = SwipeConfig::default().with_drag_min_distance(40.0);
    let mut cards =
        SwipeCards::with_config(&mut page, CardsConfig::vertical(BEFORE, ACTIVE, AFTER), config)
            .unwrap();
    let mut recognizer = cards.recognizer();

    let release = swipe(
        &mut cards,
        &mut page,
        &mut recognizer,
        Point::new(100.0, 400.0),
        &[Point::new(100.0, 430.0)],
    );
    assert_eq!(release, None);

    let release = swipe(
        &mut cards,
        &mut page,
        &mut recognizer,
        Point::new(100.0, 400.0),
        &[Point::new(100.0, 470.0)],
    );
    assert_eq!(release, Some(Release::SnapBack));
    assert_eq!(cards.distance_delta(), 0.0);
}
