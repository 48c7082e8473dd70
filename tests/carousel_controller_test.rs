//! Carousel controller behaviour
//!
//! Drives `Carousel` with a fake clock (explicit `Instant`s) through the
//! paging laws, the timer activation rule and the category/hover/navigation
//! interplay the landing page relies on.

use std::time::{Duration, Instant};

use parktui::model::carousel::{Carousel, CarouselItem, CarouselSettings, CategoryFilter, WrapPolicy};

#[derive(Clone, Debug)]
struct Item {
    id: String,
    category: String,
}

impl CarouselItem for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

const INTERVAL: Duration = Duration::from_millis(5000);

fn items(categories: &[&str]) -> Vec<Item> {
    categories
        .iter()
        .enumerate()
        .map(|(i, category)| Item {
            id: format!("ride-{}", i),
            category: category.to_string(),
        })
        .collect()
}

fn settings(page_window: usize) -> CarouselSettings {
    CarouselSettings {
        page_window,
        auto_advance_interval: INTERVAL,
        wrap: WrapPolicy::Wrap,
    }
}

fn land(n: usize) -> Vec<Item> {
    items(&vec!["land"; n])
}

#[test]
fn test_max_index_for_all_lengths_and_windows() {
    let now = Instant::now();
    for window in 1..=6 {
        for n in 0..=12 {
            let carousel = Carousel::new(land(n), CategoryFilter::All, settings(window), now);
            assert_eq!(
                carousel.max_index(),
                n.saturating_sub(window),
                "n={} window={}",
                n,
                window
            );
        }
    }
}

#[test]
fn test_six_land_rides_cycle_one_two_zero() {
    let now = Instant::now();
    let mut carousel = Carousel::new(
        land(6),
        CategoryFilter::Category("land".to_string()),
        settings(4),
        now,
    );
    assert_eq!(carousel.max_index(), 2);
    assert_eq!(carousel.current_index(), 0);

    let mut seen = Vec::new();
    for _ in 0..3 {
        carousel.go_to_next(now);
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn test_next_cycles_back_after_max_plus_one_calls() {
    let now = Instant::now();
    for n in [0, 1, 4, 5, 9, 13] {
        let mut carousel = Carousel::new(land(n), CategoryFilter::All, settings(4), now);
        for start in 0..=carousel.max_index() {
            assert!(carousel.go_to_index(start, now));
            for _ in 0..=carousel.max_index() {
                carousel.go_to_next(now);
            }
            assert_eq!(carousel.current_index(), start, "n={} start={}", n, start);
        }
    }
}

#[test]
fn test_previous_from_zero_wraps_to_max() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(7), CategoryFilter::All, settings(4), now);
    carousel.go_to_previous(now);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.current_index(), carousel.max_index());
}

#[test]
fn test_single_page_never_moves() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(2), CategoryFilter::All, settings(4), now);
    assert_eq!(carousel.max_index(), 0);

    for _ in 0..5 {
        carousel.go_to_next(now);
        assert_eq!(carousel.current_index(), 0);
        carousel.go_to_previous(now);
        assert_eq!(carousel.current_index(), 0);
    }

    // Timer ticks on a single page also stay put
    let mut carousel = Carousel::new(land(2), CategoryFilter::All, settings(4), now);
    assert!(carousel.tick(now + INTERVAL));
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn test_unknown_category_is_empty_not_an_error() {
    let now = Instant::now();
    let mut carousel = Carousel::new(
        items(&["land", "water", "kids"]),
        CategoryFilter::All,
        settings(4),
        now,
    );
    carousel.set_category(CategoryFilter::Category("space".to_string()), now);

    assert_eq!(carousel.filtered_len(), 0);
    assert_eq!(carousel.max_index(), 0);
    assert!(carousel.visible_items().is_empty());

    carousel.go_to_next(now);
    carousel.go_to_previous(now);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.indicators().len(), 1);
}

#[test]
fn test_filter_is_stable_and_recomputed_from_source() {
    let now = Instant::now();
    let source = items(&["land", "water", "land", "kids", "water", "land"]);
    let mut carousel = Carousel::new(source, CategoryFilter::All, settings(2), now);

    carousel.set_category(CategoryFilter::Category("water".to_string()), now);
    let ids: Vec<&str> = carousel.filtered_items().iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["ride-1", "ride-4"]);

    carousel.set_category(CategoryFilter::Category("land".to_string()), now);
    let ids: Vec<&str> = carousel.filtered_items().iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["ride-0", "ride-2", "ride-5"]);

    carousel.set_category(CategoryFilter::All, now);
    assert_eq!(carousel.filtered_len(), 6);
    assert_eq!(carousel.items().len(), 6);
}

#[test]
fn test_visible_items_follow_current_index() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), now);
    carousel.go_to_index(2, now);

    let ids: Vec<&str> = carousel.visible_items().iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["ride-2", "ride-3", "ride-4", "ride-5"]);
}

#[test]
fn test_category_change_resets_index_and_resumes_auto_advance() {
    let now = Instant::now();
    let mut carousel = Carousel::new(
        items(&["land", "land", "land", "land", "land", "water", "water"]),
        CategoryFilter::All,
        settings(2),
        now,
    );
    carousel.go_to_index(3, now);
    assert!(!carousel.is_auto_advancing());

    carousel.set_category(CategoryFilter::Category("water".to_string()), now);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.max_index(), 0);
    assert!(carousel.is_auto_advancing());
    assert!(carousel.is_timer_active());

    // Same category again still resets
    carousel.set_category(CategoryFilter::All, now);
    carousel.go_to_next(now);
    carousel.set_category(CategoryFilter::All, now);
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_auto_advancing());
}

#[test]
fn test_every_manual_navigation_pauses_auto_advance() {
    let now = Instant::now();
    let fresh = || Carousel::new(land(8), CategoryFilter::All, settings(4), now);

    let mut next = fresh();
    next.go_to_next(now);
    assert!(!next.is_auto_advancing());

    let mut previous = fresh();
    previous.go_to_previous(now);
    assert!(!previous.is_auto_advancing());

    let mut jump = fresh();
    assert!(jump.go_to_index(1, now));
    assert!(!jump.is_auto_advancing());

    // Only a category change turns it back on; hover does not
    jump.set_hovering(true, now);
    jump.set_hovering(false, now);
    assert!(!jump.is_auto_advancing());
    assert!(!jump.tick(now + INTERVAL * 3));
    assert_eq!(jump.current_index(), 1);
}

#[test]
fn test_out_of_range_jump_is_ignored() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), now);
    carousel.go_to_index(1, now);
    carousel.set_category(CategoryFilter::All, now);
    assert!(carousel.is_auto_advancing());

    assert!(!carousel.go_to_index(3, now));
    assert_eq!(carousel.current_index(), 0);
    assert!(carousel.is_auto_advancing(), "ignored jump must not pause");
}

#[test]
fn test_timer_advances_without_disabling_auto_advance() {
    let start = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), start);

    assert!(!carousel.tick(start + INTERVAL - Duration::from_millis(1)));
    assert_eq!(carousel.current_index(), 0);

    assert!(carousel.tick(start + INTERVAL));
    assert_eq!(carousel.current_index(), 1);
    assert!(carousel.is_auto_advancing());

    assert!(carousel.tick(start + INTERVAL * 2));
    assert!(carousel.tick(start + INTERVAL * 3));
    assert_eq!(carousel.current_index(), 0, "tick wraps like go_to_next");
}

#[test]
fn test_hovering_blocks_ticks_even_after_interval() {
    let start = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), start);

    carousel.set_hovering(true, start + Duration::from_millis(1000));
    assert!(!carousel.is_timer_active());
    assert_eq!(carousel.next_deadline(), None);

    for step in 1..=5 {
        assert!(!carousel.tick(start + INTERVAL * step));
    }
    assert_eq!(carousel.current_index(), 0);

    // Leaving restarts a full interval from the moment the pointer left
    let left = start + INTERVAL * 6;
    carousel.set_hovering(false, left);
    assert!(carousel.is_timer_active());
    assert_eq!(carousel.next_deadline(), Some(left + INTERVAL));
    assert!(!carousel.tick(left + INTERVAL - Duration::from_millis(1)));
    assert!(carousel.tick(left + INTERVAL));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn test_hover_and_manual_pause_are_independent() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), now);

    carousel.set_hovering(true, now);
    carousel.go_to_next(now);
    carousel.set_hovering(false, now);
    assert!(!carousel.is_timer_active());

    carousel.set_hovering(true, now);
    carousel.set_category(CategoryFilter::All, now);
    assert!(carousel.is_auto_advancing());
    assert!(carousel.is_hovering());
    assert!(!carousel.is_timer_active(), "still hovering");

    carousel.set_hovering(false, now);
    assert!(carousel.is_timer_active());
}

#[test]
fn test_missed_intervals_fire_once() {
    let start = Instant::now();
    let mut carousel = Carousel::new(land(9), CategoryFilter::All, settings(4), start);

    let late = start + INTERVAL * 3 + Duration::from_millis(200);
    assert!(carousel.tick(late));
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.tick(late));
    assert_eq!(carousel.time_until_tick(late), Some(INTERVAL));
}

#[test]
fn test_clamp_policy_manual_stops_at_ends() {
    let now = Instant::now();
    let mut carousel = Carousel::new(
        land(6),
        CategoryFilter::All,
        CarouselSettings {
            wrap: WrapPolicy::Clamp,
            ..settings(4)
        },
        now,
    );
    carousel.go_to_previous(now);
    assert_eq!(carousel.current_index(), 0);
    for _ in 0..5 {
        carousel.go_to_next(now);
    }
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_indicators_mark_current_page() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(6), CategoryFilter::All, settings(4), now);
    carousel.go_to_index(1, now);

    let dots = carousel.indicators();
    assert_eq!(dots.len(), 3);
    let active: Vec<usize> = dots.iter().filter(|d| d.active).map(|d| d.index).collect();
    assert_eq!(active, vec![1]);
}

#[test]
fn test_replacing_items_rewinds() {
    let now = Instant::now();
    let mut carousel = Carousel::new(land(8), CategoryFilter::All, settings(4), now);
    carousel.go_to_index(4, now);

    carousel.set_items(land(3), now);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.max_index(), 0);
}
