use crate::*;

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    /// A multiple of 0.25 in `[0, max)`, so float arithmetic on it stays exact.
    fn gen_quarters(&mut self, max: u64) -> f64 {
        self.gen_range_u64(0, max * 4) as f64 / 4.0
    }
}

fn random_config(rng: &mut Lcg) -> ListConfig {
    let items_count = rng.gen_range_usize(1, 200);
    let item_height = rng.gen_range_u64(1, 64) as f64;
    let viewport_height = rng.gen_quarters(800);
    let overscan = rng.gen_range_usize(0, 6);
    ListConfig::new(items_count, item_height, viewport_height).with_overscan(overscan)
}

fn span_indexes(span: IndexSpan) -> Vec<usize> {
    (span.start_index..=span.end_index).collect()
}

#[test]
fn range_at_top_of_large_list() {
    let config = ListConfig::new(10_000, 40.0, 600.0);
    assert_eq!(config.overscan, 3);

    let unexpanded = unexpanded_span(0.0, &config).unwrap();
    assert_eq!(unexpanded.start_index, 0);
    assert_eq!(unexpanded.end_index, 15); // ceil(600 / 40)

    let range = compute_range(0.0, &config);
    assert_eq!(range.start_index(), Some(0));
    assert_eq!(range.end_index(), Some(18)); // min(9999, 15 + 3)
    assert_eq!(range.items.len(), 19);
    assert_eq!(range.total_height, 400_000.0);
}

#[test]
fn range_after_scrolling_into_large_list() {
    let config = ListConfig::new(10_000, 40.0, 600.0);

    let unexpanded = unexpanded_span(4_000.0, &config).unwrap();
    assert_eq!(unexpanded.start_index, 100); // floor(4000 / 40)
    assert_eq!(unexpanded.end_index, 115); // ceil(4600 / 40)

    let range = compute_range(4_000.0, &config);
    assert_eq!(range.start_index(), Some(97));
    assert_eq!(range.end_index(), Some(118));
    assert_eq!(range.items.first().map(|it| it.offset_top), Some(97.0 * 40.0));
    assert_eq!(range.items.last().map(|it| it.offset_top), Some(118.0 * 40.0));
}

#[test]
fn partially_visible_edge_rows_are_included() {
    let config = ListConfig::new(100, 10.0, 20.0).with_overscan(0);
    // Viewport [5, 25): rows 0 and 2 are only half visible.
    let span = compute_span(5.0, &config).unwrap();
    assert_eq!(span.start_index, 0);
    assert_eq!(span.end_index, 3); // ceil(25 / 10)
}

#[test]
fn empty_list_produces_empty_range() {
    let config = ListConfig::new(0, 40.0, 600.0);
    let range = compute_range(0.0, &config);
    assert!(range.is_empty());
    assert_eq!(range.span, None);
    assert_eq!(range.start_index(), None);
    assert_eq!(range.end_index(), None);
    assert_eq!(range.total_height, 0.0);

    let mut calls = 0;
    for_each_virtual_item(100.0, &config, |_| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn invalid_item_height_degrades_to_empty_range() {
    for item_height in [0.0, -0.0, -40.0, f64::NAN, f64::INFINITY] {
        let config = ListConfig::new(100, item_height, 600.0);
        let range = compute_range(0.0, &config);
        assert!(range.is_empty(), "item_height={item_height}");
        assert_eq!(range.total_height, 0.0, "item_height={item_height}");
        assert_eq!(config.index_at_offset(10.0), None);
    }
}

#[test]
fn negative_or_nan_scroll_offset_is_treated_as_top() {
    let config = ListConfig::new(100, 10.0, 50.0);
    let top = compute_range(0.0, &config);
    assert_eq!(compute_range(-250.0, &config), top);
    assert_eq!(compute_range(f64::NAN, &config), top);
}

#[test]
fn negative_viewport_height_is_treated_as_zero() {
    let config = ListConfig::new(100, 10.0, -50.0).with_overscan(0);
    let span = compute_span(100.0, &config).unwrap();
    assert_eq!(span.start_index, 10);
    assert_eq!(span.end_index, 10);
    assert_eq!(config.max_scroll_offset(), 1_000.0);
}

#[test]
fn overscrolled_offset_keeps_start_within_end() {
    let config = ListConfig::new(10, 10.0, 50.0);
    let span = compute_span(10_000.0, &config).unwrap();
    assert_eq!(span.end_index, 9);
    assert_eq!(span.start_index, 9);

    let span = compute_span(f64::INFINITY, &config).unwrap();
    assert_eq!(span.start_index, 9);
    assert_eq!(span.end_index, 9);
}

#[test]
fn overscan_is_clamped_to_list_bounds() {
    let config = ListConfig::new(5, 10.0, 1_000.0).with_overscan(50);
    let range = compute_range(0.0, &config);
    assert_eq!(range.start_index(), Some(0));
    assert_eq!(range.end_index(), Some(4));
    assert_eq!(
        range.items.iter().map(|it| it.index).collect::<Vec<_>>(),
        [0, 1, 2, 3, 4]
    );
}

#[test]
fn span_bounds_hold_for_random_configs() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..2_000 {
        let config = random_config(&mut rng);
        let offset = rng.gen_quarters(20_000);
        let range = compute_range(offset, &config);

        let span = range.span.expect("non-empty list must produce a span");
        assert!(span.start_index <= span.end_index, "{config:?} offset={offset}");
        assert!(span.end_index < config.items_count, "{config:?} offset={offset}");
        assert_eq!(range.items.len(), span.count());
        for (i, item) in range.items.iter().enumerate() {
            assert_eq!(item.index, span.start_index + i);
            assert_eq!(item.offset_top, item.index as f64 * config.item_height);
        }
        assert_eq!(
            range.total_height,
            config.items_count as f64 * config.item_height
        );
    }
}

#[test]
fn span_is_monotonic_in_scroll_offset() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _ in 0..500 {
        let config = random_config(&mut rng);
        let max = (config.total_height() as u64).max(1) + 200;
        let mut offsets: Vec<f64> = (0..16).map(|_| rng.gen_quarters(max)).collect();
        offsets.sort_by(f64::total_cmp);

        let mut prev: Option<IndexSpan> = None;
        for offset in offsets {
            let span = compute_span(offset, &config).unwrap();
            if let Some(p) = prev {
                assert!(span.start_index >= p.start_index, "{config:?} offset={offset}");
                assert!(span.end_index >= p.end_index, "{config:?} offset={offset}");
            }
            prev = Some(span);
        }
    }
}

#[test]
fn unexpanded_span_covers_every_intersecting_row() {
    let mut rng = Lcg::new(0x5eed_0003);
    for _ in 0..1_000 {
        let config = random_config(&mut rng);
        let offset = rng.gen_quarters((config.total_height() as u64).max(1));
        let span = unexpanded_span(offset, &config).unwrap();

        let h = config.item_height;
        let viewport_end = offset + config.viewport_height;
        for index in 0..config.items_count {
            let top = index as f64 * h;
            let bottom = top + h;
            if top < viewport_end && bottom > offset {
                assert!(
                    span.contains(index),
                    "row {index} intersects [{offset}, {viewport_end}) but {span:?} misses it"
                );
            }
        }
    }
}

#[test]
fn larger_overscan_yields_superset() {
    let mut rng = Lcg::new(0x5eed_0004);
    for _ in 0..1_000 {
        let config = random_config(&mut rng);
        let offset = rng.gen_quarters(20_000);
        let k1 = rng.gen_range_usize(0, 8);
        let k2 = k1 + rng.gen_range_usize(1, 8);

        let narrow = compute_span(offset, &config.with_overscan(k1)).unwrap();
        let wide = compute_span(offset, &config.with_overscan(k2)).unwrap();
        assert!(
            wide.covers(&narrow),
            "{config:?} offset={offset} k1={k1} k2={k2}: {wide:?} vs {narrow:?}"
        );
    }
}

#[test]
fn compute_range_is_idempotent() {
    let mut rng = Lcg::new(0x5eed_0005);
    for _ in 0..200 {
        let config = random_config(&mut rng);
        let offset = rng.gen_quarters(20_000);
        assert_eq!(compute_range(offset, &config), compute_range(offset, &config));
    }
}

#[test]
fn collect_reuses_buffer_and_matches_compute_range() {
    let config = ListConfig::new(1_000, 20.0, 100.0);
    let mut out = Vec::new();

    collect_virtual_items(500.0, &config, &mut out);
    assert_eq!(out, compute_range(500.0, &config).items);

    collect_virtual_items(0.0, &config.with_items_count(0), &mut out);
    assert!(out.is_empty());

    collect_virtual_items(1_000.0, &config, &mut out);
    assert_eq!(
        span_indexes(compute_span(1_000.0, &config).unwrap()),
        out.iter().map(|it| it.index).collect::<Vec<_>>()
    );
}

#[test]
fn index_at_offset_and_scroll_limits() {
    let config = ListConfig::new(10, 10.0, 35.0);
    assert_eq!(config.index_at_offset(0.0), Some(0));
    assert_eq!(config.index_at_offset(9.99), Some(0));
    assert_eq!(config.index_at_offset(10.0), Some(1));
    assert_eq!(config.index_at_offset(1_000.0), Some(9));
    assert_eq!(config.index_at_offset(-5.0), Some(0));

    assert_eq!(config.max_scroll_offset(), 65.0);
    assert_eq!(config.clamp_scroll_offset(500.0), 65.0);
    assert_eq!(config.clamp_scroll_offset(-1.0), 0.0);

    // Content shorter than the viewport cannot scroll.
    let short = ListConfig::new(2, 10.0, 35.0);
    assert_eq!(short.max_scroll_offset(), 0.0);
}

#[test]
fn scroll_to_index_offset_aligns_and_clamps() {
    let config = ListConfig::new(100, 10.0, 50.0);
    assert_eq!(config.scroll_to_index_offset(20, Align::Start, 0.0), 200.0);
    assert_eq!(config.scroll_to_index_offset(20, Align::End, 0.0), 160.0);
    assert_eq!(config.scroll_to_index_offset(20, Align::Center, 0.0), 180.0);

    // Clamped at both ends of the content.
    assert_eq!(config.scroll_to_index_offset(0, Align::Center, 0.0), 0.0);
    assert_eq!(config.scroll_to_index_offset(99, Align::Start, 0.0), 950.0);
    assert_eq!(config.scroll_to_index_offset(5_000, Align::Start, 0.0), 950.0);

    // Auto keeps a fully visible row where it is and otherwise scrolls minimally.
    assert_eq!(config.scroll_to_index_offset(12, Align::Auto, 100.0), 100.0);
    assert_eq!(config.scroll_to_index_offset(5, Align::Auto, 100.0), 50.0);
    assert_eq!(config.scroll_to_index_offset(20, Align::Auto, 100.0), 160.0);

    assert_eq!(
        ListConfig::new(0, 10.0, 50.0).scroll_to_index_offset(3, Align::Start, 0.0),
        0.0
    );
}

#[test]
fn memo_recomputes_only_when_inputs_change() {
    let config = ListConfig::new(1_000, 20.0, 100.0);
    let mut memo = RangeMemo::new();
    assert_eq!(memo.policy(), RecomputePolicy::AllInputs);
    assert!(memo.cached().is_none());

    let first = memo.get(0.0, &config).clone();
    assert_eq!(memo.recompute_count(), 1);
    assert_eq!(memo.get(0.0, &config), &first);
    assert_eq!(memo.recompute_count(), 1);

    memo.get(40.0, &config);
    assert_eq!(memo.recompute_count(), 2);

    memo.get(40.0, &config.with_items_count(2_000));
    assert_eq!(memo.recompute_count(), 3);

    memo.get(40.0, &config.with_items_count(2_000).with_overscan(0));
    assert_eq!(memo.recompute_count(), 4);

    memo.invalidate();
    memo.get(40.0, &config.with_items_count(2_000).with_overscan(0));
    assert_eq!(memo.recompute_count(), 5);
}

#[test]
fn memo_treats_equivalent_offsets_as_unchanged() {
    let config = ListConfig::new(1_000, 20.0, 100.0);
    let mut memo = RangeMemo::new();
    memo.get(f64::NAN, &config);
    memo.get(f64::NAN, &config);
    memo.get(-10.0, &config);
    memo.get(0.0, &config);
    assert_eq!(memo.recompute_count(), 1);
}

#[test]
fn memo_all_inputs_policy_tracks_geometry_changes() {
    let config = ListConfig::new(1_000, 20.0, 100.0);
    let mut memo = RangeMemo::with_policy(RecomputePolicy::AllInputs);
    memo.get(200.0, &config);

    let taller = config.with_item_height(40.0);
    let range = memo.get(200.0, &taller).clone();
    assert_eq!(range, compute_range(200.0, &taller));
    assert_eq!(memo.recompute_count(), 2);

    let wider = taller.with_viewport_height(400.0);
    assert_eq!(memo.get(200.0, &wider), &compute_range(200.0, &wider));
    assert_eq!(memo.recompute_count(), 3);
}

#[test]
fn memo_offset_and_count_policy_serves_stale_rows_for_geometry_changes() {
    let config = ListConfig::new(1_000, 20.0, 100.0);
    let mut memo = RangeMemo::with_policy(RecomputePolicy::OffsetAndCount);
    let before = memo.get(200.0, &config).clone();

    let taller = config.with_item_height(40.0).with_overscan(10);
    let after = memo.get(200.0, &taller).clone();
    assert_eq!(memo.recompute_count(), 1);
    assert_eq!(after.items, before.items);
    assert_eq!(after.span, before.span);
    // Total height is never cached.
    assert_eq!(after.total_height, 40_000.0);

    // The next scroll picks up the new geometry.
    assert_eq!(memo.get(201.0, &taller), &compute_range(201.0, &taller));
    assert_eq!(memo.recompute_count(), 2);

    memo.set_policy(RecomputePolicy::AllInputs);
    assert!(memo.cached().is_none());
}

#[test]
fn publish_offset_sanitizes_and_reports_changes() {
    let mut status = ScrollStatus::new();
    assert_eq!(status.snapshot(), ScrollState::default());

    assert!(!status.publish_offset(0.0));
    assert!(status.publish_offset(120.5));
    assert!(!status.publish_offset(120.5));
    assert_eq!(status.scroll_offset(), 120.5);

    assert!(status.publish_offset(-3.0));
    assert_eq!(status.scroll_offset(), 0.0);
    assert!(!status.publish_offset(f64::NAN));
    assert_eq!(status.scroll_offset(), 0.0);
    assert!(!status.is_scrolling());
}

#[test]
fn only_latest_quiet_token_clears_scrolling() {
    let mut status = ScrollStatus::new();
    let first = status.begin_activity();
    assert!(status.is_scrolling());

    let second = status.begin_activity();
    assert_ne!(first, second);

    assert!(!status.quiet_period_elapsed(first));
    assert!(status.is_scrolling());

    assert!(status.quiet_period_elapsed(second));
    assert!(!status.is_scrolling());
    assert!(!status.quiet_period_elapsed(second));
}

#[test]
fn end_activity_invalidates_outstanding_tokens() {
    let mut status = ScrollStatus::new();
    let token = status.begin_activity();
    assert!(status.end_activity());
    assert!(!status.end_activity());

    status.begin_activity();
    assert!(!status.quiet_period_elapsed(token));
    assert!(status.is_scrolling());
}

#[test]
fn is_scrolling_resets_after_quiet_period_when_polled() {
    let mut status = ScrollStatus::new();
    status.notify_scroll_event(0);
    assert!(status.is_scrolling());
    assert!(!status.update_scrolling(9, 10));
    assert!(status.is_scrolling());
    assert!(status.update_scrolling(10, 10));
    assert!(!status.is_scrolling());
    assert!(!status.update_scrolling(100, 10));
}

#[test]
fn polled_scroll_burst_restarts_quiet_period() {
    let mut status = ScrollStatus::new();
    for now_ms in [0, 100, 200, 300] {
        status.notify_scroll_event(now_ms);
        assert!(!status.update_scrolling(now_ms + 149, 150));
        assert!(status.is_scrolling());
    }
    assert!(status.update_scrolling(450, 150));
    assert!(!status.is_scrolling());
}
