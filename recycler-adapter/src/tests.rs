use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;
use recycler::{ItemSize, RealizedItem, RecyclerOptions};

fn data(count: usize) -> Vec<usize> {
    (0..count).collect()
}

fn host(look_ahead: u32, lanes: usize) -> ListHost<usize> {
    ListHost::new(RecyclerOptions::new(look_ahead, 50_u32).with_lanes(lanes)).unwrap()
}

fn realized(index: usize, kind: u32) -> RealizedItem<(), u32> {
    RealizedItem {
        item: (),
        index,
        kind,
        position: 0,
        size: 0,
    }
}

#[test]
fn layout_mounts_then_scroll_rebinds() {
    let data = data(100);
    let mut host = host(0, 1);

    let frame = host.on_layout(&data, 300);
    let mounts: Vec<SlotChange> = (0..6)
        .map(|slot| SlotChange::Mount {
            lane: 0,
            slot,
            index: slot,
        })
        .collect();
    assert_eq!(frame.changes, mounts);
    assert_eq!(host.content_size(), 5000);
    assert!(host.on_layout(&data, 300).is_empty());

    let frame = host.on_scroll(&data, 50);
    assert_eq!(
        frame.changes,
        vec![SlotChange::Rebind {
            lane: 0,
            slot: 0,
            from: 0,
            to: 6,
            same_kind: true,
        }]
    );
    assert!(!frame.end_reached);
    assert_eq!(host.scroll_offset(), 50);
}

#[test]
fn zero_viewport_unmounts_everything() {
    let data = data(100);
    let mut host = host(0, 1);
    host.on_layout(&data, 300);
    host.on_scroll(&data, 50);

    let frame = host.on_layout(&data, 0);
    let indexes: Vec<usize> = frame
        .changes
        .iter()
        .map(|change| match *change {
            SlotChange::Unmount { index, .. } => index,
            other => panic!("unexpected change {other:?}"),
        })
        .collect();
    assert_eq!(indexes, vec![6, 1, 2, 3, 4, 5]);

    // Scrolling without a viewport does no layout work.
    assert!(host.on_scroll(&data, 100).is_empty());
    assert_eq!(host.on_layout(&data, 300).changes.len(), 6);
}

#[test]
fn lanes_report_changes_lane_major() {
    let data = data(100);
    let mut host = host(0, 2);
    let frame = host.on_layout(&data, 300);
    assert_eq!(frame.changes.len(), 12);
    assert!(frame.changes[..6].iter().all(|c| c.lane() == 0));
    assert!(frame.changes[6..].iter().all(|c| c.lane() == 1));
    assert_eq!(
        frame.changes[7],
        SlotChange::Mount {
            lane: 1,
            slot: 1,
            index: 3,
        }
    );
    assert_eq!(host.content_size(), 2500);
}

#[test]
fn appended_data_keeps_mounted_slots() {
    let mut host = host(0, 1);
    host.on_layout(&data(20), 300);
    assert_eq!(host.content_size(), 1000);

    let frame = host.on_data_changed(&data(40));
    assert!(frame.changes.is_empty());
    assert_eq!(host.content_size(), 2000);
}

#[test]
fn end_reached_fires_once_until_resolved() {
    let first_page = data(20);
    let mut host = host(0, 1).with_end_reached(0.5);
    host.on_layout(&first_page, 300);

    assert!(!host.on_scroll(&first_page, 400).end_reached);
    assert!(host.on_scroll(&first_page, 600).end_reached);
    assert!(!host.on_scroll(&first_page, 650).end_reached);
    assert_eq!(
        host.end_reached().map(|e| e.state()),
        Some(EndReachedState::Triggered)
    );

    host.end_reached_mut().unwrap().resolve(false);
    assert!(!host.on_scroll(&first_page, 600).end_reached);
    assert!(host.on_scroll(&first_page, 700).end_reached);

    host.end_reached_mut().unwrap().resolve(true);
    assert!(!host.on_scroll(&first_page, 650).end_reached);
    assert!(!host.on_scroll(&first_page, 700).end_reached);

    let more = data(40);
    host.on_data_changed(&more);
    assert_eq!(
        host.end_reached().map(|e| e.state()),
        Some(EndReachedState::Idle)
    );
    assert!(!host.on_scroll(&more, 1400).end_reached);
    assert!(host.on_scroll(&more, 1600).end_reached);
}

#[test]
fn end_reached_ignores_empty_content_and_backward_scrolls() {
    let mut detector = EndReached::new(1.0);
    assert!(!detector.check(0, 100, 300, 0, 0));
    assert!(!detector.check(500, 400, 300, 1000, 20));
    assert_eq!(detector.state(), EndReachedState::Idle);
    assert!(detector.check(300, 400, 300, 1000, 20));

    // `on_update` only re-arms a deferred resolve.
    detector.on_update();
    assert_eq!(detector.state(), EndReachedState::Triggered);
}

#[test]
fn metrics_are_lane_aware() {
    let data = data(10);
    let options = RecyclerOptions::new(0, ItemSize::dynamic(|_: &usize, i| i as u32 * 10 + 10))
        .with_lanes(2);

    assert_eq!(metrics::lane_extents(&data, &options), vec![250, 300]);
    assert_eq!(metrics::content_size(&data, &options), 300);
    assert_eq!(metrics::offset_of_index(&data, &options, 4), Some(40));
    assert_eq!(metrics::offset_of_index(&data, &options, 5), Some(60));
    assert_eq!(metrics::offset_of_index(&data, &options, 0), Some(0));
    assert_eq!(metrics::offset_of_index(&data, &options, 10), None);

    assert_eq!(metrics::max_scroll_offset(300, 100), 200);
    assert_eq!(metrics::max_scroll_offset(50, 100), 0);
    assert_eq!(metrics::clamp_scroll_offset(250, 300, 100), 200);
    assert_eq!(metrics::clamp_scroll_offset(50, 300, 100), 50);
}

#[test]
fn scroll_to_offsets_are_clamped() {
    let data = data(100);
    let mut host = host(0, 1);
    host.on_layout(&data, 300);

    assert_eq!(host.scroll_to_index_offset(&data, 10), Some(500));
    assert_eq!(host.scroll_to_index_offset(&data, 99), Some(4700));
    assert_eq!(host.scroll_to_index_offset(&data, 100), None);
    assert_eq!(host.scroll_to_item_offset(&data, |&x| x == 20), Some(1000));
    assert_eq!(host.scroll_to_item_offset(&data, |&x| x > 1000), None);
}

#[test]
fn viewability_reports_changes_only() {
    let data = data(100);
    let mut host = host(100, 1);
    host.on_layout(&data, 300);

    let mut tracker = ViewabilityTracker::new();
    let first = tracker.observe(host.lanes()).unwrap();
    let indexes: Vec<usize> = first.viewable_items.iter().map(|t| t.index).collect();
    assert_eq!(indexes, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(first.changed.len(), 6);
    assert!(first.changed.iter().all(|t| t.is_viewable));
    assert!(tracker.observe(host.lanes()).is_none());

    host.on_scroll(&data, 100);
    let next = tracker.observe(host.lanes()).unwrap();
    let token = |index, is_viewable| ViewToken {
        lane: 0,
        index,
        is_viewable,
    };
    assert_eq!(
        next.changed,
        vec![
            token(0, false),
            token(1, false),
            token(6, true),
            token(7, true),
        ]
    );
    assert_eq!(next.viewable_items.len(), 6);
    assert!(tracker.is_viewable(0, 7));
    assert!(!tracker.is_viewable(0, 1));
    assert_eq!(tracker.viewable_count(), 6);
}

#[test]
fn overlay_scales_lane_geometry() {
    let data = data(100);
    let mut host = host(0, 1);
    host.on_layout(&data, 300);
    let lane = &host.lanes()[0];

    let frame = OverlayFrame::capture(lane, 2500.0, host.content_size(), 0.0).unwrap();
    assert_eq!(frame.lane, 0);
    assert_eq!(
        frame.render_window,
        Bar {
            offset: 0.0,
            length: 150.0,
        }
    );
    assert_eq!(frame.viewable_window, frame.render_window);
    assert_eq!(frame.blocks, vec![0.0, 25.0, 50.0, 75.0, 100.0, 125.0]);

    let bordered = OverlayFrame::capture(lane, 2500.0, host.content_size(), 2.0).unwrap();
    assert_eq!(bordered.render_window.length, 148.0);

    assert!(OverlayFrame::capture(lane, 2500.0, 0, 0.0).is_none());

    host.on_scroll(&data, 50);
    let lane = &host.lanes()[0];
    let frame = OverlayFrame::capture(lane, 2500.0, host.content_size(), 0.0).unwrap();
    assert_eq!(frame.render_window.offset, 25.0);
    assert_eq!(frame.viewable_window.offset, 25.0);
    assert_eq!(frame.blocks[0], 150.0);
}

#[test]
fn diff_reports_rebinds_mounts_and_unmounts() {
    let previous = vec![
        SlotRecord { index: 0, kind: 0 },
        SlotRecord { index: 1, kind: 1 },
        SlotRecord { index: 5, kind: 0 },
    ];
    let current = vec![realized(2, 0), realized(1, 1), realized(5, 1), realized(3, 1)];

    let mut out = Vec::new();
    diff_lane(4, &previous, &current, &mut out);
    assert_eq!(
        out,
        vec![
            SlotChange::Rebind {
                lane: 4,
                slot: 0,
                from: 0,
                to: 2,
                same_kind: true,
            },
            SlotChange::Rebind {
                lane: 4,
                slot: 2,
                from: 5,
                to: 5,
                same_kind: false,
            },
            SlotChange::Mount {
                lane: 4,
                slot: 3,
                index: 3,
            },
        ]
    );

    out.clear();
    diff_lane(0, &records(&current), &current[..1], &mut out);
    let unmounted: Vec<usize> = out.iter().map(|c| c.slot()).collect();
    assert_eq!(unmounted, vec![1, 2, 3]);
}
