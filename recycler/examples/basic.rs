// Example: a single lane scrolled one item at a time, then re-anchored after a jump.
use recycler::{LaneWindow, RecyclerOptions};

fn main() {
    let data: Vec<u32> = (0..1_000).collect();
    let mut lane = LaneWindow::new(RecyclerOptions::new(100, 40_u32));

    let items = lane.resize(&data, 400, 0);
    println!("realized={} ends={:?}", items.len(), lane.both_ends().indexes());

    for offset in (40..=200).step_by(40) {
        let items = lane.update(&data, offset);
        let slots: Vec<usize> = items.iter().map(|it| it.index).collect();
        println!("offset={offset} slots={slots:?}");
    }

    // A fling far past the window: update re-anchors, force_update settles both sides.
    lane.update(&data, 20_000);
    let items = lane.force_update(&data, 20_000);
    println!(
        "after jump: realized={} ends={:?}",
        items.len(),
        lane.both_ends().indexes()
    );
}
