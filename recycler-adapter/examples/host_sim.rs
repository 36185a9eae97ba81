// Example: drive a `ListHost` the way a UI list component would.
use recycler::RecyclerOptions;
use recycler_adapter::{ListHost, OverlayFrame, SlotChange, ViewabilityTracker};

fn main() {
    let mut data: Vec<String> = (0..40).map(|i| format!("row {i}")).collect();
    let options = RecyclerOptions::new(120, 48_u32);
    let mut host = match ListHost::new(options) {
        Ok(host) => host.with_end_reached(0.5),
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };
    let mut viewability = ViewabilityTracker::new();

    let frame = host.on_layout(&data, 480);
    println!("layout: {} mounts", frame.changes.len());

    let mut offset = 0;
    while offset < 3_000 {
        offset += 96;
        let frame = host.on_scroll(&data, offset);
        let rebinds = frame
            .changes
            .iter()
            .filter(|c| matches!(c, SlotChange::Rebind { .. }))
            .count();
        println!("offset={offset} rebinds={rebinds}");

        if let Some(changed) = viewability.observe(host.lanes()) {
            println!("  viewable now: {}", changed.viewable_items.len());
        }

        if frame.end_reached {
            let next = data.len();
            data.extend((next..next + 40).map(|i| format!("row {i}")));
            if let Some(detector) = host.end_reached_mut() {
                detector.resolve(true);
            }
            let frame = host.on_data_changed(&data);
            println!(
                "  loaded page, len={} content={} changes={}",
                data.len(),
                host.content_size(),
                frame.changes.len()
            );
        }
    }

    if let Some(overlay) = OverlayFrame::capture(&host.lanes()[0], 200.0, host.content_size(), 1.0)
    {
        println!(
            "overlay: render={:?} viewable={:?} blocks={}",
            overlay.render_window,
            overlay.viewable_window,
            overlay.blocks.len()
        );
    }
}
