// Example: three round-robin lanes with two item kinds and variable heights.
use recycler::{ItemSize, RecyclerOptions, Waterfall};

#[derive(Clone, Debug)]
enum Card {
    Photo { height: u32 },
    Text,
}

fn main() {
    let data: Vec<Card> = (0..600)
        .map(|i| {
            if i % 3 == 0 {
                Card::Photo {
                    height: 120 + (i % 7) * 20,
                }
            } else {
                Card::Text
            }
        })
        .collect();

    let options = RecyclerOptions::new_with_kind(
        200,
        ItemSize::dynamic(|card: &Card, _| match card {
            Card::Photo { height } => *height,
            Card::Text => 64,
        }),
        |card: &Card, _| match card {
            Card::Photo { .. } => 1,
            Card::Text => 0,
        },
    )
    .with_lanes(3);

    let mut layout = match Waterfall::new(options) {
        Ok(layout) => layout,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    layout.resize(&data, 800, 0);
    for offset in [100, 250, 400, 3_000] {
        let lanes = layout.update(&data, offset);
        let sizes: Vec<usize> = lanes.iter().map(|lane| lane.len()).collect();
        println!("offset={offset} realized per lane={sizes:?}");
    }

    for lane in layout.lanes() {
        println!(
            "lane {} ends={:?} viewable={}",
            lane.lane(),
            lane.both_ends().indexes(),
            lane.items()
                .iter()
                .filter(|it| it.is_viewable(&lane.window_state()))
                .count()
        );
    }
}
