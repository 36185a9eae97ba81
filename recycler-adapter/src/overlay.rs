use alloc::vec::Vec;

use recycler::LaneWindow;

/// A scaled segment of the overlay track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub offset: f32,
    pub length: f32,
}

/// Debug-overlay geometry for one lane, scaled from content space onto a track.
///
/// Painting is left to the host; this only computes where the bars and item ticks go.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlayFrame {
    pub lane: usize,
    /// The tracked window, from the start endpoint to the end of the end endpoint.
    pub render_window: Bar,
    /// The viewport.
    pub viewable_window: Bar,
    /// Start of each realized item, in slot order.
    pub blocks: Vec<f32>,
}

impl OverlayFrame {
    /// Captures `lane` for a track of `track_length` showing `content_size` worth of content.
    ///
    /// `border` is the painted border width in content units; it is taken off both bars so the
    /// outlines stay inside their extent. Returns `None` when there is nothing to draw.
    pub fn capture<T, K>(
        lane: &LaneWindow<T, K>,
        track_length: f32,
        content_size: u64,
        border: f32,
    ) -> Option<Self> {
        if content_size == 0 || track_length <= 0.0 {
            return None;
        }
        let ratio = track_length / content_size as f32;
        let span = lane.both_ends().span()?;

        let render_window = Bar {
            offset: span.start as f32 * ratio,
            length: ((span.len() as f32) - border * 2.0).max(0.0) * ratio,
        };
        let viewable_window = Bar {
            offset: lane.scroll_offset() as f32 * ratio,
            length: ((lane.viewport_size() as f32) - border * 2.0).max(0.0) * ratio,
        };
        if render_window.length == 0.0 || viewable_window.length == 0.0 {
            return None;
        }

        let blocks = lane
            .items()
            .iter()
            .map(|it| it.position as f32 * ratio)
            .collect();
        Some(Self {
            lane: lane.lane(),
            render_window,
            viewable_window,
            blocks,
        })
    }
}
