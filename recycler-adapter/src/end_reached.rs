use recycler::ScrollDirection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndReachedState {
    /// Armed: the next qualifying scroll fires.
    #[default]
    Idle,
    /// Fired; waiting for the caller to [`EndReached::resolve`].
    Triggered,
    /// Resolved, but re-arming is deferred until [`EndReached::on_update`].
    WaitingForUpdate,
}

/// Fires once when a forward scroll brings the viewport's far edge within
/// `threshold * viewport_size` of the content end.
///
/// A threshold of `0.5` fires when the end of the content is within half a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndReached {
    threshold: f32,
    state: EndReachedState,
}

impl EndReached {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            state: EndReachedState::Idle,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn state(&self) -> EndReachedState {
        self.state
    }

    /// Checks one scroll step. Returns `true` exactly when the end-reached callback should run.
    pub fn check(
        &mut self,
        prev_offset: u64,
        offset: u64,
        viewport_size: u32,
        content_size: u64,
        item_count: usize,
    ) -> bool {
        if self.state != EndReachedState::Idle || content_size == 0 || item_count == 0 {
            return false;
        }
        let forward = recycler::geometry::scroll_direction(prev_offset, offset, None)
            == Some(ScrollDirection::Forward);
        if !forward {
            return false;
        }
        let distance = content_size.saturating_sub(offset.saturating_add(viewport_size as u64));
        let limit = viewport_size as f64 * self.threshold as f64;
        if distance as f64 <= limit {
            vdebug!(offset, distance, "EndReached: fired");
            self.state = EndReachedState::Triggered;
            return true;
        }
        false
    }

    /// Acknowledges a fired callback.
    ///
    /// With `wait_for_update`, detection stays disarmed until the next [`EndReached::on_update`]
    /// (typically after the newly loaded page has been applied).
    pub fn resolve(&mut self, wait_for_update: bool) {
        if self.state == EndReachedState::Triggered {
            self.state = if wait_for_update {
                EndReachedState::WaitingForUpdate
            } else {
                EndReachedState::Idle
            };
        }
    }

    pub fn on_update(&mut self) {
        if self.state == EndReachedState::WaitingForUpdate {
            self.state = EndReachedState::Idle;
        }
    }
}
