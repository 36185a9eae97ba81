/// Errors reported by lane layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecyclerError {
    /// A coordinator needs at least one lane.
    #[error("lane count must be at least 1")]
    NoLanes,

    /// The selected layout variant does not implement this operation.
    #[error("`{operation}` is not implemented for the {layout} layout")]
    NotImplemented {
        layout: &'static str,
        operation: &'static str,
    },
}

pub type Result<T, E = RecyclerError> = core::result::Result<T, E>;
