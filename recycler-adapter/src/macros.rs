// Host-side events share one target; the engine's own events stay under `recycler`.
#[cfg(feature = "tracing")]
macro_rules! adapter_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "recycler_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! adapter_event {
    ($($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => {
        adapter_event!(trace, $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        adapter_event!(debug, $($tt)*)
    };
}
