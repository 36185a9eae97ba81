// Events whose first field is `lane = ..` go to the `recycler::lane` target.
#[cfg(feature = "tracing")]
macro_rules! recycler_event {
    ($level:ident, lane = $lane:expr, $($tt:tt)*) => {
        tracing::$level!(target: "recycler::lane", lane = $lane, $($tt)*)
    };
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "recycler", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! recycler_event {
    ($($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => {
        recycler_event!(trace, $($tt)*)
    };
}

macro_rules! vdebug {
    ($($tt:tt)*) => {
        recycler_event!(debug, $($tt)*)
    };
}

macro_rules! vwarn {
    ($($tt:tt)*) => {
        recycler_event!(warn, $($tt)*)
    };
}
