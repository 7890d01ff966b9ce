#![allow(unused_macros)]
//! Logging macros that forward to `defmt` or `log`, whichever is enabled.
//!
//! `defmt` takes precedence when both features are on. Without either, the
//! arguments are only borrowed so that no unused-variable warnings show up.

macro_rules! __forward_log {
    ($level:ident, $s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::$level!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt")))]
            ::log::$level!($s $(, $x)*);
            #[cfg(not(any(feature = "log", feature = "defmt")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        __forward_log!(trace, $($arg)*)
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        __forward_log!(debug, $($arg)*)
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        __forward_log!(info, $($arg)*)
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        __forward_log!(warn, $($arg)*)
    };
}

macro_rules! error {
    ($($arg:tt)*) => {
        __forward_log!(error, $($arg)*)
    };
}
