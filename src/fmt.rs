//! Internal logging macros. These forward to `defmt` when the `defmt` feature is enabled, and
//! compile to nothing otherwise; arguments are still evaluated by reference so that builds
//! without a logger don't warn about unused values.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "defmt")] {
                ::defmt::trace!($s $(, $x)*);
            } else {
                let _ = ($( & $x ),*);
            }
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "defmt")] {
                ::defmt::debug!($s $(, $x)*);
            } else {
                let _ = ($( & $x ),*);
            }
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "defmt")] {
                ::defmt::info!($s $(, $x)*);
            } else {
                let _ = ($( & $x ),*);
            }
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "defmt")] {
                ::defmt::error!($s $(, $x)*);
            } else {
                let _ = ($( & $x ),*);
            }
        }
    };
}

pub(crate) use {debug, error, info, trace};
