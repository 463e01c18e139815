//! Logging shims that forward to `defmt` when the `defmt` feature is enabled
//! and compile to nothing otherwise.
#![allow(unused_macros, unused_imports)]

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::trace!($($arg)*);
        }
    };
}
pub(crate) use trace;

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::debug!($($arg)*);
        }
    };
}
pub(crate) use debug;

macro_rules! warni {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::warn!($($arg)*);
        }
    };
}
pub(crate) use warni as warn;

macro_rules! error {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        {
            defmt::error!($($arg)*);
        }
    };
}
pub(crate) use error;
