//! `log` フィーチャー有効時のみ出力するログマクロ

#![allow(unused_macros, unused_imports)]

macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
        #[cfg(not(feature = "log"))]
        {
            if false {
                let _ = format!($($tt)*);
            }
        }
    };
}

macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
        #[cfg(not(feature = "log"))]
        {
            if false {
                let _ = format!($($tt)*);
            }
        }
    };
}

pub(crate) use {debug, trace};
