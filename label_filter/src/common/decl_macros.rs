// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq`] so that test failures show a colored
/// diff of the two sides.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Runs the block only when the given debug flag is `true`. Used with the flags in
/// [`crate::common::debug_flags`].
#[macro_export]
macro_rules! call_if_true {
    ($cond:expr, $block:expr) => {{
        if $cond {
            $block
        }
    }};
}
