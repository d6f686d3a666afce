// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal macros.

#![allow(unused_macros)]

/// "Optionally" unsafe block.
///
/// Expands to an `unsafe` block only when this crate is built with the
/// `unsafe` feature. Place statements inside that only need to hold under
/// an invariant proven elsewhere, such as [`invariant!()`].
#[doc(alias = "optionally_unsafe")]
macro_rules! optionally_unsafe_impl {
    {$($tokens: tt)*} => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "unsafe")] {
                unsafe { $($tokens)* }
            } else {
                { $($tokens)* }
            }
        }
    };
}

/// Declare an invariant for optimization.
///
/// With the `unsafe` feature disabled (the default), this only places a
/// [`debug_assert!()`]. With `unsafe` enabled, a violated invariant is
/// undefined behavior via [`core::hint::unreachable_unchecked()`] outside
/// of tests; tests always keep the checked [`debug_assert!()`] form.
///
/// Use together with [`optionally_unsafe!{}`].
#[doc(alias = "invariant")]
macro_rules! invariant_impl {
    ($expr: expr) => {
        cfg_if::cfg_if! {
            if #[cfg(all(feature = "unsafe", not(test)))] {
                if !($expr) {
                    core::hint::unreachable_unchecked();
                }
            } else {
                debug_assert!($expr);
            }
        }
    };
}

pub(crate) use invariant_impl as invariant;
pub(crate) use optionally_unsafe_impl as optionally_unsafe;

mod tests;
