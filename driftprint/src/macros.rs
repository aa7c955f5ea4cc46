// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2026 The driftprint developers

//! Internal macros.

/// Implements [`Error`](std::error::Error) trait either in `std` or `core`.
///
/// With `std`, the trait from `std` is used.  Without it, the `core` trait
/// is implemented only if the compiler is new enough to provide it
/// (detected by `build.rs`).
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "std")] {
                impl std::error::Error for $type {
                    $($tokens)*
                }
            }
            else if #[cfg(driftprint_error_in_core = "stable")] {
                impl core::error::Error for $type {
                    $($tokens)*
                }
            }
        }
    };
}
pub(crate) use impl_error_impl as impl_error;
