// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests: [`crate::macros`].

#![cfg(test)]

use crate::macros::{invariant, optionally_unsafe};

#[test]
fn invariant_holds() {
    optionally_unsafe! {
        invariant!(1 + 1 == 2);
    }
}
