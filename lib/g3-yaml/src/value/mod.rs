/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod net;
mod primary;

pub use net::*;
pub use primary::{as_bool, as_i32, as_u8};
