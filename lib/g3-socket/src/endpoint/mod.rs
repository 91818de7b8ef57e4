/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! Endpoints returned by the builders.
//!
//! Each endpoint owns exactly one channel, which is already non-blocking and
//! configured. The caller is responsible for closing it by dropping.

mod tcp;
pub use tcp::{ServerSocket, Socket};

mod udp;
pub use udp::{BoundDatagramSocket, ConnectedDatagramSocket};
