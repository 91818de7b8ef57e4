/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod sock_opts;

pub use sock_opts::{as_socket_options, as_type_of_service};
