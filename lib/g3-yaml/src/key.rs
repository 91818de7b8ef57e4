/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_keys() {
        assert_eq!(normalize("TOS"), "tos");
        assert_eq!(normalize("Reuse-Port"), "reuse_port");
        assert_eq!(normalize("send-buffer_size"), "send_buffer_size");
        assert_eq!(normalize("no_delay"), "no_delay");
    }
}
