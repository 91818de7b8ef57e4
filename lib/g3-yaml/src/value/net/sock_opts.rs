/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::Yaml;

use g3_types::net::{SocketOptions, SocketOptionsKind, TypeOfService};

pub fn as_type_of_service(v: &Yaml) -> anyhow::Result<TypeOfService> {
    match v {
        Yaml::String(s) => TypeOfService::from_str(s).map_err(|e| anyhow!("{e}: {s}")),
        Yaml::Integer(_) => {
            let value = crate::value::as_u8(v)?;
            Ok(TypeOfService::new(value))
        }
        _ => Err(anyhow!(
            "yaml value type for 'type of service' should be 'string' or 'integer'"
        )),
    }
}

fn as_buffer_size(v: &Yaml) -> anyhow::Result<i32> {
    let size = crate::humanize::as_usize(v)?;
    i32::try_from(size).map_err(|_| anyhow!("buffer size {size} is too large"))
}

fn as_linger_seconds(v: &Yaml) -> anyhow::Result<i32> {
    let linger = crate::humanize::as_duration(v)?;
    i32::try_from(linger.as_secs()).map_err(|_| anyhow!("linger time {linger:?} is too large"))
}

/// Parse a map of socket options into a new option set of `kind`.
///
/// Keys that have no field in `kind` are rejected.
pub fn as_socket_options(v: &Yaml, kind: SocketOptionsKind) -> anyhow::Result<SocketOptions> {
    let Yaml::Hash(map) = v else {
        return Err(anyhow!(
            "yaml value type for '{kind} socket options' should be 'map'"
        ));
    };

    let mut options = SocketOptions::new(kind);
    crate::foreach_kv(map, |k, v| {
        let key = crate::key::normalize(k);
        match key.as_str() {
            "type_of_service" | "tos" => {
                options.general_mut().type_of_service =
                    as_type_of_service(v).context(format!("invalid tos value for key {k}"))?;
                return Ok(());
            }
            "reuse_address" | "reuse_addr" => {
                options.general_mut().reuse_address =
                    crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
                return Ok(());
            }
            "reuse_port" => {
                options.general_mut().reuse_port =
                    crate::value::as_bool(v).context(format!("invalid bool value for key {k}"))?;
                return Ok(());
            }
            _ => {}
        }

        if let Some(client) = options.client_mut() {
            match key.as_str() {
                "send_buffer_size" | "send_buffer" => {
                    client.send_buffer_size =
                        as_buffer_size(v).context(format!("invalid buffer size for key {k}"))?;
                    return Ok(());
                }
                "receive_buffer_size" | "recv_buffer_size" | "recv_buffer" => {
                    client.receive_buffer_size =
                        as_buffer_size(v).context(format!("invalid buffer size for key {k}"))?;
                    return Ok(());
                }
                _ => {}
            }
        }

        if let Some(tcp) = options.tcp_client_mut() {
            match key.as_str() {
                "no_delay" => {
                    tcp.no_delay = crate::value::as_bool(v)
                        .context(format!("invalid bool value for key {k}"))?;
                    return Ok(());
                }
                "linger" => {
                    tcp.linger_seconds = as_linger_seconds(v)
                        .context(format!("invalid duration value for key {k}"))?;
                    return Ok(());
                }
                "linger_seconds" => {
                    tcp.linger_seconds = crate::value::as_i32(v)
                        .context(format!("invalid i32 value for key {k}"))?;
                    return Ok(());
                }
                "keep_alive" | "keepalive" => {
                    let enable = crate::value::as_bool(v)
                        .context(format!("invalid bool value for key {k}"))?;
                    tcp.keep_alive = Some(enable);
                    return Ok(());
                }
                _ => {}
            }
        }

        Err(anyhow!("invalid key {k} for {kind} socket options"))
    })?;

    Ok(options)
}
