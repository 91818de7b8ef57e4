/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::time::Duration;

use log::trace;

use g3_types::net::SocketOptions;

use crate::util::AddressFamily;
use crate::{Channel, SocketBuildError};

fn set_option(option: &'static str, r: io::Result<()>) -> Result<(), SocketBuildError> {
    r.map_err(|source| SocketBuildError::Configure { option, source })?;
    trace!("socket option {option} set");
    Ok(())
}

/// Apply `options` to the channel.
///
/// Fields left at their default value are skipped, so the system default
/// stays in force for them.
pub(crate) fn assign_options<C: Channel>(
    channel: &C,
    options: &SocketOptions,
) -> Result<(), SocketBuildError> {
    let general = options.general();
    if !general.type_of_service.is_undefined() {
        let option = match channel.family() {
            AddressFamily::Ipv4 => "IP_TOS",
            AddressFamily::Ipv6 => "IPV6_TCLASS",
        };
        set_option(
            option,
            channel.set_type_of_service(general.type_of_service),
        )?;
    }
    if general.reuse_address {
        set_option("SO_REUSEADDR", channel.set_reuse_address(true))?;
    }
    if general.reuse_port {
        set_option("SO_REUSEPORT", channel.set_reuse_port(true))?;
    }

    if let Some(client) = options.client() {
        if let Some(size) = client.send_buffer_size() {
            set_option("SO_SNDBUF", channel.set_send_buffer_size(size))?;
        }
        if let Some(size) = client.receive_buffer_size() {
            set_option("SO_RCVBUF", channel.set_recv_buffer_size(size))?;
        }
    }

    if let Some(tcp) = options.tcp_client() {
        if let Some(secs) = tcp.linger_seconds() {
            set_option(
                "SO_LINGER",
                channel.set_linger(Duration::from_secs(secs)),
            )?;
        }
        if let Some(enable) = tcp.keep_alive {
            set_option("SO_KEEPALIVE", channel.set_keepalive(enable))?;
        }
        if tcp.no_delay {
            set_option("TCP_NODELAY", channel.set_nodelay(true))?;
        }
    }

    Ok(())
}

pub(crate) fn set_nonblocking<C: Channel>(channel: &C) -> Result<(), SocketBuildError> {
    channel
        .set_nonblocking(true)
        .map_err(SocketBuildError::NonBlocking)
}
