// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standalone relay binary for the dashboard.

use std::net::SocketAddr;

use clap::Parser;

use hausboard::relay::{RelayState, router};

#[derive(Parser)]
#[command(name = "hausboard-relay")]
#[command(about = "Authenticated relay between the dashboard and the automation API")]
struct Cli {
    /// Upstream automation API base URL
    #[arg(long, env = "HA_BASE")]
    ha_base: String,

    /// Long-lived access token injected into forwarded requests
    #[arg(long, env = "HA_TOKEN", hide_env_values = true)]
    ha_token: String,

    /// Listen port
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
                format!("{app_name}=info").into()
            }),
        )
        .init();

    let state = RelayState::new(&cli.ha_base, &cli.ha_token).expect("Failed to build relay state.");
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen port.");
    tracing::info!(port = cli.port, upstream = %cli.ha_base, "relay listening");

    axum::serve(listener, app)
        .await
        .expect("Relay server failed.");
}
