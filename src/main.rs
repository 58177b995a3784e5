// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use std::process::ExitCode;
use tracing::info;

use metaserv_teardown::config::Config;
use metaserv_teardown::kubernetes::create_client;
use metaserv_teardown::logging;
use metaserv_teardown::teardown::TeardownInvoker;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    logging::init();

    let config = Config::from_env()?;
    info!("Tearing down metadata service in namespace {}", config.namespace);

    let client = create_client().await?;

    let report = TeardownInvoker::new(client, &config).run().await;

    // Exit status is that of the last delete, not an aggregate
    Ok(report.exit_code())
}
