// SPDX-License-Identifier: MPL-2.0
use scrub_chrome::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "scrub_chrome=info";

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang");
        None
    });
    let config_path = args
        .opt_value_from_str::<_, PathBuf>("--config")
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --config");
            None
        });

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "unexpected arguments");
    }

    app::run(Flags { lang, config_path })
}
