// SPDX-License-Identifier: MPL-2.0
use keepsake::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `keepsake=debug`).
const LOG_ENV: &str = "KEEPSAKE_LOG";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!("ignoring --config-dir: {err}");
        None
    });
    let card_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, card_path })
}
