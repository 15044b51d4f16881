// SPDX-License-Identifier: MPL-2.0
use iced_ui_kit::app::{self, Flags};
use iced_ui_kit::ui::theming::ThemeMode;
use std::path::PathBuf;

fn parse_theme(raw: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(raw).ok_or_else(|| format!("unknown theme '{raw}' (light, dark, system)"))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let theme_mode = args
        .opt_value_from_fn("--theme", parse_theme)
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --theme");
            None
        });
    let config_path = args
        .opt_value_from_os_str("--config", |raw| Ok::<_, String>(PathBuf::from(raw)))
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config");
            None
        });

    for extra in args.finish() {
        tracing::warn!(argument = ?extra, "unexpected argument");
    }

    app::run(Flags {
        theme_mode,
        config_path,
    })
}
