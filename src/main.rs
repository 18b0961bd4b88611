// SPDX-License-Identifier: MPL-2.0
use iced_split::app::{self, Flags};
use iced_split::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const HELP: &str = "\
IcedSplit - split bills with friends

USAGE:
  iced_split [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <LOCALE>         Override the UI language (e.g. en-US)
  --i18n-dir <DIR>        Load Fluent .ftl files from DIR
  --config-dir <DIR>      Read and write settings.toml in DIR
  --no-avatars            Do not download friend avatars

ENVIRONMENT:
  ICED_SPLIT_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                Log filter (default: info)
";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(error) => {
            tracing::error!(%error, "invalid arguments");
            eprintln!("{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        no_avatars: args.contains("--no-avatars"),
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
