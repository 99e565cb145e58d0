// SPDX-License-Identifier: MPL-2.0
use iced_photo_search::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedPhotoSearch - search and browse photos

USAGE:
  iced_photo_search [OPTIONS] [QUERY]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  PHOTO_SEARCH_ACCESS_KEY   API access key
  PHOTO_SEARCH_CONFIG_DIR   Config directory
  RUST_LOG                  Log filter
";

const DEFAULT_LOG_FILTER: &str = "iced_photo_search=info,wgpu=warn,iced=warn";

/// `RUST_LOG` wins as a whole; the defaults apply only when it is unset or invalid.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_tracing() {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Parses command-line arguments. `Ok(None)` means help was printed.
fn parse_flags(mut args: pico_args::Arguments) -> Result<Option<Flags>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let mut words = Vec::new();
    let mut unknown = Vec::new();
    for arg in args.finish() {
        let arg = arg.to_string_lossy().into_owned();
        if arg.starts_with('-') {
            unknown.push(arg);
        } else {
            words.push(arg);
        }
    }
    if !unknown.is_empty() {
        return Err(pico_args::Error::UnusedArgsLeft(unknown));
    }
    let query = (!words.is_empty()).then(|| words.join(" "));

    Ok(Some(Flags {
        lang,
        config_dir,
        query,
    }))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");
    app::run(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Option<Flags>, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn positional_words_form_the_query() {
        let flags = parse(&["--lang", "fr", "red", "cats"])
            .expect("valid arguments")
            .expect("flags");
        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.query.as_deref(), Some("red cats"));
        assert!(flags.config_dir.is_none());
    }

    #[test]
    fn no_arguments_means_no_query() {
        let flags = parse(&[]).expect("valid arguments").expect("flags");
        assert!(flags.query.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        match parse(&["--bogus", "cats"]) {
            Err(pico_args::Error::UnusedArgsLeft(left)) => assert_eq!(left, vec!["--bogus"]),
            other => panic!("expected unknown flag error, got {other:?}"),
        }
    }

    #[test]
    fn missing_option_value_is_an_error() {
        assert!(parse(&["--config-dir"]).is_err());
    }

    #[test]
    fn rust_log_replaces_default_directives() {
        let filter = log_filter(Some("iced_photo_search=debug".to_string())).to_string();
        assert!(filter.contains("iced_photo_search=debug"));
        assert!(!filter.contains("iced_photo_search=info"));
    }

    #[test]
    fn defaults_apply_without_rust_log() {
        let filter = log_filter(None).to_string();
        assert!(filter.contains("iced_photo_search=info"));
        assert!(filter.contains("wgpu=warn"));
    }

    #[test]
    fn help_returns_no_flags() {
        assert!(matches!(parse(&["--help"]), Ok(None)));
    }
}
