use env_logger::Env;
use log::LevelFilter;

/// Crates whose log output `--verbose` turns up
const OWN_TARGETS: [&str; 3] = ["echochat", "echochat_chat", "echochat_types"];

/// Install the process-wide logger.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, plus debug
/// output from echochat itself in verbose mode. Logs go to stderr so they
/// never interleave with rendered entries on stdout.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if verbose && std::env::var_os("RUST_LOG").is_none() {
        for target in OWN_TARGETS {
            builder.filter_module(target, LevelFilter::Debug);
        }
    }

    builder.format_timestamp(None).format_target(true);

    // A second init (tests, embedding) keeps the first logger
    if builder.try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
