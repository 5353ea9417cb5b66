pub mod args;

use args::Args;

/// Install the stderr logger. `RUST_LOG` takes precedence over `-v` flags.
pub fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
