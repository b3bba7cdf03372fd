use env_logger::Env;
use log::LevelFilter;

/// Log level implied by the verbosity flags.
#[must_use]
pub const fn level(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the flag-derived level.
pub fn init(verbose: bool, quiet: bool) {
    let default = level(verbose, quiet).as_str().to_ascii_lowercase();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_select_level() {
        assert_eq!(level(false, false), LevelFilter::Info);
        assert_eq!(level(true, false), LevelFilter::Debug);
        assert_eq!(level(false, true), LevelFilter::Warn);
    }
}
