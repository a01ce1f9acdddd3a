//! Console logging for the `surtr-lex` binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

/// Map a `-v` count to a filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Fails if one is already set.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::new(level_for(verbosity));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, "warn")]
    #[case(1, "info")]
    #[case(2, "debug")]
    #[case(3, "trace")]
    #[case(200, "trace")]
    fn verbosity_levels(#[case] verbosity: u8, #[case] expected: &str) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[test]
    fn second_init_fails() {
        // Either this call or an earlier one in the same process installed
        // the global subscriber, so the next call must be rejected.
        let _ = init(0);
        assert!(init(1).is_err());
    }
}
