//! Log filter construction.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Filter read from the env var `var`, falling back to `default` when the
/// variable is unset or holds no valid directives.
pub fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    filter_from(std::env::var(var).ok(), default)
}

fn filter_from(directives: Option<String>, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_uses_default() {
        let filter = filter_from(None, LevelFilter::WARN);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_env_can_raise_verbosity() {
        let filter = filter_from(Some("info".to_string()), LevelFilter::WARN);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = filter_from(Some("trace".to_string()), LevelFilter::DEBUG);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_env_can_lower_verbosity() {
        let filter = filter_from(Some("error".to_string()), LevelFilter::DEBUG);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_empty_value_uses_default() {
        let filter = filter_from(Some("".to_string()), LevelFilter::WARN);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
