/// Host settings that cap the number of request parameters; the lowest wins.
/// Names mirror the PHP ini settings an admin panel typically runs under.
pub const LIMIT_ENV_VARS: [&str; 3] = [
    "MAX_INPUT_VARS",
    "SUHOSIN_POST_MAX_VARS",
    "SUHOSIN_REQUEST_MAX_VARS",
];

/// Lowest numeric candidate, or `default` when none parses.
///
/// Candidates come from the host environment, so absent and non-numeric
/// entries are expected and silently discarded. An empty set short-circuits
/// to the default rather than taking a minimum over nothing.
pub fn resolve_limit<I, S>(candidates: I, default: Option<u64>) -> Option<u64>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    candidates
        .into_iter()
        .flatten()
        .filter_map(|s| s.as_ref().trim().parse::<u64>().ok())
        .min()
        .or(default)
}

/// Resolve the limit from the process environment plus any extra candidates
/// supplied on the command line.
pub fn limit_from_env(extra: &[String], default: Option<u64>) -> Option<u64> {
    let env = LIMIT_ENV_VARS.iter().map(|key| std::env::var(key).ok());
    let extra = extra.iter().map(|s| Some(s.clone()));
    resolve_limit(env.chain(extra), default)
}

/// The limit the host is running with: an explicit override wins, then the
/// lowest environment candidate, then the fallback (0 disables the fallback,
/// leaving the limit unknown).
pub fn host_limit(force: Option<u64>, extra: &[String], default_limit: u64) -> Option<u64> {
    if force.is_some() {
        return force;
    }
    let default = (default_limit > 0).then_some(default_limit);
    limit_from_env(extra, default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[Option<&str>]) -> Vec<Option<String>> {
        items
            .iter()
            .map(|o| o.map(|s| s.to_string()))
            .collect()
    }

    #[test]
    fn picks_the_minimum_numeric_candidate() {
        let c = candidates(&[Some("1000"), Some("500"), Some("2000")]);
        assert_eq!(resolve_limit(c, Some(9999)), Some(500));
    }

    #[test]
    fn ignores_absent_and_non_numeric_entries() {
        let c = candidates(&[None, Some(""), Some("off"), Some(" 750 "), Some("1000")]);
        assert_eq!(resolve_limit(c, None), Some(750));
    }

    #[test]
    fn entirely_empty_set_returns_the_default() {
        assert_eq!(resolve_limit(Vec::<Option<String>>::new(), Some(1000)), Some(1000));
    }

    #[test]
    fn entirely_non_numeric_set_returns_the_default() {
        let c = candidates(&[None, Some("unlimited"), Some("")]);
        assert_eq!(resolve_limit(c, Some(1000)), Some(1000));
    }

    #[test]
    fn no_candidates_and_no_default_is_unknown() {
        assert_eq!(resolve_limit(Vec::<Option<String>>::new(), None), None);
    }

    #[test]
    fn forced_limit_wins() {
        assert_eq!(host_limit(Some(42), &["10".to_string()], 1000), Some(42));
    }

    #[test]
    fn extra_candidates_beat_the_fallback() {
        assert_eq!(host_limit(None, &["250".to_string()], 1000), Some(250));
    }

    #[test]
    fn fallback_applies_when_nothing_is_set() {
        assert_eq!(host_limit(None, &[], 1000), Some(1000));
    }

    #[test]
    fn zero_fallback_leaves_the_limit_unknown() {
        assert_eq!(host_limit(None, &[], 0), None);
    }
}
