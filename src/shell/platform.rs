//! Execution-environment checks.

/// Environment variables whose presence marks a CI run.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Check if running in a CI environment.
///
/// Used by `main()` to pick the plain UI (no spinners, no colors) when
/// output is going to a CI log.
pub fn is_ci() -> bool {
    is_ci_with_env(|key| std::env::var(key))
}

/// Check for CI with a custom env var lookup (for testing).
pub fn is_ci_with_env<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_VARS.iter().any(|var| env_fn(var).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn detects_github_actions() {
        let found = is_ci_with_env(|key| {
            if key == "GITHUB_ACTIONS" {
                Ok("true".to_string())
            } else {
                Err(VarError::NotPresent)
            }
        });
        assert!(found);
    }

    #[test]
    fn no_ci_vars_is_not_ci() {
        assert!(!is_ci_with_env(|_| Err(VarError::NotPresent)));
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
