/// Environment variable holding the prediction-service API key
pub const DEFAULT_API_KEY_VAR: &str = "ALPHAGENOME_API_KEY";

/// Process-wide settings the request handler reads.
///
/// Built once at startup and handed to every invocation, so tests can
/// inject it instead of mutating the process environment. Only the
/// presence of the key is kept; its value never reaches a response or a log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisEnv {
    api_key_configured: bool,
}

impl AnalysisEnv {
    pub fn new(api_key_configured: bool) -> Self {
        Self { api_key_configured }
    }

    /// Read the API key presence from the named environment variable.
    pub fn from_env(var: &str) -> Self {
        Self::new(get_api_key_from_env(var).is_some())
    }

    pub fn api_key_configured(&self) -> bool {
        self.api_key_configured
    }
}

/// Returns Some(key) if the env var is set and non-empty. The value is not
/// trimmed or otherwise checked.
fn get_api_key_from_env(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_from_env_present() {
        let var = "SNP_LENS_TEST_KEY_PRESENT";
        std::env::set_var(var, "secret-value");
        assert!(AnalysisEnv::from_env(var).api_key_configured());
        std::env::remove_var(var);
    }

    #[test]
    fn test_from_env_missing() {
        let var = "SNP_LENS_TEST_KEY_MISSING";
        std::env::remove_var(var);
        assert!(!AnalysisEnv::from_env(var).api_key_configured());
    }

    #[test]
    fn test_from_env_whitespace_counts_as_present() {
        let var = "SNP_LENS_TEST_KEY_BLANK";
        std::env::set_var(var, "   ");
        assert!(AnalysisEnv::from_env(var).api_key_configured());
        std::env::remove_var(var);
    }

    #[test]
    fn test_from_env_empty_counts_as_missing() {
        let var = "SNP_LENS_TEST_KEY_EMPTY";
        std::env::set_var(var, "");
        assert!(!AnalysisEnv::from_env(var).api_key_configured());
        std::env::remove_var(var);
    }

    #[test]
    fn test_default_is_unconfigured() {
        assert!(!AnalysisEnv::default().api_key_configured());
    }
}
