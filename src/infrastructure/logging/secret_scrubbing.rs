use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SHARED: LazyLock<SecretScrubber> = LazyLock::new(SecretScrubber::new);

/// Redacts OAuth secrets from free-form text before it reaches a log line
#[derive(Clone)]
pub struct SecretScrubber {
    oauth_value_pattern: Regex,
    json_secret_pattern: Regex,
}

impl SecretScrubber {
    /// Create a new secret scrubber
    pub fn new() -> Self {
        Self {
            // Form bodies (oauth_token=abc&...) and header pairs (oauth_token="abc")
            oauth_value_pattern: Regex::new(
                r#"(oauth_(?:token_secret|token|signature|verifier))(="?)([^&",\s]+)"#,
            )
            .expect("oauth scrub pattern is valid"),
            // JSON fields carrying token material
            json_secret_pattern: Regex::new(
                r#"("(?:oauth_token_secret|oauth_token|token_secret|consumer_secret)"\s*:\s*")([^"]*)(")"#,
            )
            .expect("json scrub pattern is valid"),
        }
    }

    /// Process-wide instance
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = self
            .oauth_value_pattern
            .replace_all(message, "${1}${2}[REDACTED]");
        self.json_secret_pattern
            .replace_all(&scrubbed, "${1}[REDACTED]${3}")
            .into_owned()
    }
}

impl Default for SecretScrubber {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber").finish()
    }
}
