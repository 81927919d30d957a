//! Configuration for the GitHub-backed source.

use octocrab::Octocrab;

use super::source::GithubSource;

/// Configuration for building a [`GithubSource`].
#[derive(Clone, Default)]
pub struct GithubConfig {
    /// Personal access token or installation token. Anonymous access works
    /// for public repositories but is heavily rate limited.
    pub token: Option<String>,

    /// Base URI of the GitHub API, for GitHub Enterprise installations.
    pub base_uri: Option<String>,
}

impl GithubConfig {
    /// Creates a config from environment variables.
    ///
    /// Reads `MERGE_GATE_GITHUB_TOKEN` (falling back to `GITHUB_TOKEN`) for
    /// the token and `MERGE_GATE_GITHUB_API_URL` for the base URI.
    pub fn from_env() -> Self {
        let token = std::env::var("MERGE_GATE_GITHUB_TOKEN")
            .or_else(|_| std::env::var("GITHUB_TOKEN"))
            .ok();
        let base_uri = std::env::var("MERGE_GATE_GITHUB_API_URL").ok();

        GithubConfig { token, base_uri }
    }

    /// Builds a source backed by a client configured from this config.
    pub fn build(self) -> Result<GithubSource, octocrab::Error> {
        let mut builder = Octocrab::builder();
        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }
        if let Some(base_uri) = self.base_uri {
            builder = builder.base_uri(base_uri)?;
        }
        Ok(GithubSource::new(builder.build()?))
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_uri", &self.base_uri)
            .finish()
    }
}
