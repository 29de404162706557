use crate::{
    management::ArtistCache,
    remote::{RemoteError, RemoteInvoker, calls},
    types::Token,
};

/// State that lives for one interactive session: the watch-list mirror and
/// the access token. Both are discarded on exit.
#[derive(Debug, Default)]
pub struct Session {
    cache: ArtistCache,
    token: Option<Token>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that already holds a token, so no issue-token call is made.
    pub fn with_token(token: Token) -> Self {
        Self {
            cache: ArtistCache::new(),
            token: Some(token),
        }
    }

    /// Returns the session token, asking the backend for one on first use.
    ///
    /// The token is never refreshed; a failed request leaves the session
    /// without a token so the next call tries again.
    pub async fn token<I>(&mut self, invoker: &I) -> Result<Token, RemoteError>
    where
        I: RemoteInvoker + ?Sized,
    {
        if let Some(token) = &self.token {
            return Ok(token.clone());
        }

        let token = calls::issue_token(invoker).await?;
        log::debug!("Access token obtained at {}", token.obtained_at);
        self.token = Some(token.clone());
        Ok(token)
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    pub fn cache(&self) -> &ArtistCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ArtistCache {
        &mut self.cache
    }
}
