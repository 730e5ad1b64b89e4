//! Authorization URL builder.

use smartcar_domain::{
    ApprovalPrompt, AuthorizationParams, AuthorizationRequestOptions, Mode, OAuthResult,
};

use super::OAuthClient;

/// Assembles authorization parameters from caller options.
///
/// Scopes keep their order and duplicates; an empty list adds no `scope`.
/// `state` and `make` are copied verbatim under their own names when present.
#[must_use]
pub fn assemble_params(
    options: &AuthorizationRequestOptions,
    callback_url: &str,
) -> AuthorizationParams {
    let approval_prompt = if options.force_prompt.unwrap_or(false) {
        ApprovalPrompt::Force
    } else {
        ApprovalPrompt::Auto
    };
    let mode = if options.test_mode.unwrap_or(false) {
        Mode::Test
    } else {
        Mode::Live
    };
    let scope = options
        .scope
        .as_ref()
        .filter(|scopes| !scopes.is_empty())
        .map(|scopes| scopes.join(" "));

    AuthorizationParams {
        redirect_uri: callback_url.to_string(),
        approval_prompt,
        mode,
        scope,
        state: options.state.clone(),
        make: options.make.clone(),
    }
}

impl OAuthClient {
    /// Builds the URL the user visits to authorize the application.
    ///
    /// Performs no network I/O. Identical options and configuration always
    /// produce the same URL.
    ///
    /// # Errors
    /// Returns `OAuthError::Configuration` if the client identity cannot be resolved.
    pub fn build_authorization_url(
        &self,
        options: &AuthorizationRequestOptions,
    ) -> OAuthResult<String> {
        let identity = self.identity()?;
        let params = assemble_params(options, identity.callback_url());
        Ok(self.endpoint().authorize_url(identity.client_id(), &params))
    }
}
