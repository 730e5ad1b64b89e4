//! Provider constants shared by every layer.

/// Default site hosting the provider's OAuth endpoints.
pub const OAUTH_SITE: &str = "https://auth.smartcar.com";

/// Path of the browser-facing authorization endpoint.
pub const AUTHORIZE_PATH: &str = "/oauth/authorize";

/// Path of the server-to-server token endpoint.
pub const TOKEN_PATH: &str = "/oauth/token";

/// Environment variable holding the registered client id.
pub const CLIENT_ID_ENV: &str = "SMARTCAR_CLIENT_ID";

/// Environment variable holding the registered client secret.
pub const CLIENT_SECRET_ENV: &str = "SMARTCAR_SECRET";

/// Environment variable holding the registered redirect URI.
pub const CALLBACK_URL_ENV: &str = "SMARTCAR_CALLBACK_URL";

/// `response_type` value for the authorization-code grant.
pub const RESPONSE_TYPE_CODE: &str = "code";

/// `approval_prompt` value that always shows the consent screen.
pub const APPROVAL_FORCE: &str = "force";

/// `approval_prompt` value that skips consent for already approved scopes.
pub const APPROVAL_AUTO: &str = "auto";

/// `mode` value for simulated vehicles.
pub const MODE_TEST: &str = "test";

/// `mode` value for real vehicles.
pub const MODE_LIVE: &str = "live";

/// `grant_type` for exchanging an authorization code.
pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";

/// `grant_type` for exchanging a refresh token.
pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";
