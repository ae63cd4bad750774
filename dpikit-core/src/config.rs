//! Connection parameters handed to the native session layer.

use secrecy::SecretString;
use serde::Deserialize;

use crate::code::ErrorCode;
use crate::error::{DriverError, DriverResult};

/// Parameters for establishing a database session.
///
/// Deserializes from the camelCase shape used by driver configuration files
/// (`connectString`, `externalAuth`). The password is held as a
/// [`SecretString`] so it never appears in `Debug` output or log events.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectParams {
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    password: Option<SecretString>,
    connect_string: String,
    #[serde(default)]
    external_auth: bool,
}

impl ConnectParams {
    /// Creates parameters for `connect_string` with no credentials set.
    #[must_use]
    pub fn new(connect_string: impl Into<String>) -> Self {
        Self {
            user: None,
            password: None,
            connect_string: connect_string.into(),
            external_auth: false,
        }
    }

    /// Sets the database user name.
    #[must_use]
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the database password.
    #[must_use]
    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    /// Enables or disables external (wallet/OS based) authentication.
    #[must_use]
    pub const fn with_external_auth(mut self, external_auth: bool) -> Self {
        self.external_auth = external_auth;
        self
    }

    /// The database user name, if set.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// The database password, if set.
    #[must_use]
    pub const fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    /// The connect string identifying the database service.
    #[must_use]
    pub fn connect_string(&self) -> &str {
        &self.connect_string
    }

    /// Whether external authentication is enabled.
    #[must_use]
    pub const fn external_auth(&self) -> bool {
        self.external_auth
    }

    /// Checks the parameter combination before it is handed to the native
    /// layer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::ExternalAuthConflict`] (DPI-006) when external
    /// authentication is enabled while a user or password is also set.
    pub fn validate(&self) -> DriverResult<()> {
        if self.external_auth && (self.user.is_some() || self.password.is_some()) {
            let err = DriverError::Internal(ErrorCode::ExternalAuthConflict);
            tracing::warn!(
                connect_string = %self.connect_string,
                "rejecting connection parameters: {err}"
            );
            return Err(err);
        }
        tracing::debug!(
            connect_string = %self.connect_string,
            external_auth = self.external_auth,
            "connection parameters validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_deserializes_camel_case_config() {
        let params: ConnectParams = serde_json::from_str(
            r#"{
                "user": "hr",
                "password": "welcome1",
                "connectString": "localhost/XEPDB1"
            }"#,
        )
        .unwrap();
        assert_eq!(params.user(), Some("hr"));
        assert_eq!(
            params.password().map(ExposeSecret::expose_secret),
            Some("welcome1")
        );
        assert_eq!(params.connect_string(), "localhost/XEPDB1");
        assert!(!params.external_auth());
        params.validate().expect("credential login is valid");
    }

    #[test]
    fn test_debug_redacts_password() {
        let params = ConnectParams::new("localhost/XEPDB1")
            .with_password(SecretString::from("welcome1".to_owned()));
        let rendered = format!("{params:?}");
        assert!(!rendered.contains("welcome1"), "password leaked: {rendered}");
    }

    #[test]
    fn test_external_auth_with_credentials_is_rejected() {
        let params = ConnectParams::new("localhost/XEPDB1")
            .with_user("hr")
            .with_external_auth(true);
        let err = params.validate().expect_err("conflict must be rejected");
        assert_eq!(err.code(), ErrorCode::ExternalAuthConflict.number());
        assert_eq!(
            err.message(),
            "DPI-006: user and password should not be set when using external authentication"
        );
    }

    #[test]
    fn test_external_auth_without_credentials_is_accepted() {
        let params =
            ConnectParams::new("localhost/XEPDB1").with_external_auth(true);
        params.validate().expect("external auth alone is valid");
    }
}
