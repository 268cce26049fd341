use crate::env_file::Secrets;
use crate::error::{Error, Result};

pub const SSID_KEY: &str = "WIFI_SSID";
pub const PASSWORD_KEY: &str = "WIFI_PASSWORD";

/// Network name and passphrase, both guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

impl WifiCredentials {
    /// Values are trimmed again here since [`Secrets::insert`] stores them as given.
    pub fn from_secrets(secrets: &Secrets) -> Result<Self> {
        let ssid = required(secrets, SSID_KEY)?;
        let password = required(secrets, PASSWORD_KEY)?;

        Ok(WifiCredentials {
            ssid: ssid.to_string(),
            password: password.to_string(),
        })
    }
}

// Keep the passphrase out of logs and panic messages.
impl std::fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn required<'a>(secrets: &'a Secrets, key: &'static str) -> Result<&'a str> {
    match secrets.get(key).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingCredential { key }),
    }
}
