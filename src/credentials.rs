use secrecy::SecretString;

use crate::error::Error;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Source of the transcription API credential.
///
/// Resolved once at startup, before any chunking begins; tests inject a fake.
pub trait CredentialProvider {
    fn api_key(&self) -> Result<SecretString, Error>;
}

/// Reads the API key from the `OPENAI_API_KEY` environment variable.
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Result<SecretString, Error> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
            _ => Err(Error::CredentialMissing),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    struct FakeCredentials(&'static str);

    impl CredentialProvider for FakeCredentials {
        fn api_key(&self) -> Result<SecretString, Error> {
            Ok(SecretString::from(self.0.to_string()))
        }
    }

    #[test]
    fn fake_provider_substitutes_for_environment() {
        let key = FakeCredentials("sk-test").api_key().unwrap();
        assert_eq!(key.expose_secret(), "sk-test");
    }

    #[test]
    fn env_provider_round_trip() {
        // Set and unset in a single test to avoid racing parallel tests on
        // the same process environment.
        std::env::set_var(API_KEY_VAR, "sk-from-env");
        let key = EnvCredentials.api_key().unwrap();
        assert_eq!(key.expose_secret(), "sk-from-env");

        std::env::remove_var(API_KEY_VAR);
        assert!(matches!(
            EnvCredentials.api_key(),
            Err(Error::CredentialMissing)
        ));
    }
}
