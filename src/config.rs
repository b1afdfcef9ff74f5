//! Configuration for the external services the blog depends on, loaded from
//! environment variables at startup so a misconfigured deployment fails
//! before it accepts traffic.

use std::env;

use crate::Error;

/// Settings for the Cloudinary account that hosts post images.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaConfig {
    /// The Cloudinary cloud name, e.g. "my-blog".
    pub app_name: String,
    /// The public half of the Cloudinary API credentials.
    pub api_key: String,
    /// The secret half of the Cloudinary API credentials. Never log this.
    pub api_secret: String,
}

impl MediaConfig {
    /// Load the Cloudinary settings from the `CLOUDINARY_APP_NAME`,
    /// `CLOUDINARY_API_KEY` and `CLOUDINARY_API_SECRET` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingEnvVar] if any of the variables is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            app_name: require_env("CLOUDINARY_APP_NAME")?,
            api_key: require_env("CLOUDINARY_API_KEY")?,
            api_secret: require_env("CLOUDINARY_API_SECRET")?,
        })
    }

    /// The endpoint image uploads are POSTed to.
    pub fn upload_url(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.app_name
        )
    }

    /// The base URL uploaded images are served from.
    pub fn delivery_url(&self) -> String {
        format!("https://res.cloudinary.com/{}/image/upload", self.app_name)
    }
}

/// Settings for the Firebase project backing the blog frontend's hosted
/// login widget. The key is handed to the frontend as-is, its internals are
/// Firebase's business.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityConfig {
    /// The Firebase web API key for the blog's project.
    pub api_key: String,
}

impl IdentityConfig {
    /// Load the Firebase settings from the `FIREBASE_API_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingEnvVar] if the variable is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            api_key: require_env("FIREBASE_API_KEY")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, Error> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::MissingEnvVar(name.to_string())),
    }
}


#[cfg(test)]
mod identity_config_tests {
    use std::env;

    use crate::Error;

    use super::IdentityConfig;

    // This test owns the FIREBASE_API_KEY variable, see media_config_tests.
    #[test]
    fn from_env_reads_and_validates_variable() {
        unsafe {
            env::set_var("FIREBASE_API_KEY", "AIzaFakeKey");
        }

        let config = IdentityConfig::from_env().expect("expected config to load");
        assert_eq!(config.api_key, "AIzaFakeKey");

        unsafe {
            env::remove_var("FIREBASE_API_KEY");
        }
        assert!(matches!(
            IdentityConfig::from_env(),
            Err(Error::MissingEnvVar(name)) if name == "FIREBASE_API_KEY"
        ));
    }
}
