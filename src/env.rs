//! Environment variable access.
//!
//! Every component in this crate reads and writes configuration through the
//! [`EnvSource`] trait instead of touching `std::env` directly, so tests can
//! run against an isolated in-memory source.

use std::collections::HashMap;

/// A mutable key/value source of configuration variables.
pub trait EnvSource {
    /// Returns the raw value, or `None` when the variable is absent.
    ///
    /// An empty string counts as present here. Callers that treat empty as
    /// unset (defaults, token checks) do so explicitly.
    fn get(&self, name: &str) -> Option<String>;

    /// Sets a variable. Visible to every subsequent [`get`](Self::get) on the
    /// same source.
    fn set(&mut self, name: &str, value: &str);

    /// Returns the value if present and non-empty, the default otherwise.
    fn get_or_default(&self, name: &str, default: &str) -> String {
        match self.get(name) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) {
        // SAFETY: the loader only mutates the environment during the
        // single-threaded startup sequence, before the application spawns
        // anything that could read it concurrently.
        unsafe { std::env::set_var(name, value) };
    }
}

/// An in-memory source backed by a `HashMap`.
///
/// Used by tests and tools that need configuration resolution without
/// mutating the real process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) {
        self.vars.insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn map_env_set_is_visible_to_get() {
        let mut env = MapEnv::new();
        assert!(env.get("SERVER_PORT").is_none());

        env.set("SERVER_PORT", "4534");
        assert_eq!(env.get("SERVER_PORT").as_deref(), Some("4534"));
    }

    #[test]
    fn get_or_default_treats_empty_as_unset() {
        let env = MapEnv::new().with_var("LOG_LEVEL", "");
        assert_eq!(env.get_or_default("LOG_LEVEL", "info"), "info");
        assert_eq!(env.get_or_default("MISSING", "info"), "info");

        // get itself still reports the empty variable as present
        assert_eq!(env.get("LOG_LEVEL").as_deref(), Some(""));
    }

    #[test]
    #[serial]
    fn process_env_reads_real_variables() {
        temp_env::with_vars([("PROPHET_CONFIG_TEST_GET", Some("abc"))], || {
            let env = ProcessEnv;
            assert_eq!(env.get("PROPHET_CONFIG_TEST_GET").as_deref(), Some("abc"));
            assert_eq!(env.get_or_default("PROPHET_CONFIG_TEST_GET", "zzz"), "abc");
        });
    }

    #[test]
    #[serial]
    fn process_env_set_is_visible_to_get() {
        temp_env::with_vars([("PROPHET_CONFIG_TEST_SET", None::<&str>)], || {
            let mut env = ProcessEnv;
            assert!(env.get("PROPHET_CONFIG_TEST_SET").is_none());

            env.set("PROPHET_CONFIG_TEST_SET", "written");
            assert_eq!(
                env.get("PROPHET_CONFIG_TEST_SET").as_deref(),
                Some("written")
            );
        });
    }
}
