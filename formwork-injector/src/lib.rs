//! Service-locator contracts for the dependency injector
//!
//! The injector asks a [`ConfigLocator`] for the configuration of a named
//! service before falling back to its own defaults. The stock
//! [`ServiceConfigurationLocator`] never has anything to contribute.

use serde_json::Value;

/// Locates configuration for a particular named service.
pub trait ConfigLocator {
    /// Configuration for `name`, or `None` if the locator has nothing
    /// for it.
    fn locate_config_for(&self, name: &str) -> Option<Value>;

    /// Clear any cached lookup state.
    fn reset(&mut self);
}

/// Default locator: never has configuration for any service.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceConfigurationLocator;

impl ConfigLocator for ServiceConfigurationLocator {
    fn locate_config_for(&self, _name: &str) -> Option<Value> {
        None
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locator_finds_nothing() {
        let locator = ServiceConfigurationLocator;
        assert!(locator.locate_config_for("MailService").is_none());
        assert!(locator.locate_config_for("").is_none());
    }

    #[test]
    fn reset_is_a_noop() {
        let mut locator = ServiceConfigurationLocator;
        locator.reset();
        assert!(locator.locate_config_for("MailService").is_none());
    }
}
