use std::sync::RwLock;

use tracing::info;

use crate::domain::{DomainError, Provider};

/// Holds the provider every call site sends its prompts through.
///
/// Starts on the primary provider. A rejected value leaves the current
/// selection untouched.
#[derive(Debug, Default)]
pub struct ProviderSelector {
    current: RwLock<Provider>,
}

impl ProviderSelector {
    pub fn new(initial: Provider) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn provider(&self) -> Provider {
        *self.current.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_provider(&self, value: &str) -> Result<Provider, DomainError> {
        let provider: Provider = value.parse()?;
        self.select(provider);
        Ok(provider)
    }

    pub fn select(&self, provider: Provider) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        if *current != provider {
            info!("Provider switched: {} -> {}", *current, provider);
        }
        *current = provider;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_primary_provider() {
        assert_eq!(ProviderSelector::default().provider(), Provider::Gemini);
    }

    #[test]
    fn test_valid_values_take_effect_immediately() {
        let selector = ProviderSelector::default();
        for provider in Provider::ALL {
            assert_eq!(selector.set_provider(provider.as_str()).unwrap(), provider);
            assert_eq!(selector.provider(), provider);
        }
    }

    #[test]
    fn test_invalid_value_keeps_previous_provider() {
        let selector = ProviderSelector::new(Provider::OpenAi);
        for bad in ["anthropic", "", "GEMINI", "open ai"] {
            let err = selector.set_provider(bad).unwrap_err();
            assert!(matches!(err, DomainError::InvalidProvider(_)));
            assert_eq!(selector.provider(), Provider::OpenAi);
        }
    }
}
