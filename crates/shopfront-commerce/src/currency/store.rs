//! Persisted currency selection.

use crate::currency::CurrencyState;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use crate::persist::{load_or_default, StorageKeys};
use shopfront_cache::{Cache, KeyValueStore};

/// The currency selection plus the storage handle it is saved to.
///
/// Stored as a bare code string, e.g. `"EUR"`.
#[derive(Debug, Clone)]
pub struct CurrencyStore<S> {
    cache: Cache<S>,
    key: String,
    state: CurrencyState,
}

impl<S: KeyValueStore> CurrencyStore<S> {
    /// Hydrate the selection; missing, malformed or unknown values use
    /// `fallback`.
    pub fn load(cache: Cache<S>, keys: &StorageKeys, fallback: Currency) -> Self {
        let code: Option<String> = load_or_default(&cache, &keys.currency);
        let selected = match code.as_deref().map(Currency::from_code) {
            Some(Some(currency)) => currency,
            Some(None) => {
                tracing::warn!(key = %keys.currency, "unknown stored currency, using fallback");
                fallback
            }
            None => fallback,
        };
        Self {
            cache,
            key: keys.currency.clone(),
            state: CurrencyState::new(selected),
        }
    }

    pub fn state(&self) -> &CurrencyState {
        &self.state
    }

    pub fn selected(&self) -> Currency {
        self.state.selected()
    }

    /// Select by code and persist. Unknown codes select USD.
    pub fn select(&mut self, code: &str) -> Result<Currency, CommerceError> {
        let selected = self.state.select(code);
        self.cache.set(&self.key, selected.code()).map_err(|e| {
            tracing::warn!(key = %self.key, error = %e, "failed to persist currency");
            CommerceError::from(e)
        })?;
        tracing::debug!(currency = %selected, "currency selected");
        Ok(selected)
    }

    pub fn convert(&self, amount: &Money) -> Money {
        self.state.convert(amount)
    }

    pub fn format(&self, amount: &Money) -> String {
        self.state.format(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_round_trips_as_bare_string() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        let mut store = CurrencyStore::load(cache.clone(), &keys, Currency::USD);

        store.select("gbp").unwrap();
        assert_eq!(cache.store().get_raw(&keys.currency).unwrap().as_deref(), Some("\"GBP\""));

        let reloaded = CurrencyStore::load(cache, &keys, Currency::USD);
        assert_eq!(reloaded.selected(), Currency::GBP);
    }

    #[test]
    fn test_missing_selection_uses_fallback() {
        let store = CurrencyStore::load(Cache::in_memory(), &StorageKeys::default(), Currency::CAD);
        assert_eq!(store.selected(), Currency::CAD);
    }

    #[test]
    fn test_malformed_selection_uses_fallback() {
        let cache = Cache::in_memory();
        let keys = StorageKeys::default();
        cache.store().set_raw(&keys.currency, "{oops").unwrap();

        let store = CurrencyStore::load(cache, &keys, Currency::USD);
        assert_eq!(store.selected(), Currency::USD);
    }

    #[test]
    fn test_unknown_selection_falls_back_to_usd() {
        let mut store = CurrencyStore::load(Cache::in_memory(), &StorageKeys::default(), Currency::EUR);
        assert_eq!(store.select("doubloons").unwrap(), Currency::USD);
    }
}
