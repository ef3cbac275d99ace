//! Persistence of the auth token in browser `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior. SSR paths and browsers with
//! storage disabled behave as if no token was ever stored.

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "africore_token";

/// Treat blank stored values as absent.
pub fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Read the persisted token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        normalize(storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token` for the next page load.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the persisted token.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
