//! Durable bearer-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `localStorage` key holds the token so a reload restores the session
//! without re-authentication. The profile is never persisted; it is
//! re-fetched on restore. Outside the browser (SSR, native tests) a
//! thread-local cell stands in so the same save/load/clear paths run.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "eduagent_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY_TOKEN: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the persisted token, if any.
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(STORAGE_KEY).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_TOKEN.with(|cell| cell.borrow().clone())
    }
}

/// Persist the token, replacing any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_TOKEN.with(|cell| *cell.borrow_mut() = Some(token.to_owned()));
    }
}

/// Remove the persisted token. Safe to call when none is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY_TOKEN.with(|cell| *cell.borrow_mut() = None);
    }
}
