use leptos::prelude::*;

use super::storage;
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

/// Session handle passed explicitly to every query function
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(state: AuthState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    /// Token for an outgoing request; does not subscribe the caller
    pub fn access_token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    /// Drop the session from memory and storage
    pub fn clear(&self) {
        storage::clear_tokens();
        let _ = self.state.try_update(|s| s.access_token = None);
    }

    /// Ends the session when the server rejected the credentials
    pub fn guard<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized { status }) = &result {
            log::warn!("Session rejected with HTTP {}, clearing token", status);
            self.clear();
        }
        result
    }
}

/// Auth context provider component
///
/// Reads the stored token once on mount; everything below receives it through
/// [`use_auth`].
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::new(AuthState {
        access_token: storage::get_access_token(),
    });
    provide_context(auth);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
