use lectern_core::LookupResolver;

/// Shared handler state; cloned per request
#[derive(Clone)]
pub struct AppState {
    pub resolver: LookupResolver,
}

impl AppState {
    pub fn new(resolver: LookupResolver) -> Self {
        Self { resolver }
    }
}
