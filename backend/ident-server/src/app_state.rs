use ident_service::IdentityService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub service: IdentityService,
}

impl AppState {
    pub fn new(service: IdentityService) -> Self {
        Self { service }
    }
}
