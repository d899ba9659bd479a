use std::sync::Arc;

use burrow_core::LinkStore;
use burrow_service::{Registrar, RegistrarService, Resolver, ResolverService};

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn Resolver>,
    registrar: Arc<dyn Registrar>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn Resolver>, registrar: Arc<dyn Registrar>) -> Self {
        Self {
            resolver,
            registrar,
        }
    }

    /// Wires both services over one shared store handle.
    pub fn with_store<S: LinkStore>(store: Arc<S>) -> Self {
        Self::new(
            Arc::new(ResolverService::new(Arc::clone(&store))),
            Arc::new(RegistrarService::new(store)),
        )
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn registrar(&self) -> &dyn Registrar {
        self.registrar.as_ref()
    }
}
