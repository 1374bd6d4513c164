use std::sync::Arc;

use applink_core::{RequestLog, Resolver};

#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn Resolver>,
    log: Arc<dyn RequestLog>,
    trust_forwarded_for: bool,
}

impl AppState {
    pub fn new(resolver: Arc<dyn Resolver>, log: Arc<dyn RequestLog>) -> Self {
        Self {
            resolver,
            log,
            trust_forwarded_for: false,
        }
    }

    /// Takes the client IP from the first `X-Forwarded-For` entry when set.
    pub fn with_trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn log(&self) -> &dyn RequestLog {
        self.log.as_ref()
    }

    pub fn trust_forwarded_for(&self) -> bool {
        self.trust_forwarded_for
    }
}
