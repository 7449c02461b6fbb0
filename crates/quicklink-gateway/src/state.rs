use std::sync::Arc;

use quicklink_core::LinkService;

/// Largest batch accepted by `POST /links`.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 5;

#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn LinkService>,
    base_url: String,
    max_batch_size: usize,
}

impl AppState {
    pub fn new(service: Arc<dyn LinkService>, public_base_url: impl Into<String>) -> Self {
        Self {
            service,
            base_url: public_base_url.into(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
        }
    }

    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn service(&self) -> &dyn LinkService {
        self.service.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }
}
