use crate::store::MemoryRepository;
use std::sync::Arc;

/// Shared state for the HTTP service. The analyzers themselves are pure; the
/// only stateful collaborator is the post repository used by the batch
/// internal-linking endpoint.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<MemoryRepository>,
}

impl AppState {
    pub fn new(repository: Arc<MemoryRepository>) -> Self {
        Self { repository }
    }
}
