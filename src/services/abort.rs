// ============================================================================
// ABORT HANDLE - Requests scoped to a component's lifetime
// ============================================================================

use web_sys::{AbortController, AbortSignal};

/// Owns an `AbortController`; dropping the handle aborts every request that
/// was started with its signal.
pub struct AbortHandle {
    controller: Option<AbortController>,
}

impl AbortHandle {
    pub fn new() -> Self {
        let controller = AbortController::new()
            .map_err(|e| log::warn!("⚠️ AbortController unavailable: {:?}", e))
            .ok();
        Self { controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Default for AbortHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AbortHandle {
    fn drop(&mut self) {
        self.abort();
    }
}
