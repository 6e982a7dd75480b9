//! Mock image gateway: resolves every prompt to a placeholder image.
//!
//! Used when no routing endpoint is configured, and in tests.

use tracing::debug;
use uuid::Uuid;
use wall::acquire::{AcquireError, AcquiredImage, ImageGateway};

pub const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/seed";

/// Placeholder size requested from the image service.
const PLACEHOLDER_PX: u32 = 512;

#[derive(Debug, Clone, Default)]
pub struct MockGateway;

impl MockGateway {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Placeholder URL for an image id. The same id always maps to the same image.
#[must_use]
pub fn placeholder_url(id: &str) -> String {
    format!("{PLACEHOLDER_BASE_URL}/{id}/{PLACEHOLDER_PX}/{PLACEHOLDER_PX}")
}

#[async_trait::async_trait]
impl ImageGateway for MockGateway {
    async fn generate(&self, prompt: &str) -> Result<AcquiredImage, AcquireError> {
        let id = Uuid::new_v4().to_string();
        debug!(%id, "gateway: mock image");
        Ok(AcquiredImage { url: placeholder_url(&id), prompt: prompt.to_owned(), id })
    }
}
