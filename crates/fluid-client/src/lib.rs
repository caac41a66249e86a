pub mod aggregator;
pub mod client;
pub mod error;
pub mod generation;
pub mod traits;

pub use aggregator::{list_vault_summaries, vault_ids};
pub use client::{DEFAULT_FLUID_API_URL, FluidApiClient};
pub use error::FluidApiError;
pub use generation::{GenerationToken, RequestGeneration};
pub use traits::VaultDataSource;
