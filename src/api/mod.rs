//! Actor Showcase API access
//!
//! [`ApiClient`] is the only place that performs HTTP. Consumers that only
//! need the listing depend on the [`ActorSource`] trait so they can be driven
//! by a fake in tests.

pub mod client;
pub mod errors;
pub mod payload;

use async_trait::async_trait;

use crate::models::Actor;

pub use client::ApiClient;
pub use errors::ApiError;

/// Anything that can produce the current list of actors
#[async_trait]
pub trait ActorSource: Send + Sync {
    /// Fetch the full listing, in the order the server returns it
    async fn list_actors(&self) -> Result<Vec<Actor>, ApiError>;
}
