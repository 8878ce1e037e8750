//! Portfolio Store Sync
//!
//! Single source of truth for the mutable content collections, kept in step
//! with a content source.
//!
//! ## Architecture
//!
//! - **ContentSource**: backend operations (`fetch`, `create`, `delete`)
//! - **RemoteSource**: REST backend over reqwest (native builds)
//! - **LocalSource**: embedded defaults with clock-assigned ids
//! - **PortfolioStore**: owns the collections; `load`, `add`, `remove`

mod error;
#[cfg(feature = "native")]
mod remote;
mod source;
mod sync;

pub use error::{StoreError, StoreResult};
#[cfg(feature = "native")]
pub use remote::{RemoteConfig, RemoteSource};
pub use source::{ClockIds, ContentSource, LocalSource, SourceKind};
pub use sync::{apply_created, apply_deleted, fetch_all, PortfolioStore, Removal};
