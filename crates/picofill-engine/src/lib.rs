//! Picofill Engine
//!
//! Emulates the `picture` element's responsive-image semantics over an
//! arena document tree, for hosts without native support.
//!
//! # Example
//! ```rust,ignore
//! use picofill_engine::{HostCapabilities, Picofill};
//! use picofill_media::ViewportMedia;
//!
//! let mut engine = Picofill::new(
//!     HostCapabilities::default(),
//!     Some(Box::new(ViewportMedia::new(1024))),
//!     2.0,
//! );
//! engine.initialize();
//! let processed = engine.resolve(&mut doc, None, true);
//! ```

mod cache;
mod capabilities;
mod engine;
mod materialize;
mod schedule;
mod sources;

pub use cache::{CacheToken, SourceCache};
pub use capabilities::HostCapabilities;
pub use engine::Picofill;
pub use materialize::{ImageMaterializer, ResolvedImage};
pub use schedule::{DEFAULT_QUIET_PERIOD, ResizeDebouncer};
pub use sources::SourceGroup;

// Re-export sub-crates for embedders that build documents or evaluators.
pub use picofill_dom as dom;
pub use picofill_media as media;
pub use picofill_srcset as srcset;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
