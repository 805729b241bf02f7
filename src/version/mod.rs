//! Version parsing and comparison engine
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│   Version   │────▶│  Comparator │
//! │  (text in)  │     │  (record)   │     │  (ordering) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                     ┌─────────────┐     ┌─────────────┐
//!                     │   Upgrade   │────▶│    Part     │
//!                     │ (boundary)  │     │ (split+cmp) │
//!                     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: Tolerant/strict parser from text to [`Version`]
//! - [`record`]: The [`Version`] record with text and JSON rendering
//! - [`compare`]: Weighted four-component total ordering
//! - [`upgrade`]: Classification of crossed upgrade boundaries
//! - [`part`]: Ordering of a single component
//! - [`split`]: Leading-digit split of a single component
//! - [`error`]: Error types for parsing and comparison

pub mod compare;
pub mod error;
pub mod parser;
pub mod part;
pub mod record;
pub mod split;
pub mod upgrade;

pub use compare::compare;
pub use error::VersionError;
pub use parser::{ParseMode, ParseOptions, VersionParser, parse, parse_bytes};
pub use record::{Component, Version};
pub use upgrade::{UpgradeKind, upgrade_kind};
