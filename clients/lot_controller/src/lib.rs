//! Listing lifecycle controller for the parking-space marketplace.
//!
//! The controller sits between a caller and two external services: a
//! [`LedgerAuthority`] that owns every lot and settles payments, and a
//! [`ContentStore`] that holds lot metadata documents and media. It
//! pre-validates each transition against a fresh read, serialises
//! transitions per lot, dispatches to the authority and reloads the whole
//! listing afterwards. No local state is ever updated optimistically.

pub mod authority;
pub mod clock;
pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod locks;
pub mod lot;

pub use authority::LedgerAuthority;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ControllerConfig;
pub use content::{ContentStore, MemoryContentStore, MetadataDocument};
pub use controller::{Action, ListingController, LotDraft, Notice};
pub use error::{AuthorityError, ContentError, ControllerError, Result};
pub use lot::{ListingStatus, LotRecord, LotView, UnknownStatus};
