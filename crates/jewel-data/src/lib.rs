//! Product sources and listing sessions for the jewelry storefront.
//!
//! Listing pages fetch a whole section from the backend and refine it
//! locally. This crate provides the sources those collections come from
//! and the session that ties a page's filter state, its URL and its
//! in-flight fetches together.
//!
//! # Example
//!
//! ```rust,ignore
//! use jewel_data::prelude::*;
//!
//! let source = JsonFileSource::new("data/");
//! let mut session = ListingSession::from_url(Section::Jewelry, "?category=ring&metal=Platinum");
//! session.reload(&source);
//!
//! for product in session.products() {
//!     println!("{} {}", product.id, product.name);
//! }
//! println!("share: {}", session.url());
//! ```

mod error;
mod section;
mod sequencer;
mod session;
mod source;

pub use error::FetchError;
pub use section::Section;
pub use sequencer::{RequestSequencer, RequestTicket};
pub use session::{Completion, ListingSession, LoadStatus};
pub use source::{parse_listing, JsonFileSource, ProductSource, StaticSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        FetchError, JsonFileSource, ListingSession, LoadStatus, ProductSource, Section,
        StaticSource,
    };
}
