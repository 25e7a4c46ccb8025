pub mod client;
pub mod error;
pub mod rank;
pub mod tag;
pub mod types;

pub use client::{PlacesClient, SearchFilter};
pub use error::PlacesError;
pub use rank::{rank_by_rating, RankedPlace, DEFAULT_RANK_RADIUS_M};
pub use tag::{dedupe_places, TagOptions, TaggedPlace, DEFAULT_TAG_RADIUS_M};
pub use types::PlaceEntry;
