pub mod dto {
    pub mod concert;
    pub mod filter_options;
    pub mod preferences;
}

pub mod controller;
pub mod date_format;
pub mod error;
pub mod grouping;
pub mod sequence;
pub mod service;
pub mod sticky;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use controller::{ChangeOutcome, ChangeReport, FilterController, FilterPhase};
pub use date_format::DateFormatter;
pub use grouping::{group_concerts, DateGroup, NeighborhoodGroup};
pub use sequence::{RequestSequence, Ticket};
pub use service::ListingService;
pub use sticky::{FrameThrottle, SectionBounds, StickyDateTracker, StickyUpdate, DEFAULT_STICKY_OFFSET};

// Re-export DTOs
pub use dto::{
    concert::{Concert, ConcertListResponse},
    filter_options::{FilterOption, FilterOptionsResponse, VenueOption},
    preferences::{CheckboxState, FilterCategory, Preferences},
};
