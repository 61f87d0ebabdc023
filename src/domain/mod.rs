pub mod candidate;
pub mod icon;
pub mod result;

pub use candidate::{CandidateSource, DescriptionCandidate, TitleCandidate};
pub use icon::{Icon, IconSource, ImageMetadata};
pub use result::{Diagnostics, FetchResult, OperationError, Step};
