#[doc(hidden)]
pub mod pipeline;
#[doc(hidden)]
pub mod policy;
#[doc(hidden)]
pub mod score;

#[doc(inline)]
pub use pipeline::{finalise, shortlist, RankedFacility};
#[doc(inline)]
pub use policy::SearchPolicy;
#[doc(inline)]
pub use score::relevance;
