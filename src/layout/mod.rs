//! Layout engine: content normalization, height estimation, and
//! section-aware pagination.
//!
//! Everything in this module is a pure function of its arguments: no
//! global state, no I/O, no failure modes. Callers can invoke it
//! repeatedly and concurrently without coordination.

mod estimate;
mod geometry;
mod normalize;
mod paginate;

pub use estimate::{CharWidthEstimator, HeightEstimator};
pub use geometry::{PageGeometry, FOOTER_RESERVE, HEADER_RESERVE, SECTION_HEADER_HEIGHT};
pub use normalize::normalize;
pub use paginate::{paginate, paginate_with, Page, RenderItem};
