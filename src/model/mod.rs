//! Data model types for slit planning.

mod arrangement;
mod reel;
mod strip;

pub use arrangement::{Arrangement, CutMode};
pub use reel::Reel;
pub use strip::{BottomSize, FanSize, SideStrip, Strip, StripKind, UpsTier};
