mod avl;
pub mod diagnostics;
pub mod satnet;

pub use satnet::{SatNet, SatNetError};
