//! Profile card components
//!
//! All components are driven by layouts from `profilehero-core` and emit
//! taps through handlers; none of them own screen state.

mod action_bar;
mod avatar;
mod bio;
mod button;
mod change_photo;

pub use action_bar::*;
pub use avatar::*;
pub use bio::*;
pub use button::*;
pub use change_photo::*;
