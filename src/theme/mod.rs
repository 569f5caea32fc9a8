//! Visual theme for Profile Hero.

mod styles;

pub use styles::GLOBAL_STYLES;
