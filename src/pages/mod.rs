//! Page components for Profile Hero.

mod profile;

pub use profile::ProfileScreen;
