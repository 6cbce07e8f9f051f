// Library exports for unit tests and the desktop binary

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

pub mod catalog;
