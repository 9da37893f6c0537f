//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns a `ViewState` signal and, in the browser, a synchronizer
//! built with the page's `PageMode`. Rendering details are delegated to
//! `components`.

pub mod detail;
pub mod favorites;
pub mod showcase;
