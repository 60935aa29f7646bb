//! UI module - contains UI rendering components
//!
//! Standalone widgets shared by the views in `app`.

pub mod components;
