//! Tax calculation module

pub mod gst;

pub use gst::*;
