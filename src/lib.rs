//! Raw PCM sample codec and the bits of a small 2D game's audio plumbing
//! built around it.

pub mod codec;
pub mod input;
pub mod output;
pub mod filter;
pub mod entity;
pub mod ears;

pub use codec::{ByteDepth, CodecError};
pub use input::format::PcmFormat;
