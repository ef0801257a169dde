//! Protocol module containing the line framer and the command code decoder.

pub mod codec;
pub mod framer;

pub use codec::{decode_code, ProtocolError};
pub use framer::LineFramer;
