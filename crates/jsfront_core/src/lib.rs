//! jsfront_core: Source position primitives shared by every compiler stage.
//!
//! Spans are byte ranges into an immutable source buffer; the line map turns
//! a byte offset back into a line/column pair for diagnostics.

pub mod text;

pub use text::{LineAndColumn, LineMap, TextPos, TextSpan};
