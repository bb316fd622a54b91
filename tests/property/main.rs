//! Property-based tests.
//!
//! Run with: `cargo test --test property`

mod parser_noise;
mod signature_props;
