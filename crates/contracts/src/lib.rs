//! Wire contracts for the Influent frontend.
//!
//! Everything served by the campaign API crosses through these types.
//! Decoding is deliberately lenient: upstream payloads vary in envelope
//! shape and field encoding, and a malformed field has to degrade to a
//! usable default instead of failing the whole response.

pub mod domain;
pub mod shared;
pub mod system;
