//! Locking script templates for standard output types.

pub mod p2pkh;
