//! GIMLI-24 Kernels
//!
//! The permutation and the byte helpers the duplex layer is built from.

pub mod constants;
pub mod portable;
