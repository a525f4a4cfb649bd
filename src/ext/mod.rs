//! Collection types the standard library does not provide.
pub mod ordered_hash_map;
