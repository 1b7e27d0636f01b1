//! Corruption handling and property tests

mod corruption;
mod properties;
