//! Component tests over fixture archives

mod extraction;
mod listing;
