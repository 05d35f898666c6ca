//! Desktop presentation of the greeting deck.
//!
//! This crate provides the Dioxus components that render a
//! [`greeting_core::Deck`] and forward clicks back into it.

pub mod components;
pub mod image;
pub mod theme;
