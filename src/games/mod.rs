//! Game implementations.

pub mod hangman;
