//! Core library for the cadence-recipes catalog.
//!
//! A recipe is a tutorial entry pairing a Cadence smart contract and a
//! transaction with an explanation of each. This crate provides the
//! [`recipe::RecipeDescriptor`] record, whose file paths are derived from the
//! recipe slug, along with the shared infrastructure around it: the built-in
//! recipes, a slug-keyed [`catalog::Catalog`], configuration loading, JSON
//! export, and content-root existence checks.
//!
//! Rendering and loading file contents are left to the consuming site
//! generator.

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod recipe;
