//! Slug-keyed registry of recipe descriptors.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::builtin;
use crate::error::{RecipeError, Result};
use crate::recipe::RecipeDescriptor;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let recipes: BTreeMap<_, _> = builtin::all()
        .map(|r| (r.slug().to_string(), r.clone()))
        .collect();
    debug!(count = recipes.len(), "loaded built-in recipe catalog");
    Catalog { recipes }
});

/// A set of recipes with unique slugs, iterated in slug order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: BTreeMap<String, RecipeDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of recipes shipped with this crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Register a recipe. Slugs must be unique within a catalog.
    pub fn insert(&mut self, descriptor: RecipeDescriptor) -> Result<()> {
        let slug = descriptor.slug().to_string();
        if self.recipes.contains_key(&slug) {
            return Err(RecipeError::DuplicateSlug(slug));
        }
        self.recipes.insert(slug, descriptor);
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<&RecipeDescriptor> {
        self.recipes.get(slug)
    }

    /// Like [`Catalog::get`], but an absent slug is an error.
    pub fn require(&self, slug: &str) -> Result<&RecipeDescriptor> {
        self.get(slug)
            .ok_or_else(|| RecipeError::UnknownRecipe(slug.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeDescriptor> {
        self.recipes.values()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a RecipeDescriptor;
    type IntoIter = std::collections::btree_map::Values<'a, String, RecipeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.values()
    }
}
