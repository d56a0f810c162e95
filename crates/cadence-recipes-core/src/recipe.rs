//! Recipe descriptors: the catalog record for one Cadence recipe.
//!
//! A recipe pairs a smart contract and a transaction with a prose explanation
//! of each. The four file locations are never authored by hand; they are
//! derived from the slug using a fixed directory convention:
//!
//! ```text
//! <slug>/
//! ├── cadence/
//! │   ├── contract.cdc
//! │   └── transaction.cdc
//! └── explanations/
//!     ├── contract.txt
//!     └── transaction.txt
//! ```
//!
//! Consumers (site generators, documentation browsers) resolve these paths
//! against a content root, so the layout must not change.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{RecipeError, Result};

/// Sub-path of the contract source, relative to the recipe directory.
pub const CONTRACT_CODE: &str = "cadence/contract.cdc";
/// Sub-path of the transaction source, relative to the recipe directory.
pub const TRANSACTION_CODE: &str = "cadence/transaction.cdc";
/// Sub-path of the contract explanation, relative to the recipe directory.
pub const CONTRACT_EXPLANATION: &str = "explanations/contract.txt";
/// Sub-path of the transaction explanation, relative to the recipe directory.
pub const TRANSACTION_EXPLANATION: &str = "explanations/transaction.txt";

/// A validated recipe identifier.
///
/// Slugs are lowercase ASCII letters, digits and single hyphens, e.g.
/// `create-a-topshot-set`. This keeps every slug a safe, single path segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeSlug(Cow<'static, str>);

impl RecipeSlug {
    /// Parse and validate a slug supplied at runtime.
    pub fn parse(slug: &str) -> Result<Self> {
        match invalid_reason(slug) {
            Some(reason) => Err(RecipeError::InvalidSlug {
                slug: slug.to_string(),
                reason,
            }),
            None => Ok(Self(Cow::Owned(slug.to_string()))),
        }
    }

    /// Build a slug from a literal. Validation runs at compile time when used
    /// in a `const` context.
    pub const fn from_static(slug: &'static str) -> Self {
        match invalid_reason(slug) {
            Some(_) => panic!("invalid recipe slug literal"),
            None => Self(Cow::Borrowed(slug)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a sub-path onto this slug with the `/` separator.
    fn join(&self, sub_path: &str) -> String {
        format!("{}/{sub_path}", self.0)
    }
}

impl fmt::Display for RecipeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecipeSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

const fn invalid_reason(slug: &str) -> Option<&'static str> {
    let bytes = slug.as_bytes();
    if bytes.is_empty() {
        return Some("slug is empty");
    }
    if bytes[0] == b'-' || bytes[bytes.len() - 1] == b'-' {
        return Some("slug must not start or end with '-'");
    }

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if !(b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-') {
            return Some("only lowercase ASCII letters, digits and '-' are allowed");
        }
        if b == b'-' && bytes[i + 1] == b'-' {
            return Some("slug must not contain consecutive '-'");
        }
        i += 1;
    }
    None
}

/// The four file locations of a recipe, each relative to the content root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePaths {
    smart_contract_code: String,
    smart_contract_explanation: String,
    transaction_code: String,
    transaction_explanation: String,
}

impl RecipePaths {
    /// Derive all four paths from a slug.
    pub fn for_slug(slug: &RecipeSlug) -> Self {
        Self {
            smart_contract_code: slug.join(CONTRACT_CODE),
            smart_contract_explanation: slug.join(CONTRACT_EXPLANATION),
            transaction_code: slug.join(TRANSACTION_CODE),
            transaction_explanation: slug.join(TRANSACTION_EXPLANATION),
        }
    }

    pub fn smart_contract_code(&self) -> &str {
        &self.smart_contract_code
    }

    pub fn smart_contract_explanation(&self) -> &str {
        &self.smart_contract_explanation
    }

    pub fn transaction_code(&self) -> &str {
        &self.transaction_code
    }

    pub fn transaction_explanation(&self) -> &str {
        &self.transaction_explanation
    }

    /// Labelled paths in display order, keyed by their exported field names.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("smartContractCode", &self.smart_contract_code),
            ("smartContractExplanation", &self.smart_contract_explanation),
            ("transactionCode", &self.transaction_code),
            ("transactionExplanation", &self.transaction_explanation),
        ]
    }

    /// Join every path onto a content root. No filesystem access.
    pub fn resolve(&self, root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            smart_contract_code: root.join(&self.smart_contract_code),
            smart_contract_explanation: root.join(&self.smart_contract_explanation),
            transaction_code: root.join(&self.transaction_code),
            transaction_explanation: root.join(&self.transaction_explanation),
        }
    }
}

/// Recipe paths joined onto a concrete content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub smart_contract_code: PathBuf,
    pub smart_contract_explanation: PathBuf,
    pub transaction_code: PathBuf,
    pub transaction_explanation: PathBuf,
}

impl ResolvedPaths {
    pub fn entries(&self) -> [(&'static str, &Path); 4] {
        [
            ("smartContractCode", &self.smart_contract_code),
            ("smartContractExplanation", &self.smart_contract_explanation),
            ("transactionCode", &self.transaction_code),
            ("transactionExplanation", &self.transaction_explanation),
        ]
    }
}

/// Authored fields of a recipe, i.e. everything not derived from the slug.
#[derive(Debug, Clone)]
pub struct RecipeMetadata {
    pub title: String,
    pub created_at: NaiveDate,
    pub author: String,
    pub playground_link: String,
    pub excerpt: String,
}

/// Catalog record for one recipe.
///
/// Fields are private: once built, a descriptor cannot drift out of sync
/// with its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDescriptor {
    slug: RecipeSlug,
    title: String,
    created_at: NaiveDate,
    author: String,
    playground_link: String,
    excerpt: String,
    #[serde(flatten)]
    paths: RecipePaths,
}

impl RecipeDescriptor {
    pub fn new(slug: RecipeSlug, metadata: RecipeMetadata) -> Self {
        let paths = RecipePaths::for_slug(&slug);
        Self {
            slug,
            title: metadata.title,
            created_at: metadata.created_at,
            author: metadata.author,
            playground_link: metadata.playground_link,
            excerpt: metadata.excerpt,
            paths,
        }
    }

    pub fn slug(&self) -> &RecipeSlug {
        &self.slug
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn playground_link(&self) -> &str {
        &self.playground_link
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn paths(&self) -> &RecipePaths {
        &self.paths
    }

    pub fn smart_contract_code(&self) -> &str {
        self.paths.smart_contract_code()
    }

    pub fn smart_contract_explanation(&self) -> &str {
        self.paths.smart_contract_explanation()
    }

    pub fn transaction_code(&self) -> &str {
        self.paths.transaction_code()
    }

    pub fn transaction_explanation(&self) -> &str {
        self.paths.transaction_explanation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> RecipeMetadata {
        RecipeMetadata {
            title: "Mint an NFT".into(),
            created_at: NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
            author: "Flow Blockchain".into(),
            playground_link: "https://play.onflow.org/example".into(),
            excerpt: "Mint a single NFT.".into(),
        }
    }

    #[test]
    fn test_parse_valid_slugs() {
        assert!(RecipeSlug::parse("create-a-topshot-set").is_ok());
        assert!(RecipeSlug::parse("nft").is_ok());
        assert!(RecipeSlug::parse("erc-721-v2").is_ok());
    }

    #[test]
    fn test_parse_rejects_unsafe_slugs() {
        for bad in [
            "", "-leading", "trailing-", "double--dash", "Upper", "has space", "a/b", "..",
            "/abs", "under_score",
        ] {
            let err = RecipeSlug::parse(bad).unwrap_err();
            assert!(
                matches!(err, RecipeError::InvalidSlug { ref slug, .. } if slug == bad),
                "expected InvalidSlug for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_from_static_matches_parse() {
        const SLUG: RecipeSlug = RecipeSlug::from_static("mint-an-nft");
        assert_eq!(SLUG, RecipeSlug::parse("mint-an-nft").unwrap());
        assert_eq!(SLUG.to_string(), "mint-an-nft");
    }

    #[test]
    fn test_paths_follow_directory_convention() {
        let slug = RecipeSlug::parse("mint-an-nft").unwrap();
        let paths = RecipePaths::for_slug(&slug);
        assert_eq!(paths.smart_contract_code(), "mint-an-nft/cadence/contract.cdc");
        assert_eq!(paths.transaction_code(), "mint-an-nft/cadence/transaction.cdc");
        assert_eq!(
            paths.smart_contract_explanation(),
            "mint-an-nft/explanations/contract.txt"
        );
        assert_eq!(
            paths.transaction_explanation(),
            "mint-an-nft/explanations/transaction.txt"
        );
    }

    #[test]
    fn test_descriptor_paths_prefixed_by_slug() {
        let descriptor = RecipeDescriptor::new(RecipeSlug::parse("mint-an-nft").unwrap(), metadata());
        let prefix = format!("{}/", descriptor.slug());
        for (field, path) in descriptor.paths().entries() {
            assert!(path.starts_with(&prefix), "{field} = {path} lacks prefix {prefix}");
        }
    }

    #[test]
    fn test_resolve_joins_root() {
        let descriptor = RecipeDescriptor::new(RecipeSlug::parse("mint-an-nft").unwrap(), metadata());
        let resolved = descriptor.paths().resolve(Path::new("/srv/recipes"));
        assert_eq!(
            resolved.transaction_code,
            PathBuf::from("/srv/recipes/mint-an-nft/cadence/transaction.cdc")
        );
        assert!(resolved
            .entries()
            .iter()
            .all(|(_, p)| p.starts_with("/srv/recipes/mint-an-nft")));
    }

    #[test]
    fn test_serialize_uses_exported_field_names() {
        let descriptor = RecipeDescriptor::new(RecipeSlug::parse("mint-an-nft").unwrap(), metadata());
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["slug"], "mint-an-nft");
        assert_eq!(value["createdAt"], "2022-06-01");
        assert_eq!(value["playgroundLink"], "https://play.onflow.org/example");
        assert_eq!(value["smartContractCode"], "mint-an-nft/cadence/contract.cdc");
        assert_eq!(
            value["transactionExplanation"],
            "mint-an-nft/explanations/transaction.txt"
        );
        assert_eq!(value.as_object().unwrap().len(), 10);
    }
}
