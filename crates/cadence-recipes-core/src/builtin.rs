//! Recipes shipped with the catalog.
//!
//! Each recipe is a read-only global built on first access and kept for the
//! lifetime of the process. Slug literals and dates are checked at compile time.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::recipe::{RecipeDescriptor, RecipeMetadata, RecipeSlug};

// -------------------------------------------------------
// create-a-topshot-set
// -------------------------------------------------------

pub const CREATE_A_TOPSHOT_SET_SLUG: RecipeSlug = RecipeSlug::from_static("create-a-topshot-set");

const CREATE_A_TOPSHOT_SET_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2022, 10, 9) {
    Some(date) => date,
    None => panic!("invalid creation date"),
};

/// Creating a TopShot set so plays can be added and moments minted from them.
pub static CREATE_A_TOPSHOT_SET: LazyLock<RecipeDescriptor> = LazyLock::new(|| {
    RecipeDescriptor::new(
        CREATE_A_TOPSHOT_SET_SLUG,
        RecipeMetadata {
            title: "Create a TopShot Set".into(),
            created_at: CREATE_A_TOPSHOT_SET_DATE,
            author: "Flow Blockchain".into(),
            playground_link: "https://play.onflow.org/63a7ce9f-3315-4c55-8392-2d626bb8387d?type=account&id=91c4010c-2407-4a3c-a0c1-cc4d3904d9f8&storage=none".into(),
            excerpt: "Using the TopShot contract, this is how you would create a set so that you could add plays to them and mint moments from those plays.".into(),
        },
    )
});

/// Every built-in recipe.
pub fn all() -> impl Iterator<Item = &'static RecipeDescriptor> {
    [&*CREATE_A_TOPSHOT_SET].into_iter()
}
