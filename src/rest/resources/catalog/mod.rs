//! Catalog resources: everything a node sells.
//!
//! | Resource | Path | Scope |
//! |----------|------|-------|
//! | [`Article`] | `catalog/articles` | node |
//! | [`Category`] | `catalog/categories` | company |
//! | [`Tax`] | `catalog/taxes` | company |
//! | [`Discount`] | `catalog/discounts` | shop |
//! | [`OptionList`] | `catalog/option_lists` | node |
//! | [`CatalogOption`] | `catalog/options` | node |
//! | [`Pack`] | `catalog/packs` | node |

mod article;
mod category;
mod discount;
mod option;
mod pack;
mod tax;

pub use article::{
    Article, ArticleCreation, ArticleDeclination, ArticleModification, ArticleVariation,
    ArticleVariationOptions, Unit, ValuePair,
};
pub use category::{Category, CategoryCreation, CategoryModification};
pub use discount::{Discount, DiscountCreation, DiscountModification, DiscountType};
pub use option::{
    CatalogOption, CatalogOptionCreation, CatalogOptionModification, OptionList,
    OptionListCreation, OptionListModification,
};
pub use pack::{Pack, PackCreation, PackModification};
pub use tax::{Tax, TaxCreation, TaxModification};
