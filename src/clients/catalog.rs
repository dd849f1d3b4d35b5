//! Catalog operations of [`TactillClient`].
//!
//! Each method delegates to the [`Resource`] or [`MutableResource`]
//! implementation of the record type, using the client's working scope.

use crate::clients::{TactillClient, TactillError};
use crate::config::TactillId;
use crate::rest::resources::{
    Article, ArticleCreation, ArticleModification, CatalogOption, CatalogOptionCreation,
    CatalogOptionModification, Category, CategoryCreation, CategoryModification, Discount,
    DiscountCreation, DiscountModification, OptionList, OptionListCreation,
    OptionListModification, Pack, PackCreation, PackModification, Tax, TaxCreation,
    TactillResponse, TaxModification,
};
use crate::rest::{ListParams, MutableResource, Resource};

impl TactillClient {
    /// Lists articles.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_articles(&self, params: &ListParams) -> Result<Vec<Article>, TactillError> {
        Article::all(self, params).await
    }

    /// Reads one article.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_article(&self, id: &TactillId) -> Result<Article, TactillError> {
        Article::find(self, id).await
    }

    /// Creates an article in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_article(
        &self,
        creation: &ArticleCreation,
    ) -> Result<Article, TactillError> {
        Article::create(self, creation).await
    }

    /// Applies a partial update to an article and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_article(
        &self,
        id: &TactillId,
        modification: &ArticleModification,
    ) -> Result<TactillResponse, TactillError> {
        Article::update(self, id, modification).await
    }

    /// Deletes an article and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_article(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        Article::delete(self, id).await
    }

    /// Lists categories.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_categories(&self, params: &ListParams) -> Result<Vec<Category>, TactillError> {
        Category::all(self, params).await
    }

    /// Reads one category.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_category(&self, id: &TactillId) -> Result<Category, TactillError> {
        Category::find(self, id).await
    }

    /// Creates a category in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_category(
        &self,
        creation: &CategoryCreation,
    ) -> Result<Category, TactillError> {
        Category::create(self, creation).await
    }

    /// Applies a partial update to a category and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_category(
        &self,
        id: &TactillId,
        modification: &CategoryModification,
    ) -> Result<TactillResponse, TactillError> {
        Category::update(self, id, modification).await
    }

    /// Deletes a category and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_category(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        Category::delete(self, id).await
    }

    /// Lists taxes.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_taxes(&self, params: &ListParams) -> Result<Vec<Tax>, TactillError> {
        Tax::all(self, params).await
    }

    /// Reads one tax.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_tax(&self, id: &TactillId) -> Result<Tax, TactillError> {
        Tax::find(self, id).await
    }

    /// Creates a tax in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_tax(&self, creation: &TaxCreation) -> Result<Tax, TactillError> {
        Tax::create(self, creation).await
    }

    /// Applies a partial update to a tax and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_tax(
        &self,
        id: &TactillId,
        modification: &TaxModification,
    ) -> Result<TactillResponse, TactillError> {
        Tax::update(self, id, modification).await
    }

    /// Deletes a tax and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_tax(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        Tax::delete(self, id).await
    }

    /// Lists discounts.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_discounts(&self, params: &ListParams) -> Result<Vec<Discount>, TactillError> {
        Discount::all(self, params).await
    }

    /// Reads one discount.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_discount(&self, id: &TactillId) -> Result<Discount, TactillError> {
        Discount::find(self, id).await
    }

    /// Creates a discount in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_discount(
        &self,
        creation: &DiscountCreation,
    ) -> Result<Discount, TactillError> {
        Discount::create(self, creation).await
    }

    /// Applies a partial update to a discount and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_discount(
        &self,
        id: &TactillId,
        modification: &DiscountModification,
    ) -> Result<TactillResponse, TactillError> {
        Discount::update(self, id, modification).await
    }

    /// Deletes a discount and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_discount(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        Discount::delete(self, id).await
    }

    /// Lists option lists.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_option_lists(
        &self,
        params: &ListParams,
    ) -> Result<Vec<OptionList>, TactillError> {
        OptionList::all(self, params).await
    }

    /// Reads one option list.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_option_list(&self, id: &TactillId) -> Result<OptionList, TactillError> {
        OptionList::find(self, id).await
    }

    /// Creates an option list in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_option_list(
        &self,
        creation: &OptionListCreation,
    ) -> Result<OptionList, TactillError> {
        OptionList::create(self, creation).await
    }

    /// Applies a partial update to an option list and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_option_list(
        &self,
        id: &TactillId,
        modification: &OptionListModification,
    ) -> Result<TactillResponse, TactillError> {
        OptionList::update(self, id, modification).await
    }

    /// Deletes an option list and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_option_list(
        &self,
        id: &TactillId,
    ) -> Result<TactillResponse, TactillError> {
        OptionList::delete(self, id).await
    }

    /// Lists options.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_options(
        &self,
        params: &ListParams,
    ) -> Result<Vec<CatalogOption>, TactillError> {
        CatalogOption::all(self, params).await
    }

    /// Reads one option.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_option(&self, id: &TactillId) -> Result<CatalogOption, TactillError> {
        CatalogOption::find(self, id).await
    }

    /// Creates an option in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_option(
        &self,
        creation: &CatalogOptionCreation,
    ) -> Result<CatalogOption, TactillError> {
        CatalogOption::create(self, creation).await
    }

    /// Applies a partial update to an option and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_option(
        &self,
        id: &TactillId,
        modification: &CatalogOptionModification,
    ) -> Result<TactillResponse, TactillError> {
        CatalogOption::update(self, id, modification).await
    }

    /// Deletes an option and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_option(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        CatalogOption::delete(self, id).await
    }

    /// Lists packs.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError`] if the request fails or a record cannot be decoded.
    pub async fn get_packs(&self, params: &ListParams) -> Result<Vec<Pack>, TactillError> {
        Pack::all(self, params).await
    }

    /// Reads one pack.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn get_pack(&self, id: &TactillId) -> Result<Pack, TactillError> {
        Pack::find(self, id).await
    }

    /// Creates a pack in the working scope.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the payload.
    pub async fn create_pack(&self, creation: &PackCreation) -> Result<Pack, TactillError> {
        Pack::create(self, creation).await
    }

    /// Applies a partial update to a pack and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] if the server rejects the patch.
    pub async fn update_pack(
        &self,
        id: &TactillId,
        modification: &PackModification,
    ) -> Result<TactillResponse, TactillError> {
        Pack::update(self, id, modification).await
    }

    /// Deletes a pack and returns the acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns [`TactillError::Response`] with status 404 if it does not exist.
    pub async fn delete_pack(&self, id: &TactillId) -> Result<TactillResponse, TactillError> {
        Pack::delete(self, id).await
    }
}
