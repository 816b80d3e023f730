//! Category repository.

use chrono::Utc;
use rust_decimal::Decimal;
use tally_core::domain::{Category, CategoryKind, DomainError};
use tally_shared::types::{CategoryId, UserId};
use tally_shared::{AppError, AppResult};

use crate::state::MemoryLedger;

/// Input for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryInput {
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Category kind.
    pub kind: CategoryKind,
    /// Default budgeted amount.
    pub budgeted_amount: Decimal,
}

/// Patch for updating a category; only provided fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryInput {
    /// New name.
    pub name: Option<String>,
    /// New kind.
    pub kind: Option<CategoryKind>,
    /// New default budgeted amount.
    pub budgeted_amount: Option<Decimal>,
}

/// Repository for category operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: MemoryLedger,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(store: MemoryLedger) -> Self {
        Self { store }
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the owner already has a category with this
    /// name and kind, or `Validation` for a blank name or negative
    /// default budget.
    pub fn create_category(&self, input: CreateCategoryInput) -> AppResult<Category> {
        let mut state = self.store.write()?;

        if state.categories.iter().any(|c| {
            c.user_id == input.user_id && c.name == input.name && c.kind == input.kind
        }) {
            return Err(AppError::Conflict(format!(
                "A category named '{}' with kind '{}' already exists",
                input.name, input.kind
            )));
        }

        let category = Category::new(
            input.user_id,
            input.name,
            input.kind,
            input.budgeted_amount,
            Utc::now(),
        )?;
        state.categories.push(category.clone());

        tracing::info!(category_id = %category.id, kind = %category.kind, "created category");
        Ok(category)
    }

    /// Applies a patch to a category, field by field.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned category, `Validation` for a
    /// blank name or negative budget, and `Conflict` if the patched
    /// (name, kind) collides with another category of the owner.
    pub fn update_category(
        &self,
        user_id: UserId,
        category_id: CategoryId,
        patch: UpdateCategoryInput,
    ) -> AppResult<Category> {
        let mut state = self.store.write()?;

        let index = state
            .categories
            .iter()
            .position(|c| c.id == category_id && c.user_id == user_id)
            .ok_or_else(|| AppError::NotFound(format!("Category {category_id}")))?;

        let name = patch
            .name
            .unwrap_or_else(|| state.categories[index].name.clone());
        let kind = patch.kind.unwrap_or(state.categories[index].kind);
        let budgeted_amount = patch
            .budgeted_amount
            .unwrap_or(state.categories[index].budgeted_amount);

        if name.trim().is_empty() {
            return Err(DomainError::EmptyCategoryName.into());
        }
        if budgeted_amount < Decimal::ZERO {
            return Err(DomainError::NegativeBudgetedAmount(budgeted_amount).into());
        }
        if state.categories.iter().any(|c| {
            c.id != category_id && c.user_id == user_id && c.name == name && c.kind == kind
        }) {
            return Err(AppError::Conflict(format!(
                "A category named '{name}' with kind '{kind}' already exists"
            )));
        }

        let category = &mut state.categories[index];
        category.name = name;
        category.kind = kind;
        category.budgeted_amount = budgeted_amount;

        Ok(category.clone())
    }

    /// Deletes a category that no transaction references.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unowned category and `Conflict` while
    /// any transaction still references it.
    pub fn delete_category(&self, user_id: UserId, category_id: CategoryId) -> AppResult<()> {
        let mut state = self.store.write()?;

        if state.category(user_id, category_id).is_none() {
            return Err(AppError::NotFound(format!("Category {category_id}")));
        }
        if state
            .transactions
            .iter()
            .any(|t| t.category_id == category_id)
        {
            return Err(AppError::Conflict(
                "Cannot delete category: it is in use by one or more transactions".to_string(),
            ));
        }

        state.categories.retain(|c| c.id != category_id);
        tracing::info!(category_id = %category_id, "deleted category");
        Ok(())
    }

    /// Gets a category owned by the user.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category is absent or owned by someone
    /// else.
    pub fn get_category(&self, user_id: UserId, category_id: CategoryId) -> AppResult<Category> {
        let state = self.store.read()?;
        state
            .category(user_id, category_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {category_id}")))
    }

    /// Lists the user's categories in creation order.
    pub fn list_categories(&self, user_id: UserId) -> AppResult<Vec<Category>> {
        let state = self.store.read()?;
        Ok(state
            .categories
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }
}
