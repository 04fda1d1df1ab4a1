use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use compute::category_tree;
use model::entities::{category, transaction};
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};

/// Request structure for creating a new category
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// The name of the category
    pub name: String,
    /// Optional parent category ID; the parent must itself be top-level
    pub parent_id: Option<i32>,
}

/// Request structure for updating a category (full replace)
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// The name of the category
    pub name: String,
    /// Optional parent category ID; null moves the category to top level
    pub parent_id: Option<i32>,
}

/// Response structure for category operations
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            parent_id: model.parent_id,
        }
    }
}

/// A top-level category with its direct children
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryTreeNode {
    pub id: i32,
    pub name: String,
    pub children: Vec<CategoryResponse>,
}

/// Checks that a requested parent exists and is itself top-level. Together
/// with the update-path checks (no self-parenting, no reparenting a
/// category that has children) this keeps the tree at exactly two levels.
async fn validate_parent<C: ConnectionTrait>(db: &C, parent_id: i32) -> Result<(), ApiError> {
    let parent = category::Entity::find_by_id(parent_id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("parent category {parent_id} not found")))?;

    if parent.parent_id.is_some() {
        return Err(ApiError::Validation(format!(
            "category {parent_id} is itself a child and cannot be a parent"
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::Validation(
            "category name must not be empty".into(),
        ));
    }
    Ok(())
}

/// Get all categories as a flat list, parents grouped with their children
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryResponse>>>, ApiError> {
    // ORDER BY COALESCE(parent_id, id), name keeps each parent adjacent to
    // its children in the flat list.
    let categories = category::Entity::find()
        .order_by(
            SimpleExpr::FunctionCall(Func::coalesce([
                Expr::col(category::Column::ParentId).into(),
                Expr::col(category::Column::Id).into(),
            ])),
            Order::Asc,
        )
        .order_by_asc(category::Column::Name)
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse {
        data: categories.into_iter().map(CategoryResponse::from).collect(),
        message: "Categories retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get categories as a two-level tree
#[utoipa::path(
    get,
    path = "/api/categories/tree",
    tag = "categories",
    responses(
        (status = 200, description = "Category tree retrieved successfully", body = ApiResponse<Vec<CategoryTreeNode>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_category_tree(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryTreeNode>>>, ApiError> {
    let categories = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(&state.db)
        .await?;

    let tree = category_tree(categories)
        .into_iter()
        .map(|node| CategoryTreeNode {
            id: node.category.id,
            name: node.category.name,
            children: node.children.into_iter().map(CategoryResponse::from).collect(),
        })
        .collect();

    Ok(Json(ApiResponse {
        data: tree,
        message: "Category tree retrieved successfully".to_string(),
        success: true,
    }))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Parent category not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryResponse>>), ApiError> {
    validate_name(&request.name)?;
    if let Some(parent_id) = request.parent_id {
        validate_parent(&state.db, parent_id).await?;
    }

    let created = category::ActiveModel {
        name: Set(request.name),
        parent_id: Set(request.parent_id),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    info!("Category created with ID: {}, name: {}", created.id, created.name);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            data: CategoryResponse::from(created),
            message: "Category created successfully".to_string(),
            success: true,
        }),
    ))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/categories/{category_id}",
    tag = "categories",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated successfully", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid request", body = crate::schemas::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_category(
    Path(category_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    validate_name(&request.name)?;
    if let Some(parent_id) = request.parent_id {
        if parent_id == category_id {
            return Err(ApiError::Validation(format!(
                "category {category_id} cannot be its own parent"
            )));
        }
        validate_parent(&state.db, parent_id).await?;

        // A category with children is a parent; nesting it would push its
        // children to depth three.
        let children = category::Entity::find()
            .filter(category::Column::ParentId.eq(category_id))
            .count(&state.db)
            .await?;
        if children > 0 {
            return Err(ApiError::Validation(format!(
                "category {category_id} has {children} child categories and cannot be nested"
            )));
        }
    }

    let existing = category::Entity::find_by_id(category_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {category_id} not found")))?;

    let mut active: category::ActiveModel = existing.into();
    active.name = Set(request.name);
    active.parent_id = Set(request.parent_id);
    let updated = active.update(&state.db).await?;

    info!("Category {} updated", category_id);
    Ok(Json(ApiResponse {
        data: CategoryResponse::from(updated),
        message: "Category updated successfully".to_string(),
        success: true,
    }))
}

/// Delete a category and all of its transactions in one atomic unit
#[utoipa::path(
    delete,
    path = "/api/categories/{category_id}",
    tag = "categories",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
    ),
    responses(
        (status = 200, description = "Category and its transactions deleted", body = ApiResponse<String>),
        (status = 404, description = "Category not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_category(
    Path(category_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    // The cascade is an explicit transactional delete: either the category
    // and every one of its transactions go, or none do.
    let txn = state.db.begin().await?;

    category::Entity::find_by_id(category_id)
        .one(&txn)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category {category_id} not found")))?;

    let removed = transaction::Entity::delete_many()
        .filter(transaction::Column::CategoryId.eq(category_id))
        .exec(&txn)
        .await?;
    debug!(
        "Deleting category {} removes {} transactions",
        category_id, removed.rows_affected
    );

    category::Entity::delete_by_id(category_id).exec(&txn).await?;
    txn.commit().await?;

    info!(
        "Category {} deleted along with {} transactions",
        category_id, removed.rows_affected
    );
    Ok(Json(ApiResponse {
        data: format!(
            "Category {category_id} and {} transactions deleted",
            removed.rows_affected
        ),
        message: "Category deleted successfully".to_string(),
        success: true,
    }))
}
