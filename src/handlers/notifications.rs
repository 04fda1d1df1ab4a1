use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use model::entities::{account, notification, notification::NotificationKind};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::schemas::{ApiResponse, AppState};

/// Notification response model
#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationResponse {
    pub id: i32,
    pub account_id: i32,
    pub message: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<notification::Model> for NotificationResponse {
    fn from(model: notification::Model) -> Self {
        Self {
            id: model.id,
            account_id: model.account_id,
            message: model.message,
            kind: model.kind,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

/// Notification list item with the joined account name
#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct NotificationWithAccount {
    pub id: i32,
    pub account_id: i32,
    pub message: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub account_name: Option<String>,
}

/// Query parameters for filtering the notification list
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListNotificationsQuery {
    /// Restrict to one account
    pub account_id: Option<i32>,
}

/// Get notifications, newest first, optionally filtered by account
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "notifications",
    params(ListNotificationsQuery),
    responses(
        (status = 200, description = "Notifications retrieved successfully", body = ApiResponse<Vec<NotificationWithAccount>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<ApiResponse<Vec<NotificationWithAccount>>>, ApiError> {
    let mut select = notification::Entity::find()
        .select_only()
        .column(notification::Column::Id)
        .column(notification::Column::AccountId)
        .column(notification::Column::Message)
        .column_as(notification::Column::Kind, "kind")
        .column(notification::Column::IsRead)
        .column(notification::Column::CreatedAt)
        .column_as(account::Column::Name, "account_name")
        .join(JoinType::LeftJoin, notification::Relation::Account.def())
        .order_by(notification::Column::CreatedAt, Order::Desc)
        .order_by(notification::Column::Id, Order::Desc);

    if let Some(account_id) = query.account_id {
        select = select.filter(notification::Column::AccountId.eq(account_id));
    }

    let notifications = select
        .into_model::<NotificationWithAccount>()
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse {
        data: notifications,
        message: "Notifications retrieved successfully".to_string(),
        success: true,
    }))
}

/// Mark a notification as read. Idempotent: marking an already-read
/// notification succeeds and leaves it read.
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = "notifications",
    params(
        ("notification_id" = i32, Path, description = "Notification ID"),
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = ApiResponse<NotificationResponse>),
        (status = 404, description = "Notification not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn mark_notification_read(
    Path(notification_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<NotificationResponse>>, ApiError> {
    let existing = notification::Entity::find_by_id(notification_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("notification {notification_id} not found"))
        })?;

    let mut active: notification::ActiveModel = existing.into();
    active.is_read = Set(true);
    let updated = active.update(&state.db).await?;

    info!("Notification {} marked as read", notification_id);
    Ok(Json(ApiResponse {
        data: NotificationResponse::from(updated),
        message: "Notification marked as read".to_string(),
        success: true,
    }))
}
