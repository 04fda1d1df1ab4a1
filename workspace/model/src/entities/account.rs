use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The kind of money-holding bucket an account represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[sea_orm(string_value = "bank")]
    Bank,
    #[sea_orm(string_value = "mobile_money")]
    MobileMoney,
    #[sea_orm(string_value = "cash")]
    Cash,
}

/// A named money-holding bucket with an optional monthly spending limit.
///
/// Balance and month-to-date spending are derived from the transaction
/// history at read time and never stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: AccountType,
    /// Monthly expense ceiling used by the limit notification rule.
    /// `None` means the account is unlimited.
    #[sea_orm(column_type = "Decimal(Some((12, 2)))", nullable)]
    pub spending_limit: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::SqliteQueryBuilder;
    use sea_orm::{Database, DatabaseConnection, DbBackend, EntityTrait, Schema, Set, Statement};

    async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let schema = Schema::new(DbBackend::Sqlite);
        let stmt = schema.create_table_from_entity(Entity);
        let statement =
            Statement::from_string(DbBackend::Sqlite, stmt.to_string(SqliteQueryBuilder));
        db.execute(statement).await.unwrap();

        db
    }

    #[tokio::test]
    async fn test_account_type_round_trips_through_storage() {
        let db = setup_test_db().await;

        for (kind, limit) in [
            (AccountType::Bank, Some(Decimal::from(20000))),
            (AccountType::MobileMoney, Some(Decimal::from(15000))),
            (AccountType::Cash, None),
        ] {
            let created = ActiveModel {
                name: Set(format!("{kind:?}")),
                kind: Set(kind),
                spending_limit: Set(limit),
                ..Default::default()
            }
            .insert(&db)
            .await
            .unwrap();

            let fetched = Entity::find_by_id(created.id).one(&db).await.unwrap().unwrap();
            assert_eq!(fetched.kind, kind);
            assert_eq!(fetched.spending_limit, limit);
        }
    }
}
