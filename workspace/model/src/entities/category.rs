use sea_orm::entity::prelude::*;

/// A label for classifying transactions, optionally nested one level under
/// a parent category. Top-level categories have a null `parent_id`.
///
/// The schema does not enforce nesting depth or defend against a category
/// becoming its own ancestor; handlers reject parents that are themselves
/// children, which keeps the tree at depth two in practice.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Self-referencing foreign key for one level of nesting.
    pub parent_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Self-referencing relationship to the parent category.
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transaction,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
