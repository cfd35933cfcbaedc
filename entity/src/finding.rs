use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::FindingSeverity;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vigil_finding")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub audit_id: i32,
    pub severity: FindingSeverity,
    pub notes: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::audit::Entity",
        from = "Column::AuditId",
        to = "super::audit::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Audit,
}

impl Related<super::audit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Audit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
