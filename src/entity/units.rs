use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "units")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub unit_number: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub storage_slot_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::storage_slots::Entity",
        from = "Column::StorageSlotId",
        to = "super::storage_slots::Column::Id",
        on_delete = "Cascade"
    )]
    StorageSlots,
}

impl Related<super::storage_slots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
