use chrono::Utc;
use entity::sea_orm_active_enums::FrequencyUnit;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::ItemModel, TestContext};

impl TestContext {
    pub fn item<'a>(&'a self) -> ItemFixtures<'a> {
        ItemFixtures { context: self }
    }
}

pub struct ItemFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ItemFixtures<'a> {
    /// Insert an item without a description
    ///
    /// # Arguments
    /// - `frequency`: Optional `(value, unit)` audit frequency
    pub async fn insert_item(
        &self,
        project_id: i32,
        name: &str,
        frequency: Option<(i32, FrequencyUnit)>,
    ) -> Result<ItemModel, TestError> {
        let item = entity::item::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(None),
            frequency_value: ActiveValue::Set(frequency.map(|(value, _)| value)),
            frequency_unit: ActiveValue::Set(frequency.map(|(_, unit)| unit)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(item.insert(&self.context.db).await?)
    }
}
