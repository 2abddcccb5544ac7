use diesel::prelude::*;

use crate::{
    domain::settings::Setting as DomainSetting,
    models::setting::{Setting as DbSetting, UpsertSetting},
    repository::{DieselRepository, RepositoryResult, SettingsReader, SettingsWriter},
};

impl SettingsReader for DieselRepository {
    fn get_setting(&self, key: &str) -> RepositoryResult<Option<DomainSetting>> {
        use crate::schema::settings;

        let mut conn = self.conn()?;
        let setting = settings::table
            .filter(settings::key.eq(key))
            .first::<DbSetting>(&mut conn)
            .optional()?;

        Ok(setting.map(Into::into))
    }
}

impl SettingsWriter for DieselRepository {
    fn set_setting(&self, key: &str, value: &str) -> RepositoryResult<DomainSetting> {
        use crate::schema::settings;

        let mut conn = self.conn()?;
        let row = UpsertSetting {
            key,
            value,
            updated_at: chrono::Local::now().naive_utc(),
        };

        let stored = diesel::insert_into(settings::table)
            .values(&row)
            .on_conflict(settings::key)
            .do_update()
            .set(&row)
            .get_result::<DbSetting>(&mut conn)?;

        Ok(stored.into())
    }
}
