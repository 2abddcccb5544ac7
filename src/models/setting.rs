use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::settings::Setting as DomainSetting;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::settings)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::settings)]
pub struct UpsertSetting<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Setting> for DomainSetting {
    fn from(value: Setting) -> Self {
        Self {
            key: value.key,
            value: value.value,
            updated_at: value.updated_at,
        }
    }
}
