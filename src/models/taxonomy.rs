use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::taxonomy::{Category as DomainCategory, Subcategory as DomainSubcategory};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub color: String,
    pub gradient: String,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
pub struct UpsertCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub name_en: &'a str,
    pub icon: &'a str,
    pub description: Option<&'a str>,
    pub description_en: Option<&'a str>,
    pub color: &'a str,
    pub gradient: &'a str,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct Subcategory {
    pub category_id: String,
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub description: Option<String>,
    pub description_en: Option<String>,
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::subcategories)]
pub struct UpsertSubcategory<'a> {
    pub category_id: &'a str,
    pub id: &'a str,
    pub name: &'a str,
    pub name_en: &'a str,
    pub icon: &'a str,
    pub position: i32,
    pub updated_at: NaiveDateTime,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            name_en: value.name_en,
            icon: value.icon,
            description: value.description,
            description_en: value.description_en,
            color: value.color,
            gradient: value.gradient,
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl From<Subcategory> for DomainSubcategory {
    fn from(value: Subcategory) -> Self {
        Self {
            id: value.id,
            category_id: value.category_id,
            name: value.name,
            name_en: value.name_en,
            icon: value.icon,
            description: value.description,
            description_en: value.description_en,
            position: value.position,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
