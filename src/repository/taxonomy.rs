use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::taxonomy::{
        Category as DomainCategory, CategoryTree, SEED_CATEGORIES,
        Subcategory as DomainSubcategory,
    },
    models::taxonomy::{
        Category as DbCategory, Subcategory as DbSubcategory, UpsertCategory, UpsertSubcategory,
    },
    repository::{DieselRepository, RepositoryResult, TaxonomyReader, TaxonomyWriter},
};

impl TaxonomyReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<CategoryTree>> {
        use crate::schema::{categories, subcategories};

        let mut conn = self.conn()?;

        let db_categories = categories::table
            .order(categories::position.asc())
            .load::<DbCategory>(&mut conn)?;

        let db_subcategories = subcategories::table
            .order(subcategories::position.asc())
            .load::<DbSubcategory>(&mut conn)?;

        let mut grouped: HashMap<String, Vec<DomainSubcategory>> = HashMap::new();
        for row in db_subcategories {
            grouped
                .entry(row.category_id.clone())
                .or_default()
                .push(row.into());
        }

        Ok(db_categories
            .into_iter()
            .map(|row| {
                let category: DomainCategory = row.into();
                let subcategories = grouped.remove(&category.id).unwrap_or_default();
                CategoryTree {
                    category,
                    subcategories,
                }
            })
            .collect())
    }
}

impl TaxonomyWriter for DieselRepository {
    fn seed_taxonomy(&self) -> RepositoryResult<usize> {
        use crate::schema::{categories, subcategories};

        let mut conn = self.conn()?;
        let now = chrono::Local::now().naive_utc();

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            for (position, seed) in SEED_CATEGORIES.iter().enumerate() {
                let row = UpsertCategory {
                    id: seed.id,
                    name: seed.name,
                    name_en: seed.name_en,
                    icon: seed.icon,
                    description: Some(seed.description),
                    description_en: Some(seed.description_en),
                    color: seed.color,
                    gradient: seed.gradient,
                    position: position as i32,
                    updated_at: now,
                };

                diesel::insert_into(categories::table)
                    .values(&row)
                    .on_conflict(categories::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)?;

                for (sub_position, sub_seed) in seed.subcategories.iter().enumerate() {
                    let sub_row = UpsertSubcategory {
                        category_id: seed.id,
                        id: sub_seed.id,
                        name: sub_seed.name,
                        name_en: sub_seed.name_en,
                        icon: sub_seed.icon,
                        position: sub_position as i32,
                        updated_at: now,
                    };

                    diesel::insert_into(subcategories::table)
                        .values(&sub_row)
                        .on_conflict((subcategories::category_id, subcategories::id))
                        .do_update()
                        .set(&sub_row)
                        .execute(conn)?;
                }
            }

            Ok(())
        })?;

        Ok(SEED_CATEGORIES.len())
    }
}
