//! The store taxonomy.
//!
//! Request-serving code reads categories from the database; the static list
//! here is seed data only, applied idempotently at startup (see
//! `repository::taxonomy`). Administrators can rename or extend entries, but
//! the classifier's output vocabulary is fixed to the identifiers below.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Database-backed category as served to the frontend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    /// Stable string identifier, e.g. `pc-components`.
    pub id: String,
    /// Arabic display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Icon reference used by the frontend.
    pub icon: String,
    /// Optional Arabic description.
    pub description: Option<String>,
    /// Optional English description.
    pub description_en: Option<String>,
    /// Accent color, presentation only.
    pub color: String,
    /// Gradient classes, presentation only.
    pub gradient: String,
    /// Display ordering within the catalog.
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database-backed subcategory belonging to one category.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subcategory {
    /// Identifier unique within the parent category.
    pub id: String,
    /// Parent category identifier.
    pub category_id: String,
    /// Arabic display name.
    pub name: String,
    /// English display name.
    pub name_en: String,
    /// Icon reference used by the frontend.
    pub icon: String,
    /// Optional Arabic description.
    pub description: Option<String>,
    /// Optional English description.
    pub description_en: Option<String>,
    /// Display ordering within the parent category.
    pub position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A category together with its subcategories, as returned by the API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: Category,
    pub subcategories: Vec<Subcategory>,
}

/// Seed record for one subcategory.
#[derive(Debug, Clone, Copy)]
pub struct SeedSubcategory {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
}

/// Seed record for one category and its ordered subcategories.
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub name_en: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub description_en: &'static str,
    pub color: &'static str,
    pub gradient: &'static str,
    pub subcategories: &'static [SeedSubcategory],
}

const fn sub(
    id: &'static str,
    name: &'static str,
    name_en: &'static str,
    icon: &'static str,
) -> SeedSubcategory {
    SeedSubcategory {
        id,
        name,
        name_en,
        icon,
    }
}

/// The full seed taxonomy in display order.
pub static SEED_CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        id: "pc-components",
        name: "قطع الكمبيوتر",
        name_en: "PC Components",
        icon: "cpu",
        description: "معالجات، لوحات أم، كروت شاشة وكل قطع التجميع",
        description_en: "Processors, motherboards, graphics cards and everything for your build",
        color: "#6366f1",
        gradient: "from-indigo-500 to-purple-600",
        subcategories: &[
            sub("processors", "المعالجات", "Processors", "cpu"),
            sub("motherboards", "اللوحات الأم", "Motherboards", "circuit-board"),
            sub("graphics-cards", "كروت الشاشة", "Graphics Cards", "gpu"),
            sub("ram", "الذواكر", "Memory", "memory-stick"),
            sub("storage", "وحدات التخزين", "Storage", "hard-drive"),
            sub("power-supplies", "مزودات الطاقة", "Power Supplies", "plug-zap"),
            sub("cases", "الصناديق", "Cases", "box"),
            sub("cooling", "التبريد", "Cooling", "fan"),
        ],
    },
    SeedCategory {
        id: "monitors",
        name: "الشاشات",
        name_en: "Monitors",
        icon: "monitor",
        description: "شاشات قيمنج وملحقاتها",
        description_en: "Gaming monitors and their accessories",
        color: "#0ea5e9",
        gradient: "from-sky-500 to-cyan-500",
        subcategories: &[
            sub("gaming-monitors", "شاشات قيمنج", "Gaming Monitors", "monitor"),
            sub(
                "monitor-accessories",
                "ملحقات الشاشات",
                "Monitor Accessories",
                "lamp-desk",
            ),
        ],
    },
    SeedCategory {
        id: "peripherals",
        name: "الملحقات",
        name_en: "Peripherals",
        icon: "keyboard",
        description: "كيبوردات، ماوسات، سماعات وكل ملحقات القيمنج",
        description_en: "Keyboards, mice, headsets and everything around them",
        color: "#f59e0b",
        gradient: "from-amber-500 to-orange-600",
        subcategories: &[
            sub("keyboards", "الكيبوردات", "Keyboards", "keyboard"),
            sub("mice", "الماوسات", "Mice", "mouse"),
            sub("headsets", "السماعات", "Headsets", "headphones"),
            sub("mouse-pads", "قواعد الماوس", "Mouse Pads", "square"),
            sub("cameras", "الكاميرات", "Cameras", "webcam"),
            sub("microphones", "الميكروفونات", "Microphones", "mic"),
            sub("controllers", "أيادي التحكم", "Controllers", "gamepad-2"),
        ],
    },
    SeedCategory {
        id: "gaming-setup",
        name: "تجهيزات القيمنج",
        name_en: "Gaming Setup",
        icon: "armchair",
        description: "كراسي، إضاءة وحوامل لتجهيز ركن القيمنج",
        description_en: "Chairs, lighting and stands for the battle station",
        color: "#ec4899",
        gradient: "from-pink-500 to-rose-600",
        subcategories: &[
            sub("chairs", "الكراسي", "Chairs", "armchair"),
            sub("lighting", "الإضاءة", "Lighting", "lightbulb"),
            sub("stands", "الحوامل", "Stands", "monitor-up"),
        ],
    },
    SeedCategory {
        id: "accessories",
        name: "الإكسسوارات",
        name_en: "Accessories",
        icon: "cable",
        description: "محولات، وصلات وإكسسوارات ذكية",
        description_en: "Adapters, hubs and smart accessories",
        color: "#10b981",
        gradient: "from-emerald-500 to-teal-600",
        subcategories: &[
            sub("adapters", "المحولات والوصلات", "Adapters & Hubs", "cable"),
            sub(
                "smart-accessories",
                "الإكسسوارات الذكية",
                "Smart Accessories",
                "watch",
            ),
        ],
    },
    SeedCategory {
        id: "ready-builds",
        name: "التجميعات الجاهزة",
        name_en: "Ready Builds",
        icon: "pc-case",
        description: "تجميعات قيمنج جاهزة للتشغيل",
        description_en: "Plug-and-play gaming PC builds",
        color: "#ef4444",
        gradient: "from-red-500 to-orange-500",
        subcategories: &[sub("gaming-pcs", "تجميعات قيمنج", "Gaming PCs", "pc-case")],
    },
];

/// Whether a `(category, subcategory)` pair exists in the seed taxonomy.
pub fn seed_pair_exists(category_id: &str, subcategory_id: &str) -> bool {
    SEED_CATEGORIES.iter().any(|category| {
        category.id == category_id
            && category
                .subcategories
                .iter()
                .any(|subcategory| subcategory.id == subcategory_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::{FALLBACK, RULES};

    #[test]
    fn subcategory_ids_are_unique_within_their_parent() {
        for category in SEED_CATEGORIES {
            let mut ids: Vec<&str> = category.subcategories.iter().map(|s| s.id).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(before, ids.len(), "duplicate id in {}", category.id);
        }
    }

    #[test]
    fn category_ids_are_unique() {
        let mut ids: Vec<&str> = SEED_CATEGORIES.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn classifier_vocabulary_is_covered_by_the_taxonomy() {
        for rule in RULES {
            assert!(
                seed_pair_exists(rule.result.category_id, rule.result.subcategory_id),
                "rule `{}` targets unknown pair {}/{}",
                rule.name,
                rule.result.category_id,
                rule.result.subcategory_id,
            );
        }
        assert!(seed_pair_exists(
            FALLBACK.category_id,
            FALLBACK.subcategory_id
        ));
    }
}
