//! Rule-based product categorization.
//!
//! Products carry free-text Arabic/English names and descriptions. When an
//! administrator has not set an explicit category pair, the storefront falls
//! back to this classifier: an ordered list of `(predicate, result)` rules
//! evaluated top to bottom, first match wins. The ordering is load-bearing —
//! several token sets overlap (GPU marketing text mentions monitors, case
//! listings mention included fans) and earlier rules deliberately shadow
//! later ones. Callers must treat stored `category_id`/`subcategory_id`
//! values as authoritative and invoke [`classify`] only when they are absent.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Standalone "ram" token, so "program" or "frame" do not match.
    static ref RAM_RE: Regex = Regex::new(r"\bram\b").unwrap();
    /// Standalone "mic" token, so "mechanical" does not match.
    static ref MIC_RE: Regex = Regex::new(r"\bmic\b").unwrap();
    /// Drive capacity such as "512gb", "2 tb", "1 تيرا".
    static ref CAPACITY_RE: Regex = Regex::new(r"\b\d+\s*(gb|tb|جيجا|تيرا)\b").unwrap();
    /// Power supply wattage such as "650w" or "750 watt".
    static ref WATTAGE_RE: Regex = Regex::new(r"\b\d{3,4}\s*w(att)?s?\b").unwrap();
}

/// Textual fields of a product fed into the classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductText<'a> {
    /// Arabic product name.
    pub name: Option<&'a str>,
    /// English product name.
    pub name_en: Option<&'a str>,
    /// Arabic description.
    pub description: Option<&'a str>,
    /// English description.
    pub description_en: Option<&'a str>,
}

/// A category/subcategory pair from the fixed taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category_id: &'static str,
    pub subcategory_id: &'static str,
}

/// A single ordered classification rule.
pub struct Rule {
    /// Stable rule name used in tests and logs.
    pub name: &'static str,
    /// Predicate over the normalized search text.
    pub applies: fn(&str) -> bool,
    /// Pair assigned when the predicate matches.
    pub result: Classification,
}

/// Pair assigned when no rule matches. Kept as-is from the shipped behavior;
/// changing it is a product decision, not a code cleanup.
pub const FALLBACK: Classification = Classification {
    category_id: "pc-components",
    subcategory_id: "processors",
};

const fn pair(category_id: &'static str, subcategory_id: &'static str) -> Classification {
    Classification {
        category_id,
        subcategory_id,
    }
}

/// The ordered rule list. Evaluation is strictly top to bottom and the first
/// matching rule wins; reordering entries changes classification results.
pub static RULES: &[Rule] = &[
    Rule {
        name: "monitor-light-bar",
        applies: is_monitor_light_bar,
        result: pair("monitors", "monitor-accessories"),
    },
    Rule {
        name: "monitor",
        applies: is_monitor,
        result: pair("monitors", "gaming-monitors"),
    },
    Rule {
        name: "motherboard",
        applies: is_motherboard,
        result: pair("pc-components", "motherboards"),
    },
    Rule {
        name: "processor",
        applies: is_processor,
        result: pair("pc-components", "processors"),
    },
    Rule {
        name: "graphics-card",
        applies: is_graphics_card,
        result: pair("pc-components", "graphics-cards"),
    },
    Rule {
        name: "ram",
        applies: is_ram,
        result: pair("pc-components", "ram"),
    },
    Rule {
        name: "storage",
        applies: is_storage,
        result: pair("pc-components", "storage"),
    },
    Rule {
        name: "power-supply",
        applies: is_power_supply,
        result: pair("pc-components", "power-supplies"),
    },
    Rule {
        name: "case",
        applies: has_case_token,
        result: pair("pc-components", "cases"),
    },
    Rule {
        name: "cooling",
        applies: is_cooling,
        result: pair("pc-components", "cooling"),
    },
    Rule {
        name: "keyboard",
        applies: is_keyboard,
        result: pair("peripherals", "keyboards"),
    },
    Rule {
        name: "mouse",
        applies: is_mouse,
        result: pair("peripherals", "mice"),
    },
    Rule {
        name: "headset",
        applies: is_headset,
        result: pair("peripherals", "headsets"),
    },
    Rule {
        name: "mouse-pad",
        applies: has_mouse_pad_token,
        result: pair("peripherals", "mouse-pads"),
    },
    Rule {
        name: "camera",
        applies: is_camera,
        result: pair("peripherals", "cameras"),
    },
    Rule {
        name: "microphone",
        applies: is_microphone,
        result: pair("peripherals", "microphones"),
    },
    Rule {
        name: "chair",
        applies: is_chair,
        result: pair("gaming-setup", "chairs"),
    },
    Rule {
        name: "lighting",
        applies: is_lighting,
        result: pair("gaming-setup", "lighting"),
    },
    Rule {
        name: "controller",
        applies: is_controller,
        result: pair("peripherals", "controllers"),
    },
    Rule {
        name: "stand",
        applies: is_stand,
        result: pair("gaming-setup", "stands"),
    },
    Rule {
        name: "adapter",
        applies: is_adapter,
        result: pair("accessories", "adapters"),
    },
    Rule {
        name: "smart-accessory",
        applies: is_smart_accessory,
        result: pair("accessories", "smart-accessories"),
    },
    Rule {
        name: "ready-build",
        applies: is_ready_build,
        result: pair("ready-builds", "gaming-pcs"),
    },
];

/// Classify a product from its textual fields.
///
/// Total: every input, including empty or garbage text, yields a valid pair
/// from the taxonomy. Falls through to [`FALLBACK`] when nothing matches.
pub fn classify(text: &ProductText<'_>) -> Classification {
    classify_text(&search_text(text))
}

/// Classify an already-normalized search text.
pub fn classify_text(haystack: &str) -> Classification {
    RULES
        .iter()
        .find(|rule| (rule.applies)(haystack))
        .map(|rule| rule.result)
        .unwrap_or(FALLBACK)
}

/// Build the normalized search text: lowercase name (Arabic, falling back to
/// English) concatenated with the lowercase description (same fallback).
pub fn search_text(text: &ProductText<'_>) -> String {
    let name = pick(text.name, text.name_en);
    let description = pick(text.description, text.description_en);

    let mut haystack = name.to_lowercase();
    haystack.push(' ');
    haystack.push_str(&description.to_lowercase());
    haystack
}

fn pick<'a>(primary: Option<&'a str>, secondary: Option<&'a str>) -> &'a str {
    match primary {
        Some(value) if !value.trim().is_empty() => value,
        _ => secondary.unwrap_or(""),
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Monitor/display tokens. The Arabic "شاشة" only counts when it is not part
/// of "كرت شاشة" (graphics card), which embeds the same word.
fn has_monitor_token(haystack: &str) -> bool {
    if contains_any(haystack, &["monitor", "display", "شاشه"]) {
        return true;
    }
    if haystack.contains("شاشة") {
        let stripped = haystack
            .replace("كرت الشاشة", " ")
            .replace("كرت شاشة", " ")
            .replace("كروت الشاشة", " ")
            .replace("كروت شاشة", " ");
        return stripped.contains("شاشة");
    }
    false
}

fn has_gpu_token(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "gpu",
            "graphics card",
            "rtx",
            "gtx",
            "radeon",
            "vga",
            "كرت شاشة",
            "كرت الشاشة",
        ],
    )
}

fn has_case_token(haystack: &str) -> bool {
    contains_any(
        haystack,
        &["case", "chassis", "tower", "صندوق", "هيكل", "كيس"],
    )
}

fn has_ram_token(haystack: &str) -> bool {
    RAM_RE.is_match(haystack)
        || contains_any(haystack, &["memory", "ddr3", "ddr4", "ddr5", "ذاكرة"])
}

/// Explicit drive tokens. Used as the RAM rule's exclusion; capacity patterns
/// alone do not count, otherwise "16GB DDR4" would be routed to storage.
fn has_drive_token(haystack: &str) -> bool {
    contains_any(haystack, &["ssd", "hdd", "nvme", "هارد"])
}

fn has_motherboard_token(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "motherboard",
            "mainboard",
            "mobo",
            "لوحة أم",
            "لوحة ام",
            "اللوحة الأم",
            "اللوحة الام",
            "مذربورد",
        ],
    )
}

fn has_mouse_pad_token(haystack: &str) -> bool {
    contains_any(
        haystack,
        &["mouse pad", "mousepad", "ماوس باد", "قاعدة ماوس"],
    )
}

fn is_monitor_light_bar(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "light bar",
            "lightbar",
            "monitor light",
            "شريط إضاءة",
            "شريط اضاءة",
        ],
    ) && has_monitor_token(haystack)
}

fn is_monitor(haystack: &str) -> bool {
    has_monitor_token(haystack)
        && !has_case_token(haystack)
        && !has_ram_token(haystack)
        && !has_gpu_token(haystack)
}

fn is_motherboard(haystack: &str) -> bool {
    has_motherboard_token(haystack)
}

fn is_processor(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "cpu", "processor", "معالج", "ryzen", "core i3", "core i5", "core i7", "core i9",
        ],
    ) && !has_motherboard_token(haystack)
}

fn is_graphics_card(haystack: &str) -> bool {
    has_gpu_token(haystack) && !has_monitor_token(haystack)
}

fn is_ram(haystack: &str) -> bool {
    has_ram_token(haystack) && !has_drive_token(haystack)
}

fn is_storage(haystack: &str) -> bool {
    has_drive_token(haystack)
        || contains_any(haystack, &["تخزين", "قرص صلب"])
        || CAPACITY_RE.is_match(haystack)
}

fn is_power_supply(haystack: &str) -> bool {
    if contains_any(
        haystack,
        &[
            "power supply",
            "psu",
            "باور سبلاي",
            "مزود طاقة",
            "مزود الطاقة",
        ],
    ) {
        return true;
    }
    if WATTAGE_RE.is_match(haystack) {
        return true;
    }
    // Efficiency tier tags only count alongside an 80 Plus marking.
    haystack.contains("80")
        && contains_any(haystack, &["bronze", "gold", "platinum", "titanium"])
}

fn is_cooling(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "fan", "cooler", "cooling", "liquid", "aio", "radiator", "مروحة", "مراوح", "مبرد",
            "تبريد",
        ],
    ) && !has_case_token(haystack)
}

fn is_keyboard(haystack: &str) -> bool {
    contains_any(haystack, &["keyboard", "كيبورد", "لوحة مفاتيح"])
}

fn is_mouse(haystack: &str) -> bool {
    contains_any(haystack, &["mouse", "ماوس", "فأرة"]) && !has_mouse_pad_token(haystack)
}

fn is_headset(haystack: &str) -> bool {
    contains_any(
        haystack,
        &["headset", "headphone", "earbud", "سماعة", "سماعات"],
    )
}

fn is_camera(haystack: &str) -> bool {
    contains_any(haystack, &["camera", "webcam", "كاميرا"])
}

fn is_microphone(haystack: &str) -> bool {
    MIC_RE.is_match(haystack)
        || contains_any(haystack, &["microphone", "ميكروفون", "مايكروفون", "مايك"])
}

fn is_chair(haystack: &str) -> bool {
    contains_any(haystack, &["chair", "كرسي"])
}

fn is_lighting(haystack: &str) -> bool {
    contains_any(haystack, &["led", "rgb", "light", "إضاءة", "اضاءة"])
        && !has_monitor_token(haystack)
}

fn is_controller(haystack: &str) -> bool {
    contains_any(
        haystack,
        &["controller", "gamepad", "joystick", "يد تحكم", "دراع تحكم"],
    )
}

fn is_stand(haystack: &str) -> bool {
    contains_any(haystack, &["stand", "حامل"])
}

fn is_adapter(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "adapter", "hub", "dongle", "converter", "splitter", "محول", "وصلة", "موزع",
        ],
    )
}

fn is_smart_accessory(haystack: &str) -> bool {
    contains_any(
        haystack,
        &["smart", "smartwatch", "ساعة ذكية", "سوار ذكي", "ذكي"],
    )
}

fn is_ready_build(haystack: &str) -> bool {
    contains_any(
        haystack,
        &[
            "gaming pc",
            "prebuilt",
            "pre-built",
            "pc bundle",
            "full setup",
            "تجميعة",
            "كمبيوتر كامل",
        ],
    )
}
