//! Menu items and the free-text list they are parsed from.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Commas plus any whitespace hugging them
static ITEM_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

/// A single wheel label. Never empty, never padded with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Build an item from a raw label, returning `None` when the label is blank.
    pub fn new(label: impl AsRef<str>) -> Option<Self> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Item {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Item {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split comma-delimited text into items, dropping blank entries.
///
/// Order and duplicates are preserved: position defines the slice a label
/// occupies on the wheel.
///
/// # Examples
/// ```
/// use lunch_roulette::parse_items;
///
/// let items = parse_items(" Ramen, ,Pasta ,Ramen,");
/// let labels: Vec<&str> = items.iter().map(|i| i.label()).collect();
/// assert_eq!(labels, ["Ramen", "Pasta", "Ramen"]);
/// ```
pub fn parse_items(raw: &str) -> Vec<Item> {
    ITEM_SEPARATOR_REGEX
        .split(raw)
        .filter_map(Item::new)
        .collect()
}

/// A named, ready-made menu list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub items: &'static str,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        label: "Korean classics",
        items: "Kimchi stew, Spicy pork, Bulgogi, Soft tofu stew, Galbitang, Dumpling hotpot, Dakgalbi, Bibimbap",
    },
    Preset {
        label: "Noodles & snacks",
        items: "Ramen, Udon, Kalguksu, Naengmyeon, Pho, Tteokbokki, Gimbap, Dumplings",
    },
    Preset {
        label: "Western",
        items: "Pasta, Pizza, Risotto, Salad, Cheeseburger, Steak, Sandwich",
    },
    Preset {
        label: "Light",
        items: "Salad, Poke, Sandwich, Rice ball, Yogurt bowl, Soup",
    },
];
