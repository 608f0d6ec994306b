use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Pocket,
    Pokeball,
    Berry,
    Tm,
    KeyItem,
    Pc,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 6] = [
        ItemCategory::Pocket,
        ItemCategory::Pokeball,
        ItemCategory::Berry,
        ItemCategory::Tm,
        ItemCategory::KeyItem,
        ItemCategory::Pc,
    ];

    pub fn index(self) -> usize {
        match self {
            ItemCategory::Pocket => 0,
            ItemCategory::Pokeball => 1,
            ItemCategory::Berry => 2,
            ItemCategory::Tm => 3,
            ItemCategory::KeyItem => 4,
            ItemCategory::Pc => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemCategory::Pocket => "Items",
            ItemCategory::Pokeball => "Poke Balls",
            ItemCategory::Berry => "Berries",
            ItemCategory::Tm => "TMs",
            ItemCategory::KeyItem => "Key Items",
            ItemCategory::Pc => "PC",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
    pub id: u16,
    pub name: &'static str,
    pub category: ItemCategory,
}

use ItemCategory::{Berry, KeyItem, Pocket, Pokeball, Tm};

#[rustfmt::skip]
const ITEMS: &[ItemInfo] = &[
    ItemInfo { id:  1, name: "Potion",        category: Pocket },
    ItemInfo { id:  2, name: "Super Potion",  category: Pocket },
    ItemInfo { id:  3, name: "Hyper Potion",  category: Pocket },
    ItemInfo { id:  4, name: "Max Potion",    category: Pocket },
    ItemInfo { id:  5, name: "Full Restore",  category: Pocket },
    ItemInfo { id:  6, name: "Antidote",      category: Pocket },
    ItemInfo { id:  7, name: "Awakening",     category: Pocket },
    ItemInfo { id:  8, name: "Paralyze Heal", category: Pocket },
    ItemInfo { id:  9, name: "Revive",        category: Pocket },
    ItemInfo { id: 10, name: "Rare Candy",    category: Pocket },
    ItemInfo { id: 11, name: "Nugget",        category: Pocket },
    ItemInfo { id: 12, name: "Escape Rope",   category: Pocket },
    ItemInfo { id: 13, name: "Repel",         category: Pocket },
    ItemInfo { id: 14, name: "Leftovers",     category: Pocket },
    ItemInfo { id: 20, name: "Poke Ball",     category: Pokeball },
    ItemInfo { id: 21, name: "Great Ball",    category: Pokeball },
    ItemInfo { id: 22, name: "Ultra Ball",    category: Pokeball },
    ItemInfo { id: 23, name: "Master Ball",   category: Pokeball },
    ItemInfo { id: 24, name: "Safari Ball",   category: Pokeball },
    ItemInfo { id: 25, name: "Premier Ball",  category: Pokeball },
    ItemInfo { id: 30, name: "Oran Berry",    category: Berry },
    ItemInfo { id: 31, name: "Sitrus Berry",  category: Berry },
    ItemInfo { id: 32, name: "Pecha Berry",   category: Berry },
    ItemInfo { id: 33, name: "Cheri Berry",   category: Berry },
    ItemInfo { id: 34, name: "Leppa Berry",   category: Berry },
    ItemInfo { id: 40, name: "TM01",          category: Tm },
    ItemInfo { id: 41, name: "TM06",          category: Tm },
    ItemInfo { id: 42, name: "TM13",          category: Tm },
    ItemInfo { id: 43, name: "TM24",          category: Tm },
    ItemInfo { id: 44, name: "TM26",          category: Tm },
    ItemInfo { id: 45, name: "TM29",          category: Tm },
    ItemInfo { id: 50, name: "Bicycle",       category: KeyItem },
    ItemInfo { id: 51, name: "Town Map",      category: KeyItem },
    ItemInfo { id: 52, name: "Old Rod",       category: KeyItem },
    ItemInfo { id: 53, name: "Super Rod",     category: KeyItem },
];

pub fn item_list() -> &'static [ItemInfo] {
    ITEMS
}

pub fn item_by_id(id: u16) -> Option<&'static ItemInfo> {
    ITEMS.iter().find(|i| i.id == id)
}

pub fn item_by_name(name: &str) -> Option<&'static ItemInfo> {
    ITEMS.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

/// Whether `item` may be stored in `category`. The PC stores anything;
/// the bag pockets only take their own kind.
pub fn category_accepts(category: ItemCategory, item: &ItemInfo) -> bool {
    category == ItemCategory::Pc || item.category == category
}

/// Names selectable for `category`, in table order.
pub fn item_names(category: ItemCategory) -> Vec<&'static str> {
    ITEMS
        .iter()
        .filter(|item| category_accepts(category, item))
        .map(|item| item.name)
        .collect()
}

/// Items a creature may hold: anything that is not a key item.
pub fn holdable_items() -> Vec<&'static ItemInfo> {
    ITEMS
        .iter()
        .filter(|item| item.category != ItemCategory::KeyItem)
        .collect()
}
