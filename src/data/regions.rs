//! Static catalog of the administrative regions present in the dataset.
//!
//! Codes follow the numbering of the `area` column of the input file
//! ("1".."27"); names are the conventional short oblast names.

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

/// The full catalog, ordered by numeric code.
pub const REGIONS: &[Region] = &[
    Region { code: "1", name: "Вінничина" },
    Region { code: "2", name: "Волинь" },
    Region { code: "3", name: "Дніпропетровщина" },
    Region { code: "4", name: "Донеччина" },
    Region { code: "5", name: "Житомирщина" },
    Region { code: "6", name: "Закарпаття" },
    Region { code: "7", name: "Запоріжжя" },
    Region { code: "8", name: "Івано-Франківщина" },
    Region { code: "9", name: "Київщина" },
    Region { code: "10", name: "Кіровоградщина" },
    Region { code: "11", name: "Луганщина" },
    Region { code: "12", name: "Львівщина" },
    Region { code: "13", name: "Миколаївщина" },
    Region { code: "14", name: "Одещина" },
    Region { code: "15", name: "Полтавщина" },
    Region { code: "16", name: "Рівненщина" },
    Region { code: "17", name: "Сумщина" },
    Region { code: "18", name: "Тернопільщина" },
    Region { code: "19", name: "Харківщина" },
    Region { code: "20", name: "Херсонщина" },
    Region { code: "21", name: "Хмельницька" },
    Region { code: "22", name: "Черкащина" },
    Region { code: "23", name: "Чернівецька" },
    Region { code: "24", name: "Чернігівщина" },
    Region { code: "25", name: "Крим" },
    Region { code: "26", name: "Київ" },
    Region { code: "27", name: "Севастополь" },
];

/// Code selected when a session starts or filters are reset.
pub const DEFAULT_REGION: &str = "1";

/// Name for a region code, if the code is in the catalog.
pub fn lookup(code: &str) -> Option<&'static str> {
    REGIONS.iter().find(|r| r.code == code).map(|r| r.name)
}

/// Selectable region codes, in catalog order.
pub fn codes() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|r| r.code)
}

/// Display label for a code.
///
/// Only catalog codes can be selected, so a miss means the state was
/// corrupted. Debug builds panic; release builds log it and show the raw
/// code instead.
pub fn label(code: &str) -> String {
    let name = lookup(code);
    debug_assert!(name.is_some(), "region code {code:?} is not in the catalog");
    match name {
        Some(name) => name.to_string(),
        None => {
            log::error!("region code {code:?} is not in the catalog");
            format!("region {code}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_code_has_a_name() {
        assert_eq!(REGIONS.len(), 27);
        for code in codes() {
            let name = lookup(code).unwrap();
            assert!(!name.is_empty(), "empty name for {code}");
        }
    }

    #[test]
    fn codes_are_one_through_twenty_seven() {
        let got: BTreeSet<String> = codes().map(str::to_string).collect();
        let want: BTreeSet<String> = (1..=27).map(|i| i.to_string()).collect();
        assert_eq!(got, want);
    }

    #[test]
    fn known_names() {
        assert_eq!(lookup("1"), Some("Вінничина"));
        assert_eq!(lookup("26"), Some("Київ"));
        assert_eq!(lookup("27"), Some("Севастополь"));
        assert_eq!(label(DEFAULT_REGION), "Вінничина");
    }

    #[test]
    fn unknown_code_has_no_name() {
        assert_eq!(lookup("28"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not in the catalog")]
    fn labeling_unknown_code_panics_in_debug_builds() {
        label("99");
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn labeling_unknown_code_falls_back_to_raw_code() {
        assert_eq!(label("99"), "region 99");
    }
}
