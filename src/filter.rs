// src/filter.rs
//! Filter engine: category + criterion → matching rows, in dataset order.

use std::collections::HashSet;

use crate::core::sanitize::{contains_ci, locale_cmp, or_na, trimmed_or_na};
use crate::dataset::{FacilityTankRecord, Field};

/// How the user supplies the criterion for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Free text + Search button.
    Search,
    /// Pick one of the values present in the data.
    Dropdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    AiName,
    AiId,
    Address,
    County,
    Owner,
}

impl Category {
    /// Selector order.
    pub const ALL: [Category; 5] = [
        Category::AiName,
        Category::AiId,
        Category::Address,
        Category::County,
        Category::Owner,
    ];

    pub fn field(self) -> Field {
        match self {
            Category::AiName  => Field::AiName,
            Category::AiId    => Field::AiId,
            Category::Address => Field::Address1,
            Category::County  => Field::County,
            Category::Owner   => Field::OwnerName,
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            Category::County | Category::Owner => Mode::Dropdown,
            _ => Mode::Search,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::AiName  => "AI Name (Search)",
            Category::AiId    => "AI ID (Search)",
            Category::Address => "Address (Search)",
            Category::County  => "County (Dropdown)",
            Category::Owner   => "Owner (Dropdown)",
        }
    }

    /// Same key as the column it filters on ("AI_ID", "COUNTY", …).
    pub fn key(self) -> &'static str {
        self.field().key()
    }

    /// Unknown or empty keys mean "no category".
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Indices of the rows matching `criterion` under `category`, ascending.
pub fn filter_indices(
    records: &[FacilityTankRecord],
    category: Option<Category>,
    criterion: &str,
) -> Vec<usize> {
    let Some(category) = category else {
        return Vec::new();
    };
    let field = category.field();

    let keep: Box<dyn Fn(&FacilityTankRecord) -> bool + '_> = match category {
        Category::AiId => {
            Box::new(move |r| r.get(field) == Some(criterion))
        }
        Category::AiName | Category::Address => {
            let needle = criterion.trim().to_lowercase();
            Box::new(move |r| r.get(field).is_some_and(|v| contains_ci(v, &needle)))
        }
        Category::County | Category::Owner => {
            Box::new(move |r| or_na(r.get(field)) == criterion)
        }
    };

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| keep(r))
        .map(|(ix, _)| ix)
        .collect()
}

/// Matching rows by reference, in dataset order.
pub fn filter<'a>(
    records: &'a [FacilityTankRecord],
    category: Option<Category>,
    criterion: &str,
) -> Vec<&'a FacilityTankRecord> {
    filter_indices(records, category, criterion)
        .into_iter()
        .map(|ix| &records[ix])
        .collect()
}

/// Distinct dropdown entries for `category`: trimmed, blank → "N/A",
/// deduplicated, collated. Search categories have no list.
pub fn unique_values(records: &[FacilityTankRecord], category: Option<Category>) -> Vec<String> {
    let Some(category) = category.filter(|c| c.mode() == Mode::Dropdown) else {
        return Vec::new();
    };
    let field = category.field();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = records
        .iter()
        .map(|r| trimmed_or_na(r.get(field)))
        .filter(|v| seen.insert(v))
        .map(String::from)
        .collect();

    out.sort_by(|a, b| locale_cmp(a, b));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, name: &str, county: Option<&str>) -> FacilityTankRecord {
        let mut r = FacilityTankRecord::default();
        r.set(Field::AiId, Some(s!(id)));
        r.set(Field::AiName, Some(s!(name)));
        r.set(Field::County, county.map(String::from));
        r
    }

    #[test]
    fn category_keys_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_key(c.key()), Some(c));
        }
        assert_eq!(Category::from_key(""), None);
        assert_eq!(Category::from_key("TANK_STATUS_CODE"), None);
    }

    #[test]
    fn ai_id_is_not_trimmed() {
        let rows = vec![rec("100", "A", None), rec("1000", "B", None)];
        assert_eq!(filter_indices(&rows, Some(Category::AiId), "100"), vec![0]);
        assert!(filter_indices(&rows, Some(Category::AiId), " 100").is_empty());
    }

    #[test]
    fn dropdown_selection_matches_untrimmed_value() {
        // The list shows "Boone" for " Boone ", but selection compares the raw cell.
        let rows = vec![rec("1", "A", Some(" Boone ")), rec("2", "B", Some("Boone"))];
        assert_eq!(unique_values(&rows, Some(Category::County)), vec!["Boone"]);
        assert_eq!(filter_indices(&rows, Some(Category::County), "Boone"), vec![1]);
    }

    #[test]
    fn blank_values_collapse_to_na() {
        let rows = vec![rec("1", "A", None), rec("2", "B", Some("")), rec("3", "C", Some("  "))];
        assert_eq!(unique_values(&rows, Some(Category::County)), vec!["N/A"]);
        // "  " is not empty, so it does not default on the selection path
        assert_eq!(filter_indices(&rows, Some(Category::County), "N/A"), vec![0, 1]);
    }

    #[test]
    fn no_category_no_rows() {
        let rows = vec![rec("1", "A", None)];
        assert!(filter_indices(&rows, None, "1").is_empty());
        assert!(unique_values(&rows, None).is_empty());
        assert!(unique_values(&rows, Some(Category::AiName)).is_empty());
    }
}
