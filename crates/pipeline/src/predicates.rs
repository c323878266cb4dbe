//! Keep/drop predicates used by the filtering stages.
//!
//! Each function looks at a single record and reads its fields through
//! `Record::field_or_default`, so a missing column or null cell is just
//! empty text that matches nothing.

use crate::config::TargetRegion;
use data_loader::{fields, Record};

/// True if `haystack` contains any of the lowercase `phrases`,
/// ignoring letter case.
pub fn contains_any_phrase(haystack: &str, phrases: &[String]) -> bool {
    if haystack.is_empty() {
        return false;
    }
    let haystack = haystack.to_lowercase();
    phrases.iter().any(|phrase| haystack.contains(phrase.as_str()))
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Closed permanently or temporarily
pub fn is_closed(record: &Record) -> bool {
    record.flag(fields::PERMANENTLY_CLOSED) || record.flag(fields::TEMPORARILY_CLOSED)
}

/// State names the region, or the address carries its abbreviation.
pub fn in_target_region(record: &Record, region: &TargetRegion) -> bool {
    contains_ignore_case(record.field_or_default(fields::STATE), &region.full_name)
        || contains_ignore_case(
            record.field_or_default(fields::ADDRESS),
            &region.abbreviation_token,
        )
}

/// Either category column mentions an excluded phrase
pub fn has_excluded_category(record: &Record, excluded: &[String]) -> bool {
    contains_any_phrase(record.field_or_default(fields::CATEGORIES), excluded)
        || contains_any_phrase(record.field_or_default(fields::CATEGORY_NAME), excluded)
}

pub fn has_excluded_name_keyword(record: &Record, keywords: &[String]) -> bool {
    contains_any_phrase(record.field_or_default(fields::NAME), keywords)
}

/// Name is present and not the empty string
pub fn has_name(record: &Record) -> bool {
    !record.field_or_default(fields::NAME).is_empty()
}

/// At least one way to reach the facility
pub fn has_contact(record: &Record) -> bool {
    record.is_present(fields::ADDRESS) || record.is_present(fields::PHONE)
}
