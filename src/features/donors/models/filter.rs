use sqlx::{Postgres, QueryBuilder};

use crate::features::blood_groups::BloodGroup;
use crate::features::donors::models::Donor;

/// A single typed condition on a donor record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorPredicate {
    /// Exact blood group equality (no ABO/Rh compatibility expansion)
    BloodGroupIs(BloodGroup),
    /// Case-insensitive substring of the free-text address
    AddressContains(String),
    AvailabilityIs(bool),
}

impl DonorPredicate {
    pub fn matches(&self, donor: &Donor) -> bool {
        match self {
            DonorPredicate::BloodGroupIs(group) => donor.blood_group == *group,
            DonorPredicate::AddressContains(needle) => donor
                .address
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            DonorPredicate::AvailabilityIs(available) => donor.is_available == *available,
        }
    }

    fn push_sql(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        match self {
            DonorPredicate::BloodGroupIs(group) => {
                qb.push("blood_group_id = ").push_bind(*group);
            }
            DonorPredicate::AddressContains(needle) => {
                qb.push("address ILIKE ")
                    .push_bind(contains_pattern(needle))
                    .push(" ESCAPE '\\'");
            }
            DonorPredicate::AvailabilityIs(available) => {
                qb.push("is_available = ").push_bind(*available);
            }
        }
    }
}

/// Conjunction of donor predicates. An empty filter matches every donor.
///
/// The same filter is evaluated in memory with [`DonorFilter::matches`] and
/// rendered as a parameterized `WHERE` clause with [`DonorFilter::push_where`];
/// user input only ever reaches SQL as a bound parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorFilter {
    predicates: Vec<DonorPredicate>,
}

impl DonorFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: DonorPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// `None` is a wildcard.
    pub fn blood_group(self, group: Option<BloodGroup>) -> Self {
        match group {
            Some(group) => self.with(DonorPredicate::BloodGroupIs(group)),
            None => self,
        }
    }

    /// `None` and blank strings are wildcards.
    pub fn location(self, location: Option<&str>) -> Self {
        match location.map(str::trim).filter(|l| !l.is_empty()) {
            Some(location) => self.with(DonorPredicate::AddressContains(location.to_string())),
            None => self,
        }
    }

    pub fn available(self, available: bool) -> Self {
        self.with(DonorPredicate::AvailabilityIs(available))
    }

    pub fn matches(&self, donor: &Donor) -> bool {
        self.predicates.iter().all(|p| p.matches(donor))
    }

    pub fn push_where(&self, qb: &mut QueryBuilder<'_, Postgres>) {
        for (i, predicate) in self.predicates.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            predicate.push_sql(qb);
        }
    }
}

/// `%needle%` with LIKE metacharacters escaped so they match literally.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn donor(group: BloodGroup, address: &str, available: bool) -> Donor {
        Donor {
            id: Uuid::now_v7(),
            fullname: "Test Donor".to_string(),
            mobileno: "5551234567".to_string(),
            emailid: None,
            age: 30,
            gender: "female".to_string(),
            blood_group: group,
            address: address.to_string(),
            is_available: available,
            last_donation_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = DonorFilter::new().blood_group(None).location(None);
        assert_eq!(filter, DonorFilter::new());
        assert!(filter.matches(&donor(BloodGroup::ANegative, "Anywhere", false)));
    }

    #[test]
    fn test_blank_location_is_wildcard() {
        let filter = DonorFilter::new().location(Some("   "));
        assert_eq!(filter, DonorFilter::new());
    }

    #[test]
    fn test_blood_group_is_exact_match() {
        let filter = DonorFilter::new().blood_group(Some(BloodGroup::OPositive));
        assert!(filter.matches(&donor(BloodGroup::OPositive, "Queens", true)));
        assert!(!filter.matches(&donor(BloodGroup::ONegative, "Queens", true)));
        assert!(!filter.matches(&donor(BloodGroup::APositive, "Queens", true)));
    }

    #[test]
    fn test_location_is_case_insensitive_substring() {
        let filter = DonorFilter::new().location(Some("brooklyn"));
        assert!(filter.matches(&donor(BloodGroup::OPositive, "123 Brooklyn Ave", true)));
        assert!(!filter.matches(&donor(BloodGroup::OPositive, "Manhattan, NY", true)));
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let filter = DonorFilter::new()
            .blood_group(Some(BloodGroup::BPositive))
            .location(Some("ave"));
        assert!(filter.matches(&donor(BloodGroup::BPositive, "5th Ave", true)));
        assert!(!filter.matches(&donor(BloodGroup::BPositive, "Main St", true)));
        assert!(!filter.matches(&donor(BloodGroup::BNegative, "5th Ave", true)));
    }

    #[test]
    fn test_sql_uses_bound_parameters_only() {
        let filter = DonorFilter::new()
            .blood_group(Some(BloodGroup::OPositive))
            .location(Some("'; DROP TABLE donors; --"))
            .available(true);

        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM donors");
        filter.push_where(&mut qb);

        assert_eq!(
            qb.sql(),
            "SELECT * FROM donors WHERE blood_group_id = $1 AND address ILIKE $2 ESCAPE '\\' AND is_available = $3"
        );
        assert!(!qb.sql().contains("DROP"));
    }

    #[test]
    fn test_empty_filter_emits_no_where_clause() {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT * FROM donors");
        DonorFilter::new().push_where(&mut qb);
        assert_eq!(qb.sql(), "SELECT * FROM donors");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("brooklyn"), "%brooklyn%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
