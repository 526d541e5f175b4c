//! Headline metrics over a (filtered) purchase table.

use std::collections::BTreeSet;

use kairos_io::PurchaseRecord;
use serde::Serialize;

/// Metric cards for the purchase overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseSummary {
    /// Sum of extended prices.
    pub total_amount: f64,
    /// Number of purchase rows.
    pub n_orders: usize,
    /// Distinct non-blank suppliers.
    pub n_suppliers: usize,
    /// Distinct non-blank departments.
    pub n_departments: usize,
    /// Distinct non-blank buyers.
    pub n_buyers: usize,
    /// Distinct non-blank ship-to cities.
    pub n_cities: usize,
}

impl PurchaseSummary {
    /// Computes the summary over `records`.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a PurchaseRecord>,
    {
        let mut total_amount = 0.0;
        let mut n_orders = 0;
        let mut suppliers = BTreeSet::new();
        let mut departments = BTreeSet::new();
        let mut buyers = BTreeSet::new();
        let mut cities = BTreeSet::new();

        for r in records {
            total_amount += r.amount();
            n_orders += 1;
            suppliers.extend(r.supplier());
            departments.extend(r.department());
            buyers.extend(r.buyer());
            cities.extend(r.city());
        }

        Self {
            total_amount,
            n_orders,
            n_suppliers: suppliers.len(),
            n_departments: departments.len(),
            n_buyers: buyers.len(),
            n_cities: cities.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_table() {
        let s = PurchaseSummary::from_records(&[]);
        assert_eq!(s.n_orders, 0);
        assert_eq!(s.total_amount, 0.0);
        assert_eq!(s.n_suppliers, 0);
    }

    #[test]
    fn counts_distinct_attributes() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let recs = vec![
            PurchaseRecord::new(d, 1.5).with_supplier("Acme").with_department("IT"),
            PurchaseRecord::new(d, 2.5).with_supplier("Acme").with_department("HR"),
            PurchaseRecord::new(d, 6.0).with_supplier("Globex").with_city("Porto"),
        ];
        let s = PurchaseSummary::from_records(&recs);
        assert_eq!(s.n_orders, 3);
        assert_eq!(s.total_amount, 10.0);
        assert_eq!(s.n_suppliers, 2);
        assert_eq!(s.n_departments, 2);
        assert_eq!(s.n_buyers, 0);
        assert_eq!(s.n_cities, 1);
    }

    #[test]
    fn serializes_field_names() {
        let s = PurchaseSummary::from_records(&[]);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"total_amount\":0.0"));
        assert!(json.contains("\"n_orders\":0"));
    }
}
