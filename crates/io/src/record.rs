//! Purchase record container.

use chrono::NaiveDate;

/// One row of a purchase export.
///
/// Only the creation date and extended price feed the time-series core;
/// the categorical attributes exist for filtering and summary metrics and
/// are `None` when the export lacks the column or the cell is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRecord {
    date: NaiveDate,
    amount: f64,
    department: Option<String>,
    supplier: Option<String>,
    buyer: Option<String>,
    city: Option<String>,
}

impl PurchaseRecord {
    /// Creates a record with no categorical attributes.
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            date,
            amount,
            department: None,
            supplier: None,
            buyer: None,
            city: None,
        }
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Sets the supplier name.
    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    /// Sets the buyer name.
    pub fn with_buyer(mut self, buyer: impl Into<String>) -> Self {
        self.buyer = Some(buyer.into());
        self
    }

    /// Sets the ship-to city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Returns the creation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the extended price.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the department, if known.
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Returns the supplier name, if known.
    pub fn supplier(&self) -> Option<&str> {
        self.supplier.as_deref()
    }

    /// Returns the buyer name, if known.
    pub fn buyer(&self) -> Option<&str> {
        self.buyer.as_deref()
    }

    /// Returns the ship-to city, if known.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}
