//! Generated taxpayer fixture records.
//!
//! A [`TaxpayerFixture`] bundles the identifiers and contact details a tax
//! integration test usually needs for one taxpayer. The type is plain data
//! so consuming suites can map it onto their own domain types.

use serde::{Deserialize, Serialize};

use crate::names::TaxpayerKind;

/// A generated taxpayer with one obligation and one payment.
///
/// # Example
///
/// ```
/// use tax_fixtures::{TaxpayerFixture, TaxpayerKind};
///
/// let fixture = TaxpayerFixture {
///     pin: "P051234567Q".to_owned(),
///     name: "Grace Mwangi".to_owned(),
///     kind: TaxpayerKind::Individual,
///     phone_number: "+254712345678".to_owned(),
///     email: "taxpayer42@example.com".to_owned(),
///     obligation_id: "OBL007".to_owned(),
///     tax_period: "202406".to_owned(),
///     tcc: "TCC482913".to_owned(),
///     eslip: "ESLIP304918273".to_owned(),
///     amount: 15250.75,
///     payment_date: "2025-06-15".to_owned(),
/// };
///
/// assert!(fixture.is_well_formed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxpayerFixture {
    /// Taxpayer PIN.
    pub pin: String,
    /// Display name matching `kind`.
    pub name: String,
    /// Shape of the taxpayer.
    pub kind: TaxpayerKind,
    /// Mobile number in international format.
    pub phone_number: String,
    /// Contact email address.
    pub email: String,
    /// Obligation the payment applies to.
    pub obligation_id: String,
    /// Tax period in `YYYYMM` form.
    pub tax_period: String,
    /// Tax compliance certificate number.
    pub tcc: String,
    /// E-slip payment reference.
    pub eslip: String,
    /// Amount paid.
    pub amount: f64,
    /// Payment date in `YYYY-MM-DD` form.
    pub payment_date: String,
}

impl TaxpayerFixture {
    /// Returns `true` when every identifier passes its format validator.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        crate::validation::is_valid_pin(&self.pin)
            && crate::validation::is_valid_tcc(&self.tcc)
            && crate::validation::is_valid_eslip(&self.eslip)
    }
}
