//! Overall extraction confidence scoring.

use crate::models::document::{DateDetails, ProductDetails, VendorDetails};

/// Ratio of filled fields to total fields across vendor (6), product
/// (7) and dates (5). Every field counts equally.
pub fn calculate_confidence(
    vendor: &VendorDetails,
    product: &ProductDetails,
    dates: &DateDetails,
) -> f64 {
    let filled = vendor.filled_field_count()
        + product.filled_field_count()
        + dates.filled_field_count();
    let total =
        VendorDetails::FIELD_COUNT + ProductDetails::FIELD_COUNT + DateDetails::FIELD_COUNT;

    if total == 0 {
        return 0.0;
    }

    filled as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_is_zero() {
        let confidence = calculate_confidence(
            &VendorDetails::default(),
            &ProductDetails::default(),
            &DateDetails::default(),
        );
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_ratio_over_eighteen_fields() {
        let vendor = VendorDetails {
            name: Some("Acme Traders".into()),
            gstin: Some("27AAPFU0939F1ZV".into()),
            ..Default::default()
        };
        let dates = DateDetails {
            purchase_date: Some("15/01/2024".into()),
            ..Default::default()
        };

        let confidence = calculate_confidence(&vendor, &ProductDetails::default(), &dates);
        assert!((confidence - 3.0 / 18.0).abs() < f64::EPSILON);
    }
}
