//! Input normalization: catalogue rows and required cuts to inches.

use crate::diagnostics::Diagnostics;
use crate::error::{PlanError, Result};
use crate::model::{Material, NumericInput, StockLength};
use crate::units::{convert, LinearUnit};

/// Normalize the material's standard lengths to inches.
///
/// Malformed rows (unparseable length, unknown or non-linear unit,
/// non-positive after conversion) are skipped with a warning through the
/// diagnostics sink; the call only fails when no usable row remains. The
/// returned list is sorted by descending inch length.
pub fn normalize_catalogue(
    material: &Material,
    diagnostics: &mut dyn Diagnostics,
) -> Result<Vec<StockLength>> {
    if material.standard_lengths.is_empty() {
        return Err(PlanError::EmptyCatalogue {
            material_id: material.id.clone(),
        });
    }

    let mut stock = Vec::with_capacity(material.standard_lengths.len());
    for (index, entry) in material.standard_lengths.iter().enumerate() {
        let row = index + 1;

        let Some(length) = entry.length.as_f64() else {
            diagnostics.warn(&format!(
                "material {}: standard length #{} ('{}') is not numeric, skipping",
                material.id, row, entry.length
            ));
            continue;
        };

        let Some(unit) = LinearUnit::parse(&entry.unit) else {
            diagnostics.warn(&format!(
                "material {}: standard length #{} has non-linear unit '{}', skipping",
                material.id, row, entry.unit
            ));
            continue;
        };

        let length_in_inches = match convert(length, &entry.unit, "in") {
            Ok(value) => value,
            Err(err) => {
                diagnostics.warn(&format!(
                    "material {}: standard length #{} ({} {}): {}, skipping",
                    material.id, row, length, entry.unit, err
                ));
                continue;
            }
        };

        if length_in_inches <= 0.0 {
            diagnostics.warn(&format!(
                "material {}: standard length #{} converts to {:.3}in, skipping",
                material.id, row, length_in_inches
            ));
            continue;
        }

        stock.push(StockLength {
            length,
            unit,
            length_in_inches,
        });
    }

    if stock.is_empty() {
        return Err(PlanError::NoUsableStandardLength {
            material_id: material.id.clone(),
        });
    }

    stock.sort_by(|a, b| b.length_in_inches.total_cmp(&a.length_in_inches));
    Ok(stock)
}

/// Normalize required cut lengths from feet to inches.
///
/// Any non-numeric or non-positive entry fails the whole call; no partial
/// results. The returned list is sorted descending (largest-first) and is
/// never re-sorted afterwards, only consumed from.
pub fn normalize_cuts(required_cuts_ft: &[NumericInput]) -> Result<Vec<f64>> {
    let mut cuts_in = Vec::with_capacity(required_cuts_ft.len());
    for (index, raw) in required_cuts_ft.iter().enumerate() {
        let row = index + 1;

        let Some(value) = raw.as_f64() else {
            return Err(PlanError::InvalidCutLength {
                index: row,
                value: raw.to_string(),
            });
        };
        if value <= 0.0 {
            return Err(PlanError::InvalidCutLength {
                index: row,
                value: raw.to_string(),
            });
        }

        let inches = convert(value, "ft", "in").map_err(|source| PlanError::Conversion {
            context: format!("required cut #{row}"),
            source,
        })?;
        cuts_in.push(inches);
    }

    cuts_in.sort_by(|a, b| b.total_cmp(a));
    Ok(cuts_in)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::model::MaterialCategory;
    use pretty_assertions::assert_eq;

    fn profile() -> Material {
        Material::new("m1", "acme", MaterialCategory::Profile)
    }

    fn assert_approx(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    // ==================== Catalogue tests ====================

    #[test]
    fn test_catalogue_sorted_descending() {
        let material = profile()
            .with_standard_length(6.0, "ft")
            .with_standard_length(4.0, "m")
            .with_standard_length(12.0, "ft");
        let mut sink = RecordingDiagnostics::default();
        let stock = normalize_catalogue(&material, &mut sink).unwrap();
        assert!(sink.warnings.is_empty());
        assert_eq!(stock.len(), 3);
        // 4m ~ 157.48in sorts above 12ft = 144in.
        assert!(stock[0].length_in_inches > stock[1].length_in_inches);
        assert!(stock[1].length_in_inches > stock[2].length_in_inches);
        assert_eq!(stock[1].length, 12.0);
    }

    #[test]
    fn test_catalogue_converts_units_to_inches() {
        let material = profile().with_standard_length(12.0, "ft");
        let mut sink = RecordingDiagnostics::default();
        let stock = normalize_catalogue(&material, &mut sink).unwrap();
        assert!((stock[0].length_in_inches - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_rows_skipped_with_warnings() {
        let material = profile()
            .with_standard_length("garbage", "ft")
            .with_standard_length(5.0, "pcs")
            .with_standard_length(-2.0, "ft")
            .with_standard_length(12.0, "ft");
        let mut sink = RecordingDiagnostics::default();
        let stock = normalize_catalogue(&material, &mut sink).unwrap();
        assert_eq!(stock.len(), 1);
        assert_eq!(sink.warnings.len(), 3);
        assert!(sink.warnings[0].contains("not numeric"));
        assert!(sink.warnings[1].contains("non-linear unit"));
        assert!(sink.warnings[2].contains("skipping"));
    }

    #[test]
    fn test_empty_catalogue_fails() {
        let mut sink = RecordingDiagnostics::default();
        let err = normalize_catalogue(&profile(), &mut sink).unwrap_err();
        assert!(matches!(err, PlanError::EmptyCatalogue { .. }));
    }

    #[test]
    fn test_all_rows_malformed_fails() {
        let material = profile()
            .with_standard_length("x", "ft")
            .with_standard_length(0.0, "ft");
        let mut sink = RecordingDiagnostics::default();
        let err = normalize_catalogue(&material, &mut sink).unwrap_err();
        assert!(matches!(err, PlanError::NoUsableStandardLength { .. }));
        assert_eq!(sink.warnings.len(), 2);
    }

    // ==================== Cut tests ====================

    #[test]
    fn test_cuts_converted_and_sorted_descending() {
        let cuts = normalize_cuts(&[1.9.into(), 5.0.into(), 5.0.into()]).unwrap();
        assert_approx(&cuts, &[60.0, 60.0, 22.8]);
    }

    #[test]
    fn test_cut_accepts_external_shapes() {
        let cuts: Vec<NumericInput> =
            serde_json::from_str(r#"[5, "4.5", {"$numberDecimal": "1.9"}]"#).unwrap();
        let cuts_in = normalize_cuts(&cuts).unwrap();
        assert_approx(&cuts_in, &[60.0, 54.0, 22.8]);
    }

    #[test]
    fn test_non_numeric_cut_is_hard_failure() {
        let err = normalize_cuts(&[5.0.into(), "tall".into()]).unwrap_err();
        match err {
            PlanError::InvalidCutLength { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, "tall");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_positive_cut_is_hard_failure() {
        assert!(matches!(
            normalize_cuts(&[0.0.into()]),
            Err(PlanError::InvalidCutLength { .. })
        ));
        assert!(matches!(
            normalize_cuts(&[(-1.5).into()]),
            Err(PlanError::InvalidCutLength { .. })
        ));
    }

    #[test]
    fn test_empty_cut_list_is_fine() {
        assert!(normalize_cuts(&[]).unwrap().is_empty());
    }
}
