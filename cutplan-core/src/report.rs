//! Plan report rendering.
//!
//! Produces a deterministic human-readable summary of a consumption plan.
//! Pure string generation; the caller decides where the report goes.

use std::fmt::Write;

use crate::model::{ConsumptionPlan, Material};

/// Render a consumption plan as a text report.
pub fn render_plan(plan: &ConsumptionPlan, material: &Material) -> String {
    let mut output = String::new();

    writeln!(output, "Profile consumption plan").unwrap();
    writeln!(
        output,
        "Material: {} (id {})",
        material.display_name(),
        material.id
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "Pipes from stock: {}", plan.total_pipes_from_stock).unwrap();
    for usage in &plan.pipes_per_standard_length {
        writeln!(
            output,
            "  {} x {} {} ({:.3} in)",
            usage.count, usage.length, usage.unit, usage.length_in_inches
        )
        .unwrap();
    }
    writeln!(output).unwrap();

    if !plan.layouts.is_empty() {
        writeln!(output, "Cutting layout:").unwrap();
        for (index, layout) in plan.layouts.iter().enumerate() {
            let cuts = layout
                .cuts_in
                .iter()
                .map(|cut| format!("{cut:.3}"))
                .collect::<Vec<_>>()
                .join(" + ");
            writeln!(
                output,
                "  Pipe {} ({} {}): cuts {} in, used {:.3} in, leftover {:.3} in",
                index + 1,
                layout.stock.length,
                layout.stock.unit,
                cuts,
                layout.used_in,
                layout.leftover_in
            )
            .unwrap();
        }
        writeln!(output).unwrap();
    }

    writeln!(output, "Total scrap: {:.3} ft", plan.total_scrap_ft).unwrap();
    if plan.usable_offcuts_ft.is_empty() {
        writeln!(output, "Usable offcuts: none").unwrap();
    } else {
        let offcuts = plan
            .usable_offcuts_ft
            .iter()
            .map(|ft| format!("{ft:.3}"))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(output, "Usable offcuts (ft): {offcuts}").unwrap();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaterialCategory, PipeLayout, StockLength, StockUsage};
    use crate::units::LinearUnit;

    fn sample_plan() -> ConsumptionPlan {
        let stock = StockLength {
            length: 12.0,
            unit: LinearUnit::Feet,
            length_in_inches: 144.0,
        };
        ConsumptionPlan {
            total_pipes_from_stock: 1,
            pipes_per_standard_length: vec![StockUsage {
                length: 12.0,
                unit: LinearUnit::Feet,
                length_in_inches: 144.0,
                count: 1,
            }],
            total_scrap_ft: 0.079,
            usable_offcuts_ft: vec![],
            layouts: vec![PipeLayout {
                stock,
                cuts_in: vec![60.0, 60.0, 22.8],
                used_in: 143.05,
                leftover_in: 0.95,
            }],
        }
    }

    #[test]
    fn test_report_contains_purchase_summary() {
        let material =
            Material::new("m1", "acme", MaterialCategory::Profile).with_standard_length(12.0, "ft");
        let report = render_plan(&sample_plan(), &material);
        assert!(report.contains("Pipes from stock: 1"));
        assert!(report.contains("1 x 12 ft (144.000 in)"));
        assert!(report.contains("cuts 60.000 + 60.000 + 22.800 in"));
        assert!(report.contains("Total scrap: 0.079 ft"));
        assert!(report.contains("Usable offcuts: none"));
    }

    #[test]
    fn test_report_lists_offcuts() {
        let mut plan = sample_plan();
        plan.usable_offcuts_ft = vec![3.5, 4.0];
        let material = Material::new("m1", "acme", MaterialCategory::Profile);
        let report = render_plan(&plan, &material);
        assert!(report.contains("Usable offcuts (ft): 3.500, 4.000"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let material = Material::new("m1", "acme", MaterialCategory::Profile);
        let plan = sample_plan();
        assert_eq!(render_plan(&plan, &material), render_plan(&plan, &material));
    }
}
