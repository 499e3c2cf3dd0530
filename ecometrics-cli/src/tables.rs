use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use ecometrics_analytics::{
    comparison::{Comparison, PeriodStatistics},
    emissions::trees_equivalent,
    mix::{MixBasis, MixEntry},
    ratios::{Trend, energy_intensity, load_factor, utilization_rate},
    sample::{Entity, Field, Sample},
    statistics::StatisticalSummary,
};
use ecometrics_quantities::{
    cost::Euros,
    emissions::TonnesCo2,
    energy::KilowattHours,
    ratio::Percentage,
};
use itertools::Itertools;

use crate::fmt::FormattedVariation;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn field_label(field: &Field) -> String {
    match field {
        Field::TotalPower => "Total power, kW".to_owned(),
        Field::Consumption => "Consumption, kWh".to_owned(),
        Field::Source(id) => format!("Source `{id}`"),
    }
}

pub fn build_summary_table(field: &Field, summary: &StatisticalSummary) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::from(field_label(field)).add_attribute(Attribute::Bold),
            Cell::from("Total"),
            Cell::from("Average"),
            Cell::from("Median"),
            Cell::from("Min"),
            Cell::from("Max"),
            Cell::from("Std. dev."),
        ])
        .add_row(vec![
            Cell::from(summary.n_samples).add_attribute(Attribute::Dim),
            Cell::from(format!("{:.2}", summary.total)).set_alignment(CellAlignment::Right),
            Cell::from(format!("{:.2}", summary.average))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::from(format!("{:.2}", summary.median)).set_alignment(CellAlignment::Right),
            Cell::from(format!("{:.2}", summary.min)).set_alignment(CellAlignment::Right),
            Cell::from(format!("{:.2}", summary.max)).set_alignment(CellAlignment::Right),
            Cell::from(format!("{:.2}", summary.standard_deviation))
                .set_alignment(CellAlignment::Right),
        ]);
    table
}

/// Totals over the window, with the ratios the entity metadata allows.
pub fn build_period_table(entity: &Entity, statistics: &PeriodStatistics) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::from(&entity.name).add_attribute(Attribute::Bold),
        Cell::from(entity.kind).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::from("Consumption"),
        Cell::from(format!("{:.1}", statistics.total_consumption)),
    ]);
    table.add_row(vec![
        Cell::from("Cost"),
        Cell::from(format!("{:.2}", statistics.total_cost)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::from("Unit cost"),
        Cell::from(format!("{:.4}", statistics.unit_cost())).add_attribute(Attribute::Dim),
    ]);
    table.add_row(vec![
        Cell::from("Emissions"),
        Cell::from(format!("{:.3}", TonnesCo2::from(statistics.total_co2))),
    ]);
    table.add_row(vec![
        Cell::from("Trees to absorb in a year"),
        Cell::from(trees_equivalent(statistics.total_co2)).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::from("Average power"),
        Cell::from(format!("{:.1}", statistics.average_power())),
    ]);
    table.add_row(vec![
        Cell::from("Peak power"),
        Cell::from(format!("{:.1}", statistics.peak_power())),
    ]);
    table.add_row(vec![
        Cell::from("Load factor"),
        Cell::from(format!(
            "{:.1}",
            Percentage::from_ratio(load_factor(statistics.average_power(), statistics.peak_power()))
        )),
    ]);
    if let Some(rated_power) = entity.rated_power {
        table.add_row(vec![
            Cell::from("Utilization"),
            Cell::from(format!(
                "{:.1}",
                Percentage::from_ratio(utilization_rate(statistics.average_power(), rated_power))
            )),
        ]);
    }
    if let Some(area) = entity.area {
        table.add_row(vec![
            Cell::from("Energy intensity"),
            Cell::from(format!(
                "{:.2} kWh/m²",
                energy_intensity(statistics.total_consumption, area.0)
            )),
        ]);
    }
    table
}

pub fn build_peaks_table(peaks: &[&Sample]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Time", "Power", "Consumption", "Sources"]);
    for sample in peaks {
        table.add_row(vec![
            Cell::new(sample.timestamp.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(sample.timestamp.format("%H:%M")),
            Cell::new(format!("{:.1}", sample.total_power))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", sample.energy())).set_alignment(CellAlignment::Right),
            Cell::new(
                sample.sources.iter().map(|(id, amount)| format!("{id}: {amount:.1}")).join(", "),
            )
            .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_mix_table(mix: &[MixEntry], basis: MixBasis) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Source", "Consumption", "Unit", "Share"]);
    for entry in mix {
        let unit = match basis {
            MixBasis::Native => entry.source.unit.to_string(),
            MixBasis::KilowattHourEquivalent => KilowattHours::UNIT.to_owned(),
        };
        table.add_row(vec![
            Cell::new(&entry.source.name),
            Cell::new(format!("{:.1}", entry.consumption)).set_alignment(CellAlignment::Right),
            Cell::new(unit).add_attribute(Attribute::Dim),
            Cell::new(format!("{:.1}", entry.percentage))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

fn variation_cell(variation: Percentage) -> Cell {
    let variation = FormattedVariation(variation);
    let color = match variation.trend() {
        Trend::Increase => Color::Red,
        Trend::Decrease => Color::Green,
        Trend::Stable => Color::DarkGrey,
    };
    Cell::new(variation).set_alignment(CellAlignment::Right).fg(color)
}

pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let Comparison { current, baseline, variations, differences } = comparison;
    let mut table = new_table();
    table.set_header(vec![
        Cell::from(""),
        Cell::from(format!("Since {}", baseline.range.start.format("%b %d %H:%M")))
            .add_attribute(Attribute::Dim),
        Cell::from(format!("Since {}", current.range.start.format("%b %d %H:%M"))),
        Cell::from("Difference"),
        Cell::from("Variation"),
    ]);
    table.add_row(vec![
        Cell::new("Consumption"),
        Cell::new(format!("{:.1}", baseline.total_consumption)).add_attribute(Attribute::Dim),
        Cell::new(format!("{:.1}", current.total_consumption)),
        Cell::new(format!("{:+.1}", differences.consumption)),
        variation_cell(variations.consumption),
    ]);
    table.add_row(vec![
        Cell::new("Cost"),
        Cell::new(format!("{:.2}", baseline.total_cost)).add_attribute(Attribute::Dim),
        Cell::new(format!("{:.2}", current.total_cost)),
        Cell::new(format!("{:+.2}", differences.cost)),
        variation_cell(variations.cost),
    ]);
    table.add_row(vec![
        Cell::new("Emissions"),
        Cell::new(format!("{:.1}", baseline.total_co2)).add_attribute(Attribute::Dim),
        Cell::new(format!("{:.1}", current.total_co2)),
        Cell::new(format!("{:+.1}", differences.co2)),
        variation_cell(variations.co2),
    ]);
    table
}

pub fn build_projection_table(
    daily: KilowattHours,
    monthly: KilowattHours,
    days_in_month: u32,
    monthly_cost: Option<Euros>,
) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::from("Day"),
            Cell::from(format!("Month ({days_in_month} days)")).add_attribute(Attribute::Bold),
            Cell::from("Monthly cost"),
        ])
        .add_row(vec![
            Cell::from(format!("{daily:.1}")),
            Cell::from(format!("{monthly:.1}")).add_attribute(Attribute::Bold),
            monthly_cost.map_or_else(
                || Cell::from("n/a").add_attribute(Attribute::Dim),
                |cost| Cell::from(format!("{cost:.2}")),
            ),
        ]);
    table
}
