use super::DataCommands;
use crate::catalog;
use crate::error::Result;
use crate::ui;
use std::path::Path;

/// Inspect the reference data directory.
pub fn run_data(command: &DataCommands, data_dir: &Path) -> Result<()> {
    match command {
        DataCommands::Check => check(data_dir),
        DataCommands::Path => {
            println!("{}", data_dir.display());
            Ok(())
        }
    }
}

fn check(dir: &Path) -> Result<()> {
    let (catalog, report) = catalog::load(dir)?;

    ui::print_info(&format!("Data directory: {}", dir.display()));
    ui::print_blank();
    println!("{:<16} {:>7} {:>9}", "table", "loaded", "dropped");
    println!("{}", "-".repeat(34));
    println!(
        "{:<16} {:>7} {:>9}",
        catalog::SYMPTOM_TABLE,
        report.symptoms_loaded,
        report.symptoms_dropped
    );
    println!(
        "{:<16} {:>7} {:>9}",
        catalog::DIAGNOSIS_TABLE,
        report.diagnoses_loaded,
        report.diagnoses_dropped
    );
    println!(
        "{:<16} {:>7} {:>9}",
        catalog::ASSOCIATION_TABLE,
        report.associations_loaded,
        report.associations_dropped
    );
    ui::print_blank();

    if report.dropped_total() > 0 {
        ui::print_warning(&format!("{} row(s) dropped", report.dropped_total()));
    } else {
        ui::print_success("All rows loaded");
    }
    if report.empty_phrases > 0 {
        ui::print_warning(&format!(
            "{} symptom(s) have no phrase and can never match",
            report.empty_phrases
        ));
    }
    let unreachable = catalog
        .diagnoses
        .values()
        .filter(|d| d.symptoms.is_empty())
        .count();
    if unreachable > 0 {
        ui::print_warning(&format!(
            "{} diagnosis(es) have no associated symptoms and can never rank",
            unreachable
        ));
    }
    Ok(())
}
