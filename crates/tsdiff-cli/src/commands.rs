use colored::Colorize;
use tracing::debug;
use tsdiff_csv::{load_snapshots, SnapshotConfig};
use tsdiff_diff::diff_tables;
use tsdiff_report::write_report;

/// Runs one comparison: load both snapshots, diff them, write the
/// report, and print a summary.
pub fn run(config: &SnapshotConfig) -> anyhow::Result<()> {
    debug!(
        current = %config.current_path.display(),
        previous = %config.previous_path.display(),
        report = %config.report_path.display(),
        "effective configuration"
    );
    let pair = load_snapshots(config)?;
    let diff = diff_tables(&pair.current, &pair.previous);
    write_report(
        &config.report_path,
        &diff,
        &pair.current,
        &pair.previous,
        config.delimiter,
    )?;

    if pair.bootstrapped {
        println!(
            "{} No previous snapshot; created {} from the current one.",
            "✓".green(),
            config.previous_path.display().to_string().bold()
        );
    }
    println!(
        "{} {} added, {} removed, {} updated",
        "✓".green().bold(),
        diff.added_count().to_string().bold(),
        diff.removed_count().to_string().bold(),
        diff.updated_count().to_string().bold()
    );
    println!(
        "Changes saved to {}",
        config.report_path.display().to_string().bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path) -> SnapshotConfig {
        SnapshotConfig {
            current_path: dir.join("timesheet_updated.csv"),
            previous_path: dir.join("timesheet_previous.csv"),
            report_path: dir.join("changes.csv"),
            delimiter: ',',
        }
    }

    #[test]
    fn run_writes_a_complete_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::write(
            &config.previous_path,
            "Division,Course + Section,Instructor,Hours\n\
             Math,M101-01,Smith,3\n\
             Sci,S201-01,Jones,4\n",
        )
        .unwrap();
        fs::write(
            &config.current_path,
            "Division,Course + Section,Instructor,Hours\n\
             Math,M101-01,Smith,5\n\
             Art,A110-02,Berg,2\n",
        )
        .unwrap();

        run(&config).unwrap();

        let report = fs::read_to_string(&config.report_path).unwrap();
        assert_eq!(
            report,
            "Added Rows\n\
             Division,Course + Section,Instructor,Hours\n\
             Art,A110-02,Berg,2\n\
             \n\
             Removed Rows\n\
             Division,Course + Section,Instructor,Hours\n\
             Sci,S201-01,Jones,4\n\
             \n\
             Updated Rows\n\
             Division,Course + Section,Field,Old Value,New Value\n\
             Math,M101-01,Hours,3,5\n"
        );
    }

    #[test]
    fn run_bootstraps_previous_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let snapshot = "Division,Course + Section,Hours\nMath,M101-01,3\n";
        fs::write(&config.current_path, snapshot).unwrap();

        run(&config).unwrap();

        // The previous snapshot now exists and the first report is empty.
        assert_eq!(fs::read_to_string(&config.previous_path).unwrap(), snapshot);
        let report = fs::read_to_string(&config.report_path).unwrap();
        assert_eq!(
            report,
            "Added Rows\n\
             Division,Course + Section,Hours\n\
             \n\
             Removed Rows\n\
             Division,Course + Section,Hours\n\
             \n\
             Updated Rows\n\
             Division,Course + Section,Field,Old Value,New Value\n"
        );
    }

    #[test]
    fn run_fails_without_current_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("source file not found"));
        assert!(!config.report_path.exists());
    }

    #[test]
    fn run_honors_alternate_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.delimiter = ';';
        fs::write(
            &config.previous_path,
            "Division;Course + Section;Hours\nMath;M101-01;3\n",
        )
        .unwrap();
        fs::write(
            &config.current_path,
            "Division;Course + Section;Hours\nMath;M101-01;4\n",
        )
        .unwrap();

        run(&config).unwrap();

        let report = fs::read_to_string(&config.report_path).unwrap();
        assert!(report.contains("Division;Course + Section;Field;Old Value;New Value\n"));
        assert!(report.contains("Math;M101-01;Hours;3;4\n"));
    }
}
