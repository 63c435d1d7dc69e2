use nes_trace_diff::commands::{
    execute_compare, validate_args, CompareArgs, ParserKind, TestSource,
};
use nes_trace_diff::output::read_report;
use nes_trace_diff::parser::{layout_to_toml, ColumnLayout, TraceField};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const REFERENCE: &str = "\
nestest.nes
C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
C5F5  A2 00     LDX #$00                        A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 30 CYC:10
C5F7  86 00     STX $00 = 00                    A:00 X:00 Y:00 P:26 SP:FD PPU:  0, 36 CYC:12
";

const TEST_DIVERGED: &str = "\
my emulator
C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
C5F5  A2 00     LDX #$00                        A:00 X:00 Y:00 P:26 SP:FD PPU:  0, 30 CYC:11
";

fn temp_trace(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_execute_compare_clean() {
    let reference = temp_trace(REFERENCE);
    let test = temp_trace(REFERENCE);

    let args = CompareArgs {
        reference: reference.path().to_path_buf(),
        test: TestSource::File(test.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    let result = execute_compare(args).unwrap();
    assert!(result.is_clean());
    assert_eq!(result.lines_compared, 3);
}

#[test]
fn test_execute_compare_writes_report() {
    let reference = temp_trace(REFERENCE);
    let test = temp_trace(TEST_DIVERGED);
    let out_dir = tempfile::tempdir().unwrap();
    let report_path = out_dir.path().join("report.json");

    let args = CompareArgs {
        reference: reference.path().to_path_buf(),
        test: TestSource::File(test.path().to_path_buf()),
        output_json: Some(report_path.clone()),
        quiet: true,
        ..Default::default()
    };

    let result = execute_compare(args).unwrap();
    assert!(!result.is_clean());

    let report = read_report(&report_path).unwrap();
    assert_eq!(report.strategy, "grammar");
    assert_eq!(report.result, result);

    let divergence = report.result.divergence.unwrap();
    assert_eq!(divergence.line_number, 3);
    let fields: Vec<TraceField> = divergence.field_diffs.iter().map(|d| d.field).collect();
    assert_eq!(fields, vec![TraceField::P, TraceField::Cyc]);

    let mismatch = report.result.length_mismatch.unwrap();
    assert_eq!((mismatch.reference_lines, mismatch.test_lines), (3, 2));
}

#[test]
fn test_execute_compare_with_layout_file() {
    let reference = temp_trace(REFERENCE);
    let test = temp_trace(REFERENCE);
    let layout = temp_trace(&layout_to_toml(&ColumnLayout::default()).unwrap());

    let args = CompareArgs {
        reference: reference.path().to_path_buf(),
        test: TestSource::File(test.path().to_path_buf()),
        parser: ParserKind::Columns,
        layout_file: Some(layout.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    validate_args(&args).unwrap();
    let result = execute_compare(args).unwrap();
    assert!(result.is_clean());
    assert!(result.parse_errors.is_empty());
}

#[test]
fn test_execute_compare_missing_reference() {
    let test = temp_trace(REFERENCE);
    let args = CompareArgs {
        reference: PathBuf::from("/nonexistent/reference.log"),
        test: TestSource::File(test.path().to_path_buf()),
        quiet: true,
        ..Default::default()
    };

    assert!(execute_compare(args).is_err());
}

#[test]
fn test_test_source_from_arg() {
    assert_eq!(TestSource::from_arg(None), TestSource::Interactive);
    assert_eq!(
        TestSource::from_arg(Some(PathBuf::from("-"))),
        TestSource::Interactive
    );
    assert_eq!(
        TestSource::from_arg(Some(PathBuf::from("mine.log"))),
        TestSource::File(PathBuf::from("mine.log"))
    );
}

#[test]
fn test_validate_args_rejects_layout_for_grammar() {
    let args = CompareArgs {
        layout_file: Some(PathBuf::from("layout.toml")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}
