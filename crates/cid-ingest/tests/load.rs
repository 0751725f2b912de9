use std::fs;
use std::path::PathBuf;

use cid_ingest::{IngestError, IngestOptions, InputSource, load_csv, load_text};
use cid_model::RawInput;

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_contract_id_column_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(
        &dir,
        "ids.csv",
        b"Client,Contract ID,Notes\nACME,\"111, 222\",x\nBeta,,y\nGamma,333.0,z\n",
    );

    let input = load_csv(&InputSource::Path(path), &IngestOptions::default()).expect("load csv");

    assert_eq!(input.frame.height(), 3);
    assert_eq!(input.frame.width(), 3);
    assert_eq!(
        input.raw,
        RawInput::Column(vec![
            Some("111, 222".to_string()),
            None,
            Some("333.0".to_string()),
        ])
    );
}

#[test]
fn missing_column_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "other.csv", b"Contrato,Valor\n1,2\n");

    let result = load_csv(&InputSource::Path(path), &IngestOptions::default());

    match result {
        Err(IngestError::MissingColumn { column, source_name }) => {
            assert_eq!(column, "Contract ID");
            assert!(source_name.ends_with("other.csv"));
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn custom_column_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "custom.csv", b"Contrato\n42\n");

    let options = IngestOptions::default().with_column("Contrato");
    let input = load_csv(&InputSource::Path(path), &options).expect("load csv");

    assert_eq!(input.raw, RawInput::Column(vec![Some("42".to_string())]));
}

#[test]
fn bom_prefixed_header_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "bom.csv", b"\xEF\xBB\xBFContract ID\n9\n");

    let input = load_csv(&InputSource::Path(path), &IngestOptions::default()).expect("load csv");

    assert_eq!(input.raw, RawInput::Column(vec![Some("9".to_string())]));
}

#[test]
fn size_limit_applies_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "big.csv", b"Contract ID\n1234567890\n");

    let options = IngestOptions::default().with_max_input_size(8);
    let result = load_csv(&InputSource::Path(path), &options);

    assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
}

#[test]
fn loads_free_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_file(&dir, "ids.txt", b"ID: 1 2\r\n3");

    let raw = load_text(&InputSource::Path(path), 1024).expect("load text");

    assert_eq!(raw, RawInput::Text("ID: 1 2\r\n3".to_string()));
}
