use finfo_inspect::{
    EntryKind, EntryState, Extractor, Field, FileClass, InspectConfig, InspectError, LineCount,
    Resolver, count_lines,
};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {\n    run();\n}\n").unwrap();
    fs::write(root.join("src/lib.rs"), "pub fn run() {}").unwrap();
    fs::create_dir(root.join("src/nested")).unwrap();
    fs::write(root.join("README.md"), "# finfo\n\nInspect paths.\n").unwrap();
    fs::write(root.join("image.png"), [0x89, b'P', b'N', b'G', 0x00, 0x1a, b'\n']).unwrap();
    fs::write(root.join("empty.txt"), "").unwrap();

    temp
}

fn inspect(input: &str) -> Result<finfo_inspect::FileMetadata, InspectError> {
    let entry = Resolver::new().resolve(input);
    Extractor::new(InspectConfig::default()).extract(&entry)
}

#[test]
fn test_text_file_line_counts() {
    let temp = create_test_tree();
    let root = temp.path();

    let main = inspect(root.join("src/main.rs").to_str().unwrap()).unwrap();
    assert_eq!(main.kind, EntryKind::File);
    assert_eq!(main.class, FileClass::Source);
    assert_eq!(main.lines, Some(Field::Known(LineCount::Lines(3))));
    assert_eq!(main.size, Field::Known(25));

    // No trailing newline still counts as a line.
    let lib = inspect(root.join("src/lib.rs").to_str().unwrap()).unwrap();
    assert_eq!(lib.lines, Some(Field::Known(LineCount::Lines(1))));

    let empty = inspect(root.join("empty.txt").to_str().unwrap()).unwrap();
    assert_eq!(empty.lines, Some(Field::Known(LineCount::Lines(0))));
    assert_eq!(empty.size, Field::Known(0));
}

#[test]
fn test_binary_file_has_no_line_count() {
    let temp = create_test_tree();
    let meta = inspect(temp.path().join("image.png").to_str().unwrap()).unwrap();

    assert_eq!(meta.class, FileClass::Image);
    assert_eq!(meta.lines, Some(Field::Known(LineCount::Binary)));
    assert!(meta.warnings.is_empty());
}

#[test]
fn test_directory_counts_immediate_entries() {
    let temp = create_test_tree();
    let meta = inspect(temp.path().join("src").to_str().unwrap()).unwrap();

    assert_eq!(meta.kind, EntryKind::Directory);
    assert_eq!(meta.class, FileClass::Directory);
    assert_eq!(meta.size, Field::Known(0));
    assert!(meta.lines.is_none());

    let counts = *meta.entries.unwrap().known().unwrap();
    assert_eq!(counts.files, 2);
    assert_eq!(counts.dirs, 1);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_missing_path_is_an_error() {
    let temp = create_test_tree();
    let missing = temp.path().join("does-not-exist");
    let entry = Resolver::new().resolve(missing.to_str().unwrap());

    assert_eq!(entry.state, EntryState::Missing);
    let err = Extractor::default().extract(&entry).unwrap_err();
    assert!(matches!(err, InspectError::NotFound { .. }));
    assert_eq!(err.to_string(), "No such file or directory");
}

#[test]
fn test_resolve_all_keeps_input_order() {
    let temp = create_test_tree();
    let root = temp.path();
    let inputs = [
        root.join("README.md"),
        root.join("nothing"),
        root.join("src"),
    ];
    let inputs: Vec<&str> = inputs.iter().map(|p| p.to_str().unwrap()).collect();

    let entries = Resolver::new().resolve_all(&inputs);
    assert_eq!(entries.len(), 3);
    for (entry, input) in entries.iter().zip(&inputs) {
        assert_eq!(entry.input.as_str(), *input);
        assert!(entry.path.is_absolute());
    }
    assert_eq!(entries[0].kind(), Some(EntryKind::File));
    assert_eq!(entries[1].state, EntryState::Missing);
    assert_eq!(entries[2].kind(), Some(EntryKind::Directory));
}

#[test]
fn test_count_lines_large_input() {
    let text = "line\n".repeat(20_000);
    let count = count_lines(Cursor::new(text.as_bytes()), 8192).unwrap();
    assert_eq!(count, LineCount::Lines(20_000));
}

#[test]
fn test_count_lines_nul_past_sniff_window() {
    let mut data = b"a\n".repeat(10);
    data.push(0);
    data.extend_from_slice(b"b\n");
    // The NUL sits beyond the first 4 bytes, so this is still text.
    let count = count_lines(Cursor::new(&data), 4).unwrap();
    assert_eq!(count, LineCount::Lines(11));
}
