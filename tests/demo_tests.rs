use boyo::codegen::Region;
use boyo::driver;
use boyo::printer::render_program_tree;
use std::fs;
use std::path::{Path, PathBuf};

fn demo(name: &str) -> Vec<String> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    driver::read_source(&path).expect("Failed to read demo program")
}

#[test]
fn test_every_demo_translates() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .expect("Failed to list demos")
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "boyo"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty());

    for path in paths {
        let lines = driver::read_source(&path).unwrap();
        let source = driver::render_source(&lines)
            .unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
        assert!(source.ends_with("  return 0;\n}\n"), "{}", path.display());
    }
}

#[test]
fn test_arithmetic_demo() {
    let program = driver::translate(&demo("arithmetic.boyo")).unwrap();

    assert!(program.global.contains("std::vector<uint8_t> A = {0x01, 0x02};"));
    assert!(program
        .global
        .contains("return multiply(add(_a, _b), {0x02, 0x02});"));
    assert!(!program.global.contains("shorter operands"));

    // print and main lines interleave in source order
    let order: Vec<usize> = [
        "\"sums\"",
        "sum(A, B)",
        "\"differences\"",
        "diff(B, A)",
        "scaled(A, B)",
    ]
    .iter()
    .map(|needle| program.entry.find(needle).unwrap())
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{}", program.entry);
}

#[test]
fn test_constants_demo() {
    let program = driver::translate(&demo("constants.boyo")).unwrap();

    assert!(program
        .global
        .contains("std::vector<uint8_t> KEY = {0xDE, 0xAD, 0xBE, 0xEF};"));
    assert!(program
        .global
        .contains("std::vector<uint8_t> magic() {\n  return {0x2A};\n}\n"));
    assert!(program.entry.contains("auto result = magic();"));
    assert!(program.entry.contains("auto result = masked(KEY);"));
}

#[test]
fn test_double_demo_report() {
    let lines = demo("double.boyo");
    let statements = boyo::parse(&lines).unwrap();

    let report = render_program_tree(&statements);
    assert!(report.contains("Program (4 statements)"));
    assert!(report.contains("[3] line 4: DefStatement"));
    assert!(report.contains("└─ Body: * 0x02 _a"));

    let regions: Vec<Region> = statements.iter().map(Region::of).collect();
    assert_eq!(
        regions,
        vec![Region::Global, Region::Global, Region::Global, Region::Entry]
    );
}
