use codedump::{
    analyze, classify, decode, line_count, parse_sections, read_content, scan, Content,
    IgnoreRules, ScanBuilder, UNKNOWN,
};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_classify_extensions_and_names() {
    assert_eq!(classify(Path::new("src/main.py")), "Python");
    assert_eq!(classify(Path::new("lib/App.TSX")), "TypeScript React");
    assert_eq!(classify(Path::new("Makefile")), "Makefile");
    assert_eq!(classify(Path::new("config.yml")), "YAML");
    assert_eq!(classify(Path::new("notes.txt")), UNKNOWN);
    assert_eq!(classify(Path::new("LICENSE")), UNKNOWN);
}
#[test]
fn test_ignore_rules() {
    let options = ScanBuilder::new("/project")
        .ignore_patterns(vec!["*.gen.py".into()])
        .build();
    let rules = IgnoreRules::new(&options).unwrap();
    assert!(rules.excludes(Path::new("/project/node_modules"), true));
    assert!(rules.excludes(Path::new("/project/a/.git"), true));
    assert!(!rules.excludes(Path::new("/project/src"), true));
    assert!(rules.excludes(Path::new("/project/logo.PNG"), false));
    assert!(rules.excludes(Path::new("/project/yarn.lock"), false));
    assert!(rules.excludes(Path::new("/project/debug.log"), false));
    assert!(rules.excludes(Path::new("/project/src/schema.gen.py"), false));
    assert!(!rules.excludes(Path::new("/project/src/main.py"), false));
    assert!(!rules.excludes(Path::new("/project"), true));
}
#[test]
fn test_invalid_pattern_is_an_error() {
    let options = ScanBuilder::new(".")
        .ignore_patterns(vec!["[unclosed".into()])
        .build();
    assert!(IgnoreRules::new(&options).is_err());
}
#[test]
fn test_decode_fallbacks() {
    assert_eq!(decode(b"plain"), Content::Text("plain".into()));
    assert_eq!(decode(b"\xEF\xBB\xBFbom"), Content::Text("bom".into()));
    // 0xE9 is not valid UTF-8 on its own; Latin-1 reads it as é.
    assert_eq!(decode(b"caf\xE9"), Content::Text("caf\u{e9}".into()));
    assert_eq!(decode(b"\xFF\xFEh\x00i\x00"), Content::Text("hi".into()));
    assert!(matches!(decode(b"ab\x00cd"), Content::Unreadable(_)));
}
#[test]
fn test_decode_nul_after_first_kib() {
    let mut bytes = "a = 1\n".repeat(400).into_bytes();
    bytes.extend_from_slice(b"\x00tail");
    assert_eq!(
        decode(&bytes),
        Content::Unreadable("binary content".into())
    );
}
#[test]
fn test_ignore_pattern_prunes_nested_dirs() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub/docs")).unwrap();
    fs::create_dir_all(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("sub/docs/gen.py"), "x = 1").unwrap();
    fs::write(dir.path().join("docs/top.py"), "x = 1").unwrap();
    fs::write(dir.path().join("sub/keep.py"), "x = 1").unwrap();
    let options = ScanBuilder::new(dir.path())
        .ignore_patterns(vec!["docs".into()])
        .build();
    let rules = IgnoreRules::new(&options).unwrap();
    assert!(rules.excludes(&dir.path().join("sub/docs"), true));
    let result = scan(&options).unwrap();
    let files: Vec<_> = result.tree.files().iter().map(|f| f.path.clone()).collect();
    assert_eq!(files, vec![Path::new("sub/keep.py").to_path_buf()]);
}
#[test]
fn test_read_content_size_limit() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("big.py");
    let mut f = File::create(&file_path).unwrap();
    write!(f, "{}", "A".repeat(5000)).unwrap();
    drop(f);
    let content = read_content(&file_path, 5000, 100);
    assert_eq!(content, Content::Oversize { size: 5000, limit: 100 });
    assert!(content.render().starts_with("<skipped:"));
    let missing = read_content(&dir.path().join("nope.py"), 0, 100);
    assert_eq!(missing.render(), "<unreadable: not found>");
}
#[test]
fn test_line_count_counts_terminators() {
    assert_eq!(line_count(""), 1);
    assert_eq!(line_count("one"), 1);
    assert_eq!(line_count("one\ntwo\n"), 3);
}
#[test]
fn test_analyze_python() {
    let source = "# comment\nimport os\n\nclass Foo:\n    def bar(self):\n        pass\n\nasync def main():\n    pass";
    let m = analyze(source, "Python");
    assert_eq!(m.line_count, 9);
    assert_eq!(m.function_count, 2);
    assert_eq!(m.class_count, 1);
    assert_eq!(m.comment_lines, 1);
    assert_eq!(m.blank_lines, 2);
    assert_eq!(m.blank_lines + m.comment_lines + m.code_lines, m.line_count);
}
#[test]
fn test_analyze_c_like_skips_statements() {
    let source = "struct point { int x; };\nstatic int add(int a, int b) {\n    return sum(a, b);\n}\n// int fake(void)\n";
    let m = analyze(source, "C");
    assert_eq!(m.function_count, 1);
    assert_eq!(m.class_count, 1);
    assert_eq!(m.comment_lines, 1);
}
#[test]
fn test_analyze_rust_and_unknown() {
    let source = "pub struct A;\nimpl A {\n    pub(crate) async fn go(&self) {}\n}\nfn main() {}\n";
    let m = analyze(source, "Rust");
    assert_eq!(m.function_count, 2);
    assert_eq!(m.class_count, 1);
    let none = analyze("def x(): pass\n<<<{{{ not code", UNKNOWN);
    assert_eq!(none.function_count, 0);
    assert_eq!(none.class_count, 0);
}
#[test]
fn test_parse_sections_round_trip_edges() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "no newline").unwrap();
    fs::write(dir.path().join("b.py"), "trailing\n\n").unwrap();
    fs::write(dir.path().join("c.py"), "").unwrap();
    let result = scan(&ScanBuilder::new(dir.path()).build()).unwrap();
    let report = codedump::render_report(&result);
    let sections = parse_sections(&report);
    assert_eq!(
        sections,
        vec![
            ("a.py".to_string(), "no newline".to_string()),
            ("b.py".to_string(), "trailing\n\n".to_string()),
            ("c.py".to_string(), String::new()),
        ]
    );
}
#[test]
fn test_unknown_files_are_opt_in() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    fs::write(dir.path().join("App.vue"), "<template/>").unwrap();
    let default = scan(&ScanBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(default.tree.files().len(), 1);
    let extra = scan(&ScanBuilder::new(dir.path()).extra_extensions([".VUE"]).build()).unwrap();
    let names: Vec<_> = extra.tree.files().iter().map(|f| f.path.clone()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|p| p.ends_with("App.vue")));
    let all = scan(&ScanBuilder::new(dir.path()).include_unknown(true).build()).unwrap();
    assert_eq!(all.tree.files().len(), 3);
}
