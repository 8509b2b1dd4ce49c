use crate::add_test;
use crate::common::Fixture;

// Test that a non-integer size argument is rejected with exit code 1
add_test!(non_integer_argument_fails, async {
    let mut fixture = Fixture::new();
    let output = fixture.run_cargo("textgen", &["abc"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("textgen: Invalid size 'abc'"));
    assert!(output.stdout.is_empty());
    assert_eq!(fixture.entry_count(), 0);
});

// Test that zero and negative sizes are rejected before anything is written
add_test!(zero_and_negative_sizes_fail, async {
    let mut fixture = Fixture::new();

    for arg in ["0", "-3", "1.5"] {
        let output = fixture.run_cargo("textgen", &[arg]).await;
        assert_eq!(output.status.code(), Some(1), "argument {arg}");
        assert!(output.stderr.contains(&format!("'{arg}'")));
    }

    let output = fixture.run_cargo("textgen", &["--size", "0"]).await;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(fixture.entry_count(), 0);
});

// Test that malformed --size and --progress-interval values are rejected
add_test!(invalid_size_suffixes_fail, async {
    let mut fixture = Fixture::new();

    let output = fixture.run_cargo("textgen", &["--size", "12X"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("Invalid size"));

    let output = fixture
        .run_cargo("textgen", &["--size", "1K", "--progress-interval", "0"])
        .await;
    assert_eq!(output.status.code(), Some(1));

    assert_eq!(fixture.entry_count(), 0);
});

// Test that a zero multiplier is rejected
add_test!(zero_multiplier_fails, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["--size", "1K", "--multiplier", "0"])
        .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("multiplier"));
    assert_eq!(fixture.entry_count(), 0);
});

// Test that an empty text file is rejected
add_test!(empty_text_file_fails, async {
    const UNIT_FILE: &str = "empty.txt";

    let mut fixture = Fixture::with_file(UNIT_FILE, b"");
    let output = fixture
        .run_cargo("textgen", &["--text-file", UNIT_FILE, "--size", "1K"])
        .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.contains("Text file is empty"));
    assert_eq!(fixture.entry_count(), 1);
});

// Test that GB and --size cannot be combined
add_test!(gigabytes_conflict_with_size, async {
    let mut fixture = Fixture::new();
    let output = fixture.run_cargo("textgen", &["1", "--size", "1K"]).await;

    assert!(!output.status.success());
    assert_eq!(fixture.entry_count(), 0);
});

// Test that verbose mode describes the run on stderr
add_test!(verbose_prints_plan, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["-v", "--size", "1K", "-o", "plan.txt"])
        .await;

    assert!(output.status.success());
    assert!(output.stderr.contains("Writing plan.txt: target 1.0 KiB"));
    assert!(output.stderr.contains("Wrote 1 blocks"));
});

// Test that -v and -q are mutually exclusive
add_test!(verbose_conflicts_with_quiet, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["-v", "-q", "--size", "1K"])
        .await;

    assert!(!output.status.success());
    assert_eq!(fixture.entry_count(), 0);
});

// Test help output
add_test!(help_flag, async {
    let mut fixture = Fixture::new();
    let output = fixture.run_cargo("textgen", &["--help"]).await;

    assert!(output.status.success());
    assert!(output.stdout.contains("--size"));
    assert!(output.stdout.contains("--text-file"));
});
