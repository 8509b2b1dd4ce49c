use textgen_core::LOREM;

use crate::add_test;
use crate::common::{parse_word_count, Fixture, SAMPLE_TEXT};

/// Words in one default block: 69 per paragraph, 1000 paragraphs.
const WORDS_PER_BLOCK: u64 = 69_000;

// Test counting a generated file
add_test!(counts_generated_file, async {
    const FILE_NAME: &str = "generated.txt";

    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["--size", "1M", "-q", "-o", FILE_NAME])
        .await;
    assert!(output.status.success());

    let blocks = fixture.file_len(FILE_NAME) / (LOREM.len() as u64 * 1000);
    let output = fixture.run_cargo("wordcount", &[FILE_NAME]).await;
    assert!(output.status.success(), "stderr: {}", output.stderr);

    let lines = output.stdout_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(parse_word_count(&output.stdout), Some(blocks * WORDS_PER_BLOCK));
    assert!(lines[1].starts_with("Elapsed time: "));
    assert!(lines[1].ends_with(" seconds"));
});

// Test that the parallel counter agrees with the sequential one
add_test!(threads_match_sequential, async {
    const FILE_NAME: &str = "generated.txt";

    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["--size", "9M", "-q", "-o", FILE_NAME])
        .await;
    assert!(output.status.success());

    let sequential = fixture.run_cargo("wordcount", &[FILE_NAME]).await;
    let expected = parse_word_count(&sequential.stdout);
    assert!(expected.is_some());

    let variants: [&[&str]; 3] = [
        &[FILE_NAME, "-T", "1"],
        &[FILE_NAME, "-T"],
        &[FILE_NAME, "--threads", "1"],
    ];
    for args in variants {
        let output = fixture.run_cargo("wordcount", args).await;
        assert!(output.status.success(), "args {args:?}: {}", output.stderr);
        assert_eq!(parse_word_count(&output.stdout), expected, "args {args:?}");
    }
});

// Test the frequency listing
add_test!(frequencies_listing, async {
    const FILE_NAME: &str = "sample.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, SAMPLE_TEXT.as_bytes());
    let output = fixture.run_cargo("wordcount", &["-f", FILE_NAME]).await;
    assert!(output.status.success());

    let lines = output.stdout_lines();
    assert_eq!(lines[0], "Total word count: 9");
    assert_eq!(lines[1], "Unique words: 8");
    assert!(lines[2].starts_with("Elapsed time: "));
    assert_eq!(lines[3], "Words found:");
    assert_eq!(lines.len(), 4 + 8);
    assert!(lines.contains(&"the: 2"));
    assert!(lines.contains(&"fox: 1"));

    // Words are listed in sorted order
    let words: Vec<&str> = lines[4..]
        .iter()
        .filter_map(|line| line.split(": ").next())
        .collect();
    let mut sorted = words.clone();
    sorted.sort_unstable();
    assert_eq!(words, sorted);
});

// Test that an empty file has no words
add_test!(empty_file, async {
    const FILE_NAME: &str = "empty.txt";

    let mut fixture = Fixture::with_file(FILE_NAME, b"");
    let output = fixture.run_cargo("wordcount", &[FILE_NAME]).await;
    assert!(output.status.success());
    assert_eq!(parse_word_count(&output.stdout), Some(0));

    let output = fixture.run_cargo("wordcount", &[FILE_NAME, "-T"]).await;
    assert!(output.status.success());
    assert_eq!(parse_word_count(&output.stdout), Some(0));
});

// Test that a missing input file fails with the program name
add_test!(missing_file, async {
    let mut fixture = Fixture::new();
    let output = fixture.run_cargo("wordcount", &["absent.txt"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("wordcount: absent.txt"));
    assert!(output.stdout.is_empty());
});

// Test that --threads with --frequencies lists the same table
add_test!(threads_with_frequencies_match_sequential, async {
    const FILE_NAME: &str = "generated.txt";

    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("textgen", &["--size", "9M", "-q", "-o", FILE_NAME])
        .await;
    assert!(output.status.success());

    let sequential = fixture.run_cargo("wordcount", &["-f", FILE_NAME]).await;
    assert!(sequential.status.success());

    // Everything except the timing line must be identical
    let without_time = |stdout: &str| -> Vec<String> {
        stdout
            .lines()
            .filter(|line| !line.starts_with("Elapsed time: "))
            .map(str::to_owned)
            .collect()
    };

    for args in [&["-f", FILE_NAME, "-T"][..], &["-f", "-T", "1", FILE_NAME][..]] {
        let output = fixture.run_cargo("wordcount", args).await;
        assert!(output.status.success(), "args {args:?}: {}", output.stderr);
        assert_eq!(without_time(&output.stdout), without_time(&sequential.stdout));
    }
});
