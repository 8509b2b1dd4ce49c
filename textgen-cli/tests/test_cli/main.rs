mod textgen;
mod wordcount;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;

const MAX_DURATION: std::time::Duration = std::time::Duration::from_secs(30);

/// Macro to generate an async test case with a timeout
///
/// Extra attributes (e.g. `#[ignore]`) may precede the test name.
#[macro_export]
macro_rules! add_test {
    ($(#[$meta:meta])* $name:ident, $test:expr) => {
        #[tokio::test(flavor = "current_thread")]
        $(#[$meta])*
        async fn $name() {
            tokio::time::timeout($crate::MAX_DURATION, $test)
                .await
                .expect("timeout expired");
        }
    };
}

/// Same as [`add_test!`] with a longer timeout for multi-gigabyte outputs.
#[macro_export]
macro_rules! add_slow_test {
    ($(#[$meta:meta])* $name:ident, $test:expr) => {
        #[tokio::test(flavor = "current_thread")]
        $(#[$meta])*
        async fn $name() {
            tokio::time::timeout($crate::MAX_DURATION * 40, $test)
                .await
                .expect("timeout expired");
        }
    };
}
