use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a test subscriber once per binary so failures carry logs
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "mailroom=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

static DIR_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Create a unique scratch directory for template files
pub fn temp_template_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mailroom-test-{}-{}",
        std::process::id(),
        DIR_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
