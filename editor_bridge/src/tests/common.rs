use tracing_subscriber::EnvFilter;

use crate::PositionEncoding;

pub const ENCODINGS: [PositionEncoding; 3] = [
    PositionEncoding::Utf8,
    PositionEncoding::Utf16,
    PositionEncoding::Utf32,
];

pub const SAMPLES: [&str; 6] = [
    "",
    "hello",
    "héllo",
    "一二",
    "😀a",
    "let s = \"naïve 😀\"\nprint(s)\n",
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
