//! bucketlist entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates startup to the boot module
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the boot module.

use bucketlist::boot;

#[tokio::main]
async fn main() {
    if let Err(e) = boot::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
