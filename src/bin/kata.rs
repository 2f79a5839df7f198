// kata CLI entry point.
// Usage: cargo run --bin kata -- demo [--color never] [--json]

fn main() {
    kata::cli::run();
}
