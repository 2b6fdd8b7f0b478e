fn main() {
    manifest_bundle::app::cli::run();
}
