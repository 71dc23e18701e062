fn main() {
    wosum::app::cli::run();
}
