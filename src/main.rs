fn main() {
    rome::cli::run();
}
