fn main() {
    crucible::cli::run();
}
