fn main() {
    historic_params::app::cli::run();
}
