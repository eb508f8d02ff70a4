use std::process::ExitCode;

fn main() -> ExitCode {
    check_bitcoin_price::app::run()
}
