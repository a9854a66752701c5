//! Employee API backed by a JSON file (`employees.json` unless configured otherwise).

fn main() -> std::process::ExitCode {
    server::launch::main_with(server::StoreKind::File)
}
