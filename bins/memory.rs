//! Employee API backed by an in-process map; records are lost on restart.

fn main() -> std::process::ExitCode {
    server::launch::main_with(server::StoreKind::Memory)
}
