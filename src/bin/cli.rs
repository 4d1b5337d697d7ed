use private_key_jwt::config::ToolConfig;
use private_key_jwt::observability::init_logs;
use private_key_jwt::terminal::{stdout_supports_color, Console, TerminalInput};
use std::env;
use std::process;

fn main() {
    let mut config = ToolConfig::from_args(env::args().skip(1));
    config.apply_env_overrides();
    config.colors = config.colors && stdout_supports_color();

    if let Err(e) = init_logs(&config.log) {
        eprintln!("{}", e);
    }

    let mut console = Console::stdout(config.colors);
    let mut input = TerminalInput::new();

    if let Err(e) = private_key_jwt::generate_and_run(&config, &mut console, &mut input) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
