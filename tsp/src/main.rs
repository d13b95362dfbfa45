use std::process::ExitCode;

fn main() -> ExitCode {
    terminal_startpage::lib_main()
}
