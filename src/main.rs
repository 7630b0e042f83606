use rn_toolbox::{run_cli, ExitCode};

fn main() -> std::process::ExitCode {
    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match run_cli(&argv) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::GeneralError.into()
        }
    }
}
