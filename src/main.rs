use std::io::{
    self,
    BufWriter,
    Write
};
use std::process::ExitCode;

use tangentx::cli::application;
use tangentx::cli::argumenterror::EXIT_OUTPUT_FAILURE;

fn main() -> ExitCode {
    // 日誌只寫 stderr，stdout 保留給結果表
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stderr = io::stderr();
    let mut err = stderr.lock();
    let mut out = BufWriter::new(io::stdout().lock());

    let code = application::run(std::env::args_os(), &mut out, &mut err);
    if let Err(error) = out.flush() {
        log::error!("failed to flush standard output: {}", error);
        return ExitCode::from(EXIT_OUTPUT_FAILURE);
    }
    ExitCode::from(code)
}
