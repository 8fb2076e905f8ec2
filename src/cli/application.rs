use std::ffi::OsString;
use std::io::Write;

use log::{
    debug,
    error
};

use crate::cli::argumenterror::{
    ArgumentError,
    EXIT_OUTPUT_FAILURE,
    EXIT_SUCCESS,
    EXIT_USAGE
};
use crate::cli::arguments::{
    CommandLine,
    ExtrapolationArguments,
    OutputFormat
};
use crate::driver::extrapolationdriver::ExtrapolationDriver;
use crate::report::jsonlinessink::JsonLinesSink;
use crate::report::resultsink::SinkError;
use crate::report::tablesink::TableSink;

pub const USAGE_LINES: [&str; 2] = [
    "Invocation: tangentx a b c x",
    "   where a, b, and c are decimal values and a is not 0.",
];

/// 執行一次完整流程並回傳行程結束碼。
///
/// 資料列與使用說明寫入 `out`，其他診斷訊息寫入 `err`。
/// 任何參數錯誤都在第一列資料輸出前偵測，錯誤時不會有部分輸出。
pub fn run<I, T, W, E>(args: I, out: &mut W, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let command_line = match CommandLine::parse_arguments(args) {
        Ok(command_line) => command_line,
        Err(clap_error) => {
            // --help 與 --version 也走這條路
            if !clap_error.use_stderr() {
                let _ = write!(out, "{}", clap_error.render());
                return EXIT_SUCCESS;
            }
            let _ = write!(err, "{}", clap_error.render());
            write_usage(out);
            return EXIT_USAGE;
        }
    };

    let arguments = match command_line.resolve() {
        Ok(arguments) => arguments,
        Err(argument_error) => {
            report_argument_error(&argument_error, out, err);
            return argument_error.exit_code();
        }
    };

    match execute(&arguments, out) {
        Ok(rows) => {
            debug!("wrote {} rows", rows);
            EXIT_SUCCESS
        },
        Err(sink_error) => {
            error!("{}", sink_error);
            let _ = writeln!(err, "{}", sink_error);
            EXIT_OUTPUT_FAILURE
        }
    }
}

pub fn execute<W>(arguments: &ExtrapolationArguments, out: &mut W) -> Result<usize, SinkError>
where
    W: Write + ?Sized,
{
    let driver = ExtrapolationDriver::new(*arguments.config());
    match arguments.format() {
        OutputFormat::Table => {
            let mut sink = TableSink::new(out);
            driver.run(arguments.polynomial(), arguments.x(), &mut sink)
        },
        OutputFormat::Json => {
            let mut sink = JsonLinesSink::new(out);
            driver.run(arguments.polynomial(), arguments.x(), &mut sink)
        }
    }
}

fn write_usage<W: Write + ?Sized>(out: &mut W) {
    for line in USAGE_LINES {
        let _ = writeln!(out, "{}", line);
    }
}

fn report_argument_error<W, E>(argument_error: &ArgumentError, out: &mut W, err: &mut E)
where
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    debug!("rejected arguments: {}", argument_error);
    match argument_error {
        ArgumentError::WrongArgumentCount { .. } => write_usage(out),
        ArgumentError::ZeroLeadingCoefficient => {
            let _ = writeln!(out, "{}", argument_error);
        },
        _ => {
            let _ = writeln!(err, "{}", argument_error);
            if argument_error.shows_usage() {
                write_usage(out);
            }
        }
    }
}
