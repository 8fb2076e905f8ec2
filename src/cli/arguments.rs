use std::ffi::OsString;
use std::path::PathBuf;

use clap::{
    Command,
    CommandFactory,
    Parser,
    ValueEnum
};
use log::{
    debug,
    info,
    warn
};

use crate::cli::argumenterror::ArgumentError;
use crate::configuration::ExtrapolationConfig;
use crate::math::curve::quadraticpolynomial::QuadraticPolynomial;
use crate::math::extrapolation::stepsequence::StepAccumulation;

pub const ARGUMENT_NAMES: [&str; 4] = ["a", "b", "c", "x"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AccumulationArg {
    Additive,
    Multiplicative
}

impl From<AccumulationArg> for StepAccumulation {
    fn from(arg: AccumulationArg) -> StepAccumulation {
        match arg {
            AccumulationArg::Additive => StepAccumulation::Additive,
            AccumulationArg::Multiplicative => StepAccumulation::Multiplicative,
        }
    }
}

/// Compare f(x + h) with its tangent-line extrapolation, where f(x) = a·x² + b·x + c
#[derive(Debug, Parser)]
#[command(name = "tangentx", version)]
pub struct CommandLine {
    /// Coefficients a, b, c followed by the anchor point x
    #[arg(value_name = "a b c x", num_args = 0..)]
    pub values: Vec<String>,

    /// JSON file with step_limit, step_size and accumulation
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of offsets to evaluate
    #[arg(long, value_name = "N")]
    pub steps: Option<usize>,

    /// Increment applied to h at each step
    #[arg(long, value_name = "H", allow_negative_numbers = true)]
    pub step_size: Option<f64>,

    /// How h is advanced between steps
    #[arg(long, value_enum)]
    pub accumulation: Option<AccumulationArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Reject arguments that are not entirely numeric instead of reading them as 0
    #[arg(long)]
    pub strict: bool
}

/// 已通過邊界檢查的輸入：a 非零的二次式、錨點 x 與步進設定。
#[derive(Clone, Copy, Debug)]
pub struct ExtrapolationArguments {
    polynomial: QuadraticPolynomial,
    x: f64,
    config: ExtrapolationConfig,
    format: OutputFormat
}

impl ExtrapolationArguments {
    pub fn polynomial(&self) -> &QuadraticPolynomial {
        &self.polynomial
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn config(&self) -> &ExtrapolationConfig {
        &self.config
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl CommandLine {
    /// 先以 `split_positionals` 分離數值引數，再交給 clap 解析。
    pub fn parse_arguments<I, T>(args: I) -> Result<CommandLine, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        CommandLine::try_parse_from(split_positionals(args))
    }

    /// 依序檢查：引數個數、數值解析、設定檔、a ≠ 0。
    pub fn resolve(&self) -> Result<ExtrapolationArguments, ArgumentError> {
        if self.values.len() != ARGUMENT_NAMES.len() {
            return Err(ArgumentError::WrongArgumentCount { given: self.values.len() });
        }

        let mut parsed = [0.0f64; 4];
        for ((slot, text), name) in parsed.iter_mut().zip(self.values.iter()).zip(ARGUMENT_NAMES) {
            *slot = if self.strict {
                parse_strict(name, text)?
            } else {
                parse_permissive(name, text)
            };
        }
        let [a, b, c, x] = parsed;
        debug!("a = {}, b = {}, c = {}, x = {}", a, b, c, x);

        let config = self.resolve_config()?;

        let polynomial = QuadraticPolynomial::new(a, b, c);
        if polynomial.is_degenerate() {
            debug!("rejecting degenerate polynomial");
            return Err(ArgumentError::ZeroLeadingCoefficient);
        }

        Ok(ExtrapolationArguments {
            polynomial,
            x,
            config,
            format: self.format
        })
    }

    fn resolve_config(&self) -> Result<ExtrapolationConfig, ArgumentError> {
        let mut config = match &self.config {
            Some(path) => {
                info!("loading step configuration from {}", path.display());
                ExtrapolationConfig::from_file(path)?
            },
            None => ExtrapolationConfig::default()
        };
        if let Some(steps) = self.steps {
            config = config.with_step_limit(steps);
        }
        if let Some(step_size) = self.step_size {
            config = config.with_step_size(step_size)?;
        }
        if let Some(accumulation) = self.accumulation {
            config = config.with_accumulation(accumulation.into());
        }
        Ok(config)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 位置引數分離
// ─────────────────────────────────────────────────────────────────────────────

/// 重排 argv：已知選項（及其值）在前，其餘 token 依原順序放在 `--` 之後。
///
/// 以 `-` 開頭但不是已知選項的 token（`-.5`、`-inf`、`-1.5x`、`-abc`）
/// 一律視為位置引數，交由 atof 式解析處理。選項可出現在任意位置。
pub fn split_positionals<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = CommandLine::command();
    command.build();

    let mut tokens = args.into_iter().map(Into::<OsString>::into);
    let mut options: Vec<OsString> = tokens.next().into_iter().collect();
    let mut positionals: Vec<OsString> = Vec::new();

    while let Some(token) = tokens.next() {
        let Some(text) = token.to_str().map(str::to_owned) else {
            positionals.push(token);
            continue;
        };
        if text == "--" {
            positionals.extend(tokens.by_ref());
            break;
        }
        match option_arity(&command, &text) {
            Some(takes_value) => {
                options.push(token);
                if takes_value {
                    options.extend(tokens.next());
                }
            },
            None => positionals.push(token)
        }
    }

    options.push(OsString::from("--"));
    options.extend(positionals);
    options
}

/// `text` 為已知選項時回傳 `Some(是否需要另一個 token 作為值)`。
fn option_arity(command: &Command, text: &str) -> Option<bool> {
    if let Some(long) = text.strip_prefix("--") {
        let (name, inline_value) = match long.split_once('=') {
            Some((name, _)) => (name, true),
            None => (long, false)
        };
        return command
            .get_arguments()
            .find(|arg| arg.get_long() == Some(name))
            .map(|arg| arg.get_action().takes_values() && !inline_value);
    }

    let mut chars = text.strip_prefix('-')?.chars();
    let (Some(short), None) = (chars.next(), chars.next()) else {
        return None;
    };
    command
        .get_arguments()
        .find(|arg| arg.get_short() == Some(short))
        .map(|arg| arg.get_action().takes_values())
}

fn parse_strict(name: &'static str, text: &str) -> Result<f64, ArgumentError> {
    text.parse::<f64>().map_err(|_| ArgumentError::MalformedNumber {
        name,
        text: text.to_owned()
    })
}

fn parse_permissive(name: &'static str, text: &str) -> f64 {
    let (value, consumed) = parse_leading_f64(text);
    if consumed != text.len() {
        warn!("argument {} = '{}' is not entirely numeric, using {}", name, text, value);
    }
    value
}

// ─────────────────────────────────────────────────────────────────────────────
// atof 式寬鬆解析
// ─────────────────────────────────────────────────────────────────────────────

/// 取 `text` 中最長、合法的十進位浮點數前綴。
///
/// 略過前導空白，接受正負號、小數、指數、十六進位（0x1.8p3）
/// 與 inf / infinity / nan（不分大小寫）。
/// 找不到合法前綴時回傳 0.0。第二個回傳值為已消耗的位元組數。
pub fn parse_leading_f64(text: &str) -> (f64, usize) {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start].is_ascii_whitespace() {
        start += 1;
    }

    let mut pos = start;
    if pos < bytes.len() && (bytes[pos] == b'+' || bytes[pos] == b'-') {
        pos += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let end = pos + word.len();
        if end <= bytes.len() && bytes[pos..end].eq_ignore_ascii_case(word.as_bytes()) {
            return (text[start..end].parse::<f64>().unwrap_or(0.0), end);
        }
    }

    if let Some((magnitude, end)) = parse_hex_magnitude(bytes, pos) {
        let value = if bytes[start] == b'-' { -magnitude } else { magnitude };
        return (value, end);
    }

    let integer_digits = count_digits(&bytes[pos..]);
    pos += integer_digits;
    let mut fraction_digits = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        fraction_digits = count_digits(&bytes[pos + 1..]);
        if integer_digits + fraction_digits > 0 {
            pos += 1 + fraction_digits;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return (0.0, 0);
    }

    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exponent_end = pos + 1;
        if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-') {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            pos = exponent_end + exponent_digits;
        }
    }

    (text[start..pos].parse::<f64>().unwrap_or(0.0), pos)
}

/// 解析 `pos` 起的 0x 前綴十六進位數（不含正負號），指數 p 以 2 為底。
fn parse_hex_magnitude(bytes: &[u8], pos: usize) -> Option<(f64, usize)> {
    if bytes.len() < pos + 2 || bytes[pos] != b'0' || !(bytes[pos + 1] == b'x' || bytes[pos + 1] == b'X') {
        return None;
    }
    let mut cursor = pos + 2;
    let mut mantissa = 0.0f64;
    let mut scale = 0i32;

    let integer_digits = count_hex_digits(&bytes[cursor..]);
    for &digit in &bytes[cursor..cursor + integer_digits] {
        mantissa = mantissa * 16.0 + hex_value(digit);
    }
    cursor += integer_digits;

    let mut fraction_digits = 0;
    if cursor < bytes.len() && bytes[cursor] == b'.' {
        fraction_digits = count_hex_digits(&bytes[cursor + 1..]);
        if integer_digits + fraction_digits > 0 {
            for &digit in &bytes[cursor + 1..cursor + 1 + fraction_digits] {
                mantissa = mantissa * 16.0 + hex_value(digit);
                scale = scale.saturating_sub(4);
            }
            cursor += 1 + fraction_digits;
        }
    }
    // "0x" 後沒有數字時只取 "0"，交回十進位路徑
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if cursor < bytes.len() && (bytes[cursor] == b'p' || bytes[cursor] == b'P') {
        let mut exponent_end = cursor + 1;
        let mut negative = false;
        if exponent_end < bytes.len() && (bytes[exponent_end] == b'+' || bytes[exponent_end] == b'-') {
            negative = bytes[exponent_end] == b'-';
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            let exponent = bytes[exponent_end..exponent_end + exponent_digits]
                .iter()
                .fold(0i32, |acc, &d| acc.saturating_mul(10).saturating_add((d - b'0') as i32));
            scale = scale.saturating_add(if negative { -exponent } else { exponent });
            cursor = exponent_end + exponent_digits;
        }
    }

    if mantissa == 0.0 {
        return Some((0.0, cursor));
    }
    Some((mantissa * 2f64.powi(scale), cursor))
}

fn hex_value(digit: u8) -> f64 {
    (digit as char).to_digit(16).unwrap_or(0) as f64
}

fn count_hex_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_hexdigit()).count()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
