use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gold_karat_toolbox::app::{self, AppError, CalcRequest};
use gold_karat_toolbox::config::{self, OutputFormat, DEFAULT_CONFIG_PATH};
use gold_karat_toolbox::i18n::{self, keys, Translator};
use gold_karat_toolbox::purity;
use gold_karat_toolbox::ui_cli;
use gold_karat_toolbox::units::{MassUnit, TemperatureUnit};

/// 정수압 칭량으로 금 순도(카랏)를 추정하는 선별용 계산기.
#[derive(Debug, Parser)]
#[command(name = "gold_karat_toolbox", version)]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// debug 로그 출력
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 한 번 계산하고 종료한다
    Calc {
        /// 공기 중 무게
        #[arg(long, allow_hyphen_values = true)]
        air: String,
        /// 수중 무게
        #[arg(long, allow_hyphen_values = true)]
        water: String,
        /// 수온 (생략 시 설정의 기본 수온)
        #[arg(long, allow_hyphen_values = true)]
        temp: Option<String>,
        #[arg(long, value_enum)]
        mass_unit: Option<MassUnit>,
        #[arg(long, value_enum)]
        temp_unit: Option<TemperatureUnit>,
        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },
    /// 기준 밀도표를 출력한다
    Table {
        /// 라벨 검색어 (예: 18)
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long)]
        json: bool,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 일회성 명령은 설정 파일을 만들지 않는다
    let loaded = match cli.command {
        Some(_) => config::load_at(&cli.config),
        None => config::load_or_default_at(&cli.config),
    };
    let mut cfg = match loaded {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, None);

    match try_run(cli, &mut cfg, &tr) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(json: bool, cfg: &config::Config) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

fn try_run(cli: Cli, cfg: &mut config::Config, tr: &Translator) -> Result<(), AppError> {
    match cli.command {
        Some(Command::Calc {
            air,
            water,
            temp,
            mass_unit,
            temp_unit,
            json,
        }) => {
            let request = CalcRequest {
                air,
                water,
                temperature: temp,
                mass_unit: mass_unit.unwrap_or(cfg.mass_unit),
                temperature_unit: temp_unit.unwrap_or(cfg.temperature_unit),
            };
            let result = app::calculate(&request, cfg)?;
            ui_cli::print_result(tr, &result, output_format(json, cfg))
        }
        Some(Command::Table { filter, json }) => {
            let rows = purity::filter_bands(&filter);
            ui_cli::print_table(tr, &rows, output_format(json, cfg))
        }
        None => app::run(cfg, &cli.config, tr),
    }
}
