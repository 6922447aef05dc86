use clap::{Parser, Subcommand};

use pump_performance_toolbox::{app, config, i18n, pump, ui_cli};

#[derive(Debug, Parser)]
#[command(name = "pump-performance-toolbox", version, about = "배수 펌프 성능 계산기")]
struct Cli {
    /// 언어 코드(ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 내장 펌프 모델과 양정 범위를 출력한다
    Models,
    /// 대화형 메뉴 없이 배수 성능을 바로 계산한다
    Calc {
        /// 펌프 모델명 (예: "DJ-3006 30HP")
        model: String,
        /// 양정 [m]
        #[arg(long)]
        head: Option<f64>,
        /// 집수정 용량 [kL]
        #[arg(long)]
        sump: Option<f64>,
        /// 가동 펌프 대수
        #[arg(long)]
        pumps: Option<u32>,
        /// 전력 요금 [통화/kWh]
        #[arg(long)]
        cost: Option<f64>,
        /// 펌프 효율 [%]
        #[arg(long)]
        efficiency: Option<f64>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, None);

    match cli.command {
        Some(Command::Models) => ui_cli::print_model_list(&tr),
        Some(Command::Calc {
            model,
            head,
            sump,
            pumps,
            cost,
            efficiency,
        }) => {
            let d = &cfg.default_inputs;
            let input = pump::PerformanceInput {
                model,
                head_m: head.unwrap_or(d.head_m),
                sump_volume_kl: sump.unwrap_or(d.sump_volume_kl),
                pump_count: pumps.unwrap_or(d.pump_count),
                cost_per_kwh: cost.unwrap_or(d.cost_per_kwh),
                efficiency_percent: efficiency.unwrap_or(d.efficiency_percent),
            };
            let result = pump::calculate(&input)?;
            ui_cli::print_performance_result(&tr, &cfg, &input.model, &result);
        }
        None => app::run(&mut cfg, &tr)?,
    }
    Ok(())
}
