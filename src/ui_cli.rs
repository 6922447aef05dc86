use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::pump::{self, curve_db, Advisory, PerformanceInput, PerformanceResult};
use crate::quantity::QuantityKind;
use crate::units::{convert_flow_rate, FlowRateUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Performance,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PERFORMANCE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Performance),
            "2" => return Ok(MenuChoice::UnitConversion),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 내장 펌프 모델과 양정 범위를 출력한다.
pub fn print_model_list(tr: &Translator) {
    println!("{}", tr.t(keys::PERF_MODEL_LIST_HEADING));
    for (idx, curve) in curve_db::pump_curves().iter().enumerate() {
        match pump::head_range(curve) {
            Some((min, max)) => println!(
                "{:>2}) {:<16} {} {:.1}~{:.1} m",
                idx + 1,
                curve.model,
                tr.t(keys::PERF_MODEL_RANGE),
                min,
                max
            ),
            None => println!("{:>2}) {}", idx + 1, curve.model),
        }
    }
}

/// 배수 성능 계산 메뉴를 처리한다.
pub fn handle_performance(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PERF_HEADING));
    print_model_list(tr);
    let curves = curve_db::pump_curves();
    let model = loop {
        let sel = read_line(tr.t(keys::PERF_PROMPT_MODEL))?;
        let s = sel.trim();
        if let Ok(n) = s.parse::<usize>() {
            if (1..=curves.len()).contains(&n) {
                break curves[n - 1].model.to_string();
            }
        }
        if let Some(curve) = curve_db::find_pump(s) {
            break curve.model.to_string();
        }
        println!("{}", tr.t(keys::PERF_UNKNOWN_MODEL_RETRY));
    };

    let d = &cfg.default_inputs;
    let head_m = read_f64_or(tr, tr.t(keys::PERF_PROMPT_HEAD), d.head_m)?;
    let sump_volume_kl = read_f64_or(tr, tr.t(keys::PERF_PROMPT_SUMP_VOLUME), d.sump_volume_kl)?;
    let pump_count = read_u32_or(tr, tr.t(keys::PERF_PROMPT_PUMP_COUNT), d.pump_count)?;
    let cost_prompt = format!(
        "{} [{}/kWh]",
        tr.t(keys::PERF_PROMPT_COST_RATE),
        cfg.currency_symbol
    );
    let cost_per_kwh = read_f64_or(tr, &cost_prompt, d.cost_per_kwh)?;
    let efficiency_percent =
        read_f64_or(tr, tr.t(keys::PERF_PROMPT_EFFICIENCY), d.efficiency_percent)?;

    let input = PerformanceInput {
        model,
        head_m,
        sump_volume_kl,
        pump_count,
        cost_per_kwh,
        efficiency_percent,
    };
    let result = pump::calculate(&input)?;
    print_performance_result(tr, cfg, &input.model, &result);
    Ok(())
}

/// 성능 계산 결과를 출력한다. 대화형 메뉴와 calc 서브커맨드가 공유한다.
pub fn print_performance_result(
    tr: &Translator,
    cfg: &Config,
    model: &str,
    result: &PerformanceResult,
) {
    println!("{}", tr.t(keys::PERF_RESULT_HEADING));
    println!("{} {}", tr.t(keys::PERF_RESULT_MODEL), model);
    println!(
        "{} {:.1} LPM",
        tr.t(keys::PERF_RESULT_PER_PUMP_FLOW),
        result.per_pump_discharge_lpm
    );
    println!(
        "{} {:.1} LPM ({:.1} m3/h)",
        tr.t(keys::PERF_RESULT_TOTAL_FLOW),
        result.total_discharge_lpm,
        convert_flow_rate(
            result.total_discharge_lpm,
            FlowRateUnit::LiterPerMinute,
            FlowRateUnit::CubicMeterPerHour
        )
    );
    if let Some(time) = &result.emptying_time {
        println!(
            "{} {:.1} {} ({:.2} {})",
            tr.t(keys::PERF_RESULT_EMPTYING_TIME),
            time.minutes,
            tr.t(keys::UNIT_MINUTES),
            time.days,
            tr.t(keys::UNIT_DAYS)
        );
    }
    if let Some(power) = &result.power_cost {
        println!("{} {:.2} kW", tr.t(keys::PERF_RESULT_POWER), power.total_kw);
        println!(
            "{} {}{:.2}",
            tr.t(keys::PERF_RESULT_ENERGY_COST),
            cfg.currency_symbol,
            power.total_cost
        );
    }
    for advisory in &result.advisories {
        match advisory {
            Advisory::HeadOutOfRange {
                min_head_m,
                max_head_m,
                ..
            } => println!(
                "{} ({:.1}~{:.1} m)",
                tr.t(keys::PERF_NOTE_EXTRAPOLATED),
                min_head_m,
                max_head_m
            ),
            Advisory::NegativeFlowClamped => println!("{}", tr.t(keys::PERF_NOTE_CLAMPED)),
            Advisory::NoRatedPower => println!("{}", tr.t(keys::PERF_NOTE_NO_RATED_POWER)),
            Advisory::IndeterminateTime => println!("{}", tr.t(keys::PERF_NOTE_INDETERMINATE)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Length),
        2 => Some(QuantityKind::Volume),
        3 => Some(QuantityKind::FlowRate),
        4 => Some(QuantityKind::Power),
        5 => Some(QuantityKind::Duration),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    let d = &cfg.default_inputs;
    println!(
        "{} {} {:.1} m, {} {:.1} kL, {} {}, {} {}{:.2}/kWh, {} {:.1} %",
        tr.t(keys::SETTINGS_CURRENT_DEFAULTS),
        tr.t(keys::PERF_PROMPT_HEAD),
        d.head_m,
        tr.t(keys::PERF_PROMPT_SUMP_VOLUME),
        d.sump_volume_kl,
        tr.t(keys::PERF_PROMPT_PUMP_COUNT),
        d.pump_count,
        tr.t(keys::PERF_PROMPT_COST_RATE),
        cfg.currency_symbol,
        d.cost_per_kwh,
        tr.t(keys::PERF_PROMPT_EFFICIENCY),
        d.efficiency_percent
    );
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_CURRENCY),
        cfg.currency_symbol
    );
    // 설정값과 이번 세션의 활성 언어를 함께 보여준다.
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto"),
        tr.language_code()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let sel = sel.trim();
    if sel.is_empty() {
        return Ok(());
    }
    match sel {
        "1" => {
            cfg.default_inputs.head_m =
                read_f64_or(tr, tr.t(keys::PERF_PROMPT_HEAD), cfg.default_inputs.head_m)?;
        }
        "2" => {
            cfg.default_inputs.sump_volume_kl = read_f64_or(
                tr,
                tr.t(keys::PERF_PROMPT_SUMP_VOLUME),
                cfg.default_inputs.sump_volume_kl,
            )?;
        }
        "3" => {
            cfg.default_inputs.pump_count = read_u32_or(
                tr,
                tr.t(keys::PERF_PROMPT_PUMP_COUNT),
                cfg.default_inputs.pump_count,
            )?;
        }
        "4" => {
            cfg.default_inputs.cost_per_kwh = read_f64_or(
                tr,
                tr.t(keys::PERF_PROMPT_COST_RATE),
                cfg.default_inputs.cost_per_kwh,
            )?;
        }
        "5" => {
            cfg.default_inputs.efficiency_percent = read_f64_or(
                tr,
                tr.t(keys::PERF_PROMPT_EFFICIENCY),
                cfg.default_inputs.efficiency_percent,
            )?;
        }
        "6" => {
            let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            let symbol = symbol.trim();
            if !symbol.is_empty() {
                cfg.currency_symbol = symbol.to_string();
            }
        }
        "7" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let code = code.trim();
            cfg.language = match code {
                "" | "auto" => None,
                other => Some(other.to_string()),
            };
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 엔터만 입력하면 기본값을 반환한다.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt} ({default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, prompt: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{prompt} ({default}): "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
