use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::{AppError, Outcome};
use crate::config::{Config, UnitSystem};
use crate::i18n::{keys, Translator};
use crate::ipr::FlowRegime;
use crate::quantity::QuantityKind;

/// 유정 유입 성능(IPR) 계산기.
///
/// 압력·유량·PI 입력은 config.toml 의 기본 단위로 해석한다.
#[derive(Debug, Parser)]
#[command(name = "petroleum_engineering_toolbox_cli", version, about)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 언어 코드 (ko, en, auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 언어팩 디렉터리 (기본: ./locales)
    #[arg(long, global = true)]
    pub locales: Option<String>,
    /// 결과를 JSON 으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Calc(CalcCommand),
    /// 대화형 메뉴 (인자가 없을 때 기본값)
    Menu,
}

/// 한 번의 계산 요청.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CalcCommand {
    /// Vogel IPR 유량
    #[command(allow_negative_numbers = true)]
    VogelRate {
        #[arg(long)]
        p_wf: f64,
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        q_max: f64,
    },
    /// 시험점 하나로 Vogel q_max 역산
    #[command(allow_negative_numbers = true)]
    VogelMaxRate {
        #[arg(long)]
        q1: f64,
        #[arg(long)]
        p_wf1: f64,
        #[arg(long)]
        p_r: f64,
    },
    /// 시험점 하나로 생산성 지수 계산
    #[command(allow_negative_numbers = true)]
    ProductivityIndex {
        #[arg(long)]
        q1: f64,
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        p_wf1: f64,
    },
    /// 선형 PI 유량
    #[command(allow_negative_numbers = true)]
    PiRate {
        #[arg(long)]
        p_wf: f64,
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        pi: f64,
    },
    /// 기포점 기준 복합 IPR (원유/총 액체 유량)
    #[command(allow_negative_numbers = true)]
    Composite {
        #[arg(long)]
        p_wf: f64,
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        p_bubble: f64,
        #[arg(long)]
        pi: f64,
        #[arg(long)]
        water_cut: f64,
    },
    /// 두 시험점으로 배압식 C, n 매칭
    #[command(allow_negative_numbers = true)]
    BackpressureMatch {
        #[arg(long)]
        q1: f64,
        #[arg(long)]
        p_wf1: f64,
        #[arg(long)]
        q2: f64,
        #[arg(long)]
        p_wf2: f64,
        #[arg(long)]
        p_r: f64,
    },
    /// 배압식 유량 (C 는 STB/d/psi^2n 기준)
    #[command(allow_negative_numbers = true)]
    BackpressureRate {
        #[arg(long)]
        c: f64,
        #[arg(long)]
        n: f64,
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        p_wf: f64,
    },
    /// 0 ~ p_r 구간 IPR 곡선
    Curve {
        /// 곡선 점 개수 (기본: 설정의 curve_points)
        #[arg(long)]
        points: Option<usize>,
        #[command(subcommand)]
        model: CurveModel,
    },
    /// 단위 변환
    #[command(allow_negative_numbers = true)]
    Convert {
        #[arg(value_enum)]
        kind: QuantityKind,
        value: f64,
        from: String,
        to: String,
    },
}

/// 곡선 생성에 사용할 모델.
#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum CurveModel {
    #[command(allow_negative_numbers = true)]
    Vogel {
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        q_max: f64,
    },
    #[command(allow_negative_numbers = true)]
    Linear {
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        pi: f64,
    },
    #[command(allow_negative_numbers = true)]
    Composite {
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        p_bubble: f64,
        #[arg(long)]
        pi: f64,
        #[arg(long)]
        water_cut: f64,
    },
    #[command(allow_negative_numbers = true)]
    Backpressure {
        #[arg(long)]
        p_r: f64,
        #[arg(long)]
        c: f64,
        #[arg(long)]
        n: f64,
    },
}

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    VogelRate,
    VogelMaxRate,
    ProductivityIndex,
    PiRate,
    Composite,
    BackpressureMatch,
    BackpressureRate,
    Curve,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_VOGEL_RATE,
        keys::MAIN_MENU_VOGEL_MAX_RATE,
        keys::MAIN_MENU_PRODUCTIVITY_INDEX,
        keys::MAIN_MENU_PI_RATE,
        keys::MAIN_MENU_COMPOSITE,
        keys::MAIN_MENU_BACKPRESSURE_MATCH,
        keys::MAIN_MENU_BACKPRESSURE_RATE,
        keys::MAIN_MENU_CURVE,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        if let Some(choice) = map_menu(sel.trim()) {
            return Ok(choice);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn map_menu(sel: &str) -> Option<MenuChoice> {
    match sel {
        "1" => Some(MenuChoice::VogelRate),
        "2" => Some(MenuChoice::VogelMaxRate),
        "3" => Some(MenuChoice::ProductivityIndex),
        "4" => Some(MenuChoice::PiRate),
        "5" => Some(MenuChoice::Composite),
        "6" => Some(MenuChoice::BackpressureMatch),
        "7" => Some(MenuChoice::BackpressureRate),
        "8" => Some(MenuChoice::Curve),
        "9" => Some(MenuChoice::UnitConversion),
        "10" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

// 라벨 뒤에 현재 단위를 붙여 입력을 받는다
struct Prompter<'a> {
    tr: &'a Translator,
    cfg: &'a Config,
}

impl Prompter<'_> {
    fn pressure(&self, key: &str) -> Result<f64, AppError> {
        let unit = self.cfg.default_units.pressure.symbol();
        read_f64(self.tr, &format!("{} [{unit}]: ", self.tr.t(key)))
    }

    fn rate(&self, key: &str) -> Result<f64, AppError> {
        let unit = self.cfg.default_units.flow_rate.symbol();
        read_f64(self.tr, &format!("{} [{unit}]: ", self.tr.t(key)))
    }

    fn pi(&self) -> Result<f64, AppError> {
        let unit = self.cfg.default_units.productivity_index.symbol();
        read_f64(self.tr, &format!("{} [{unit}]: ", self.tr.t(keys::PROMPT_PI)))
    }

    fn plain(&self, key: &str) -> Result<f64, AppError> {
        read_f64(self.tr, &self.tr.t(key))
    }
}

/// 메뉴 선택에 필요한 값을 입력받아 계산 요청을 만든다.
/// 설정/종료처럼 계산이 아닌 선택지는 `None` 을 반환한다.
pub fn prompt_command(
    choice: MenuChoice,
    tr: &Translator,
    cfg: &Config,
) -> Result<Option<CalcCommand>, AppError> {
    let p = Prompter { tr, cfg };
    let command = match choice {
        MenuChoice::VogelRate => CalcCommand::VogelRate {
            p_wf: p.pressure(keys::PROMPT_PWF)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
            q_max: p.rate(keys::PROMPT_QMAX)?,
        },
        MenuChoice::VogelMaxRate => CalcCommand::VogelMaxRate {
            q1: p.rate(keys::PROMPT_Q_TEST)?,
            p_wf1: p.pressure(keys::PROMPT_PWF_TEST)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
        },
        MenuChoice::ProductivityIndex => CalcCommand::ProductivityIndex {
            q1: p.rate(keys::PROMPT_Q_TEST)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
            p_wf1: p.pressure(keys::PROMPT_PWF_TEST)?,
        },
        MenuChoice::PiRate => CalcCommand::PiRate {
            p_wf: p.pressure(keys::PROMPT_PWF)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
            pi: p.pi()?,
        },
        MenuChoice::Composite => CalcCommand::Composite {
            p_wf: p.pressure(keys::PROMPT_PWF)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
            p_bubble: p.pressure(keys::PROMPT_PB)?,
            pi: p.pi()?,
            water_cut: p.plain(keys::PROMPT_WATER_CUT)?,
        },
        MenuChoice::BackpressureMatch => CalcCommand::BackpressureMatch {
            q1: p.rate(keys::PROMPT_Q_TEST)?,
            p_wf1: p.pressure(keys::PROMPT_PWF_TEST)?,
            q2: p.rate(keys::PROMPT_Q_TEST2)?,
            p_wf2: p.pressure(keys::PROMPT_PWF_TEST2)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
        },
        MenuChoice::BackpressureRate => CalcCommand::BackpressureRate {
            c: p.plain(keys::PROMPT_C)?,
            n: p.plain(keys::PROMPT_N)?,
            p_r: p.pressure(keys::PROMPT_PR)?,
            p_wf: p.pressure(keys::PROMPT_PWF)?,
        },
        MenuChoice::Curve => {
            let model = loop {
                let sel = read_line(&tr.t(keys::PROMPT_CURVE_MODEL))?;
                match sel.trim() {
                    "1" => {
                        break CurveModel::Vogel {
                            p_r: p.pressure(keys::PROMPT_PR)?,
                            q_max: p.rate(keys::PROMPT_QMAX)?,
                        }
                    }
                    "2" => {
                        break CurveModel::Linear {
                            p_r: p.pressure(keys::PROMPT_PR)?,
                            pi: p.pi()?,
                        }
                    }
                    "3" => {
                        break CurveModel::Composite {
                            p_r: p.pressure(keys::PROMPT_PR)?,
                            p_bubble: p.pressure(keys::PROMPT_PB)?,
                            pi: p.pi()?,
                            water_cut: p.plain(keys::PROMPT_WATER_CUT)?,
                        }
                    }
                    "4" => {
                        break CurveModel::Backpressure {
                            p_r: p.pressure(keys::PROMPT_PR)?,
                            c: p.plain(keys::PROMPT_C)?,
                            n: p.plain(keys::PROMPT_N)?,
                        }
                    }
                    _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
                }
            };
            CalcCommand::Curve {
                points: None,
                model,
            }
        }
        MenuChoice::UnitConversion => prompt_conversion(tr)?,
        MenuChoice::Settings | MenuChoice::Exit => return Ok(None),
    };
    Ok(Some(command))
}

/// 단위 변환 입력을 받는다.
fn prompt_conversion(tr: &Translator) -> Result<CalcCommand, AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match sel.trim() {
            "1" => break QuantityKind::Pressure,
            "2" => break QuantityKind::FlowRate,
            "3" => break QuantityKind::ProductivityIndex,
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    Ok(CalcCommand::Convert {
        kind,
        value,
        from: from.trim().to_string(),
        to: to.trim().to_string(),
    })
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let system = match sel.trim() {
        "" => return Ok(()),
        "1" => UnitSystem::Field,
        "2" => UnitSystem::Metric,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.apply_unit_system(system);
    tracing::info!(unit_system = ?system, "unit system changed");
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

/// 계산 결과를 출력한다. `json` 이면 serde_json 으로 직렬화한다.
pub fn print_outcome(tr: &Translator, outcome: &Outcome, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }
    match outcome {
        Outcome::Rate { q_oil, rate_unit } => {
            println!("{} {q_oil:.2} {rate_unit}", tr.t(keys::RESULT_OIL_RATE));
        }
        Outcome::MaxRate { q_max, rate_unit } => {
            println!("{} {q_max:.2} {rate_unit}", tr.t(keys::RESULT_MAX_RATE));
        }
        Outcome::ProductivityIndex { pi, pi_unit } => {
            println!("{} {pi:.4} {pi_unit}", tr.t(keys::RESULT_PI));
        }
        Outcome::Composite {
            regime,
            q_oil,
            q_liquid,
            rate_unit,
        } => {
            let regime_key = match regime {
                FlowRegime::SinglePhase => keys::REGIME_SINGLE_PHASE,
                FlowRegime::TwoPhase => keys::REGIME_TWO_PHASE,
            };
            println!("{} {}", tr.t(keys::RESULT_REGIME), tr.t(regime_key));
            println!("{} {q_oil:.2} {rate_unit}", tr.t(keys::RESULT_OIL_RATE));
            println!("{} {q_liquid:.2} {rate_unit}", tr.t(keys::RESULT_LIQUID_RATE));
        }
        Outcome::Backpressure { c, n } => {
            println!("{} {c:.6e}", tr.t(keys::RESULT_BACKPRESSURE_C));
            println!("{} {n:.4}", tr.t(keys::RESULT_BACKPRESSURE_N));
        }
        Outcome::Curve {
            pressure_unit,
            rate_unit,
            points,
        } => {
            println!("{} [{pressure_unit} | {rate_unit}]", tr.t(keys::CURVE_HEADER));
            for p in points {
                println!("{:>10.2} {:>12.2} {:>12.2}", p.p_wf, p.q_oil, p.q_liquid);
            }
        }
        Outcome::Converted { value, unit } => {
            println!("{} {value} {unit}", tr.t(keys::RESULT_CONVERTED));
        }
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    read_f64_from(tr, &mut io::stdin().lock(), prompt)
}

// 0 바이트 읽기는 입력 종료(EOF)로 본다
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_f64_from<R: BufRead>(
    tr: &Translator,
    input: &mut R,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_composite_subcommand() {
        let cli = Cli::try_parse_from([
            "petroleum_engineering_toolbox_cli",
            "--json",
            "composite",
            "--p-wf",
            "2300",
            "--p-r",
            "2550",
            "--p-bubble",
            "2100",
            "--pi",
            "2.0",
            "--water-cut",
            "0.5",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command.map(|c| match c {
                Command::Calc(calc) => Some(calc),
                Command::Menu => None,
            }),
            Some(Some(CalcCommand::Composite {
                p_wf: 2300.0,
                p_r: 2550.0,
                p_bubble: 2100.0,
                pi: 2.0,
                water_cut: 0.5,
            }))
        );
    }

    #[test]
    fn negative_pressures_reach_validation() {
        let cli = Cli::try_parse_from([
            "petroleum_engineering_toolbox_cli",
            "vogel-rate",
            "--p-wf",
            "-1",
            "--p-r",
            "100",
            "--q-max",
            "500",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Calc(CalcCommand::VogelRate { p_wf, .. })) if p_wf == -1.0
        ));
    }

    #[test]
    fn curve_takes_nested_model() {
        let cli = Cli::try_parse_from([
            "petroleum_engineering_toolbox_cli",
            "curve",
            "--points",
            "5",
            "vogel",
            "--p-r",
            "2500",
            "--q-max",
            "844.59",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Calc(CalcCommand::Curve {
                points: Some(5),
                model: CurveModel::Vogel { .. }
            }))
        ));
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["petroleum_engineering_toolbox_cli"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(map_menu("5"), Some(MenuChoice::Composite));
        assert_eq!(map_menu("10"), Some(MenuChoice::Settings));
        assert_eq!(map_menu("11"), None);
    }

    #[test]
    fn closed_input_ends_line_reads() {
        let mut input: &[u8] = b"";
        assert!(matches!(
            read_line_from(&mut input, "> "),
            Err(AppError::InputClosed)
        ));
    }

    #[test]
    fn number_prompt_stops_when_input_runs_out() {
        let tr = Translator::new("en");
        let mut input: &[u8] = b"abc\n";
        assert!(matches!(
            read_f64_from(&tr, &mut input, "> "),
            Err(AppError::InputClosed)
        ));

        let mut input: &[u8] = b"x\n42.5\n";
        assert_eq!(read_f64_from(&tr, &mut input, "> ").unwrap(), 42.5);
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut input: &[u8] = b"\n";
        assert_eq!(read_line_from(&mut input, "> ").unwrap(), "\n");
    }
}
