use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::{self, Config};
use crate::conversion;
use crate::i18n::{self, Translator};
use crate::ipr::{
    self, backpressure, composite_rates, vogel, FlowRegime, InflowModel, IprError, IprPoint,
};
use crate::ui_cli::{self, CalcCommand, Cli, Command, CurveModel, MenuChoice};
use crate::units::{flow_rate, pressure, productivity_index as pi_units};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// 단위 변환 오류
    #[error("unit conversion error: {0}")]
    Conversion(#[from] conversion::ConversionError),
    /// IPR 입력 검증 오류
    #[error("{0}")]
    Ipr(#[from] IprError),
    /// JSON 출력 오류
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
    /// 대화형 입력 중 표준 입력이 닫힘(EOF)
    #[error("standard input closed")]
    InputClosed,
}

/// 명령 실행 결과. 값은 모두 설정된 표시 단위로 환산되어 있다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Rate {
        q_oil: f64,
        rate_unit: &'static str,
    },
    MaxRate {
        q_max: f64,
        rate_unit: &'static str,
    },
    ProductivityIndex {
        pi: f64,
        pi_unit: &'static str,
    },
    Composite {
        regime: FlowRegime,
        q_oil: f64,
        q_liquid: f64,
        rate_unit: &'static str,
    },
    Backpressure {
        c: f64,
        n: f64,
    },
    Curve {
        pressure_unit: &'static str,
        rate_unit: &'static str,
        points: Vec<IprPoint>,
    },
    Converted {
        value: f64,
        unit: String,
    },
}

// 입력값(표시 단위) -> 필드 단위
fn psi(cfg: &Config, value: f64) -> f64 {
    pressure::to_psi(value, cfg.default_units.pressure)
}

fn stb_d(cfg: &Config, value: f64) -> f64 {
    flow_rate::to_stb_per_day(value, cfg.default_units.flow_rate)
}

fn pi_field(cfg: &Config, value: f64) -> f64 {
    pi_units::to_field(value, cfg.default_units.productivity_index)
}

// 필드 단위 -> 표시 단위
fn rate_out(cfg: &Config, value_stb_d: f64) -> f64 {
    flow_rate::from_stb_per_day(value_stb_d, cfg.default_units.flow_rate)
}

impl CurveModel {
    fn to_model(&self, cfg: &Config) -> InflowModel {
        match *self {
            CurveModel::Vogel { p_r, q_max } => InflowModel::Vogel {
                p_r: psi(cfg, p_r),
                q_max: stb_d(cfg, q_max),
            },
            CurveModel::Linear { p_r, pi } => InflowModel::Linear {
                p_r: psi(cfg, p_r),
                pi: pi_field(cfg, pi),
            },
            CurveModel::Composite {
                p_r,
                p_bubble,
                pi,
                water_cut,
            } => InflowModel::Composite {
                p_r: psi(cfg, p_r),
                p_bubble: psi(cfg, p_bubble),
                pi: pi_field(cfg, pi),
                water_cut,
            },
            CurveModel::Backpressure { p_r, c, n } => InflowModel::Backpressure {
                p_r: psi(cfg, p_r),
                c,
                n,
            },
        }
    }
}

/// 계산 명령 하나를 실행한다. 입력은 설정된 기본 단위로 해석한다.
pub fn execute(command: &CalcCommand, cfg: &Config) -> Result<Outcome, AppError> {
    let units = cfg.default_units;
    let rate_unit = units.flow_rate.symbol();
    tracing::debug!(?command, "executing command");
    let outcome = match *command {
        CalcCommand::VogelRate { p_wf, p_r, q_max } => {
            let q = vogel::rate(psi(cfg, p_wf), psi(cfg, p_r), stb_d(cfg, q_max))?;
            Outcome::Rate {
                q_oil: rate_out(cfg, q),
                rate_unit,
            }
        }
        CalcCommand::VogelMaxRate { q1, p_wf1, p_r } => {
            let q_max = vogel::max_rate(stb_d(cfg, q1), psi(cfg, p_wf1), psi(cfg, p_r))?;
            Outcome::MaxRate {
                q_max: rate_out(cfg, q_max),
                rate_unit,
            }
        }
        CalcCommand::ProductivityIndex { q1, p_r, p_wf1 } => {
            let pi = ipr::productivity_index(stb_d(cfg, q1), psi(cfg, p_r), psi(cfg, p_wf1))?;
            Outcome::ProductivityIndex {
                pi: pi_units::from_field(pi, units.productivity_index),
                pi_unit: units.productivity_index.symbol(),
            }
        }
        CalcCommand::PiRate { p_wf, p_r, pi } => {
            let q =
                ipr::productivity_index::rate(psi(cfg, p_wf), psi(cfg, p_r), pi_field(cfg, pi))?;
            Outcome::Rate {
                q_oil: rate_out(cfg, q),
                rate_unit,
            }
        }
        CalcCommand::Composite {
            p_wf,
            p_r,
            p_bubble,
            pi,
            water_cut,
        } => {
            let rates = composite_rates(
                psi(cfg, p_wf),
                psi(cfg, p_r),
                psi(cfg, p_bubble),
                pi_field(cfg, pi),
                water_cut,
            )?;
            Outcome::Composite {
                regime: rates.regime,
                q_oil: rate_out(cfg, rates.q_oil),
                q_liquid: rate_out(cfg, rates.q_liquid),
                rate_unit,
            }
        }
        CalcCommand::BackpressureMatch {
            q1,
            p_wf1,
            q2,
            p_wf2,
            p_r,
        } => {
            let constants = backpressure::match_constants(
                stb_d(cfg, q1),
                psi(cfg, p_wf1),
                stb_d(cfg, q2),
                psi(cfg, p_wf2),
                psi(cfg, p_r),
            )?;
            Outcome::Backpressure {
                c: constants.c,
                n: constants.n,
            }
        }
        CalcCommand::BackpressureRate { c, n, p_r, p_wf } => {
            let q = backpressure::rate(c, n, psi(cfg, p_r), psi(cfg, p_wf))?;
            Outcome::Rate {
                q_oil: rate_out(cfg, q),
                rate_unit,
            }
        }
        CalcCommand::Curve { ref model, points } => {
            let points = points.unwrap_or(cfg.curve_points);
            let curve = ipr::ipr_curve(&model.to_model(cfg), points)?;
            let points = curve
                .into_iter()
                .map(|p| IprPoint {
                    p_wf: pressure::from_psi(p.p_wf, units.pressure),
                    q_oil: rate_out(cfg, p.q_oil),
                    q_liquid: rate_out(cfg, p.q_liquid),
                })
                .collect();
            Outcome::Curve {
                pressure_unit: units.pressure.symbol(),
                rate_unit,
                points,
            }
        }
        CalcCommand::Convert {
            kind,
            value,
            ref from,
            ref to,
        } => Outcome::Converted {
            value: conversion::convert(kind, value, from, to)?,
            unit: to.clone(),
        },
    };
    Ok(outcome)
}

/// 명령줄 인자를 받아 설정을 로드하고 요청된 명령 또는 대화형 메뉴를 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));
    let mut cfg = config::load_or_default_at(&config_path)?;
    for warning in cfg.validate() {
        tracing::warn!(%warning, "suspicious config value");
    }
    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(lang = tr.language().as_code(), "language resolved");

    match cli.command {
        None | Some(Command::Menu) => run_menu(&mut cfg, &tr, &config_path),
        Some(Command::Calc(command)) => {
            let outcome = execute(&command, &cfg)?;
            ui_cli::print_outcome(&tr, &outcome, cli.json)
        }
    }
}

/// 대화형 메뉴 루프를 실행한다. 계산 오류는 출력 후 메뉴로 돌아간다.
/// 표준 입력이 닫히면 설정을 저장하고 종료 선택과 같이 끝낸다.
pub fn run_menu(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        match menu_step(config, tr, config_path) {
            Ok(true) => {}
            Ok(false) => break,
            Err(AppError::InputClosed) => {
                tracing::info!("standard input closed, leaving menu");
                config.save_to(config_path)?;
                println!();
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

// 메뉴 한 바퀴. 계속하면 true
fn menu_step(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<bool, AppError> {
    match ui_cli::main_menu(tr)? {
        MenuChoice::Settings => {
            ui_cli::handle_settings(tr, config)?;
            config.save_to(config_path)?;
        }
        MenuChoice::Exit => {
            config.save_to(config_path)?;
            println!("{}", tr.t(i18n::keys::APP_EXIT));
            return Ok(false);
        }
        choice => {
            let Some(command) = ui_cli::prompt_command(choice, tr, config)? else {
                return Ok(true);
            };
            match execute(&command, config) {
                Ok(outcome) => ui_cli::print_outcome(tr, &outcome, false)?,
                Err(AppError::Ipr(err)) => {
                    tracing::info!(%err, "rejected input");
                    println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
                }
                Err(AppError::Conversion(err)) => {
                    println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
                }
                Err(err) => return Err(err),
            }
        }
    }
    Ok(true)
}
