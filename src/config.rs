use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::ipr::DEFAULT_CURVE_POINTS;
use crate::units::*;

/// 기본 설정 파일 경로.
pub const CONFIG_FILE: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 유전 단위(psia, STB/day). 내부 계산 기본값.
    Field,
    /// 미터법(bar, m³/day)
    Metric,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub pressure: PressureUnit,
    pub flow_rate: FlowRateUnit,
    pub productivity_index: ProductivityIndexUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 해당하는 기본 단위 세트.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Field => Self {
                pressure: PressureUnit::Psi,
                flow_rate: FlowRateUnit::StbPerDay,
                productivity_index: ProductivityIndexUnit::StbPerDayPerPsi,
            },
            UnitSystem::Metric => Self {
                pressure: PressureUnit::Bar,
                flow_rate: FlowRateUnit::M3PerDay,
                productivity_index: ProductivityIndexUnit::M3PerDayPerBar,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Field)
    }
}

fn default_curve_points() -> usize {
    DEFAULT_CURVE_POINTS
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 언어 코드(ko/en). 없으면 시스템 로케일을 따른다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// IPR 곡선 분할 수
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
    // TOML 테이블은 단순 값 뒤에 와야 하므로 마지막 필드로 둔다
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Field,
            language: None,
            curve_points: DEFAULT_CURVE_POINTS,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 치명적이지 않은 설정 경고.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 지정한 경로(기본 config.toml)의 설정을 로드하거나 없으면 기본 설정을 그 경로에 생성한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let cfg = load_from(path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

/// 설정 파일을 읽는다. 파일이 없으면 오류.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 단위 시스템을 바꾸고 기본 단위를 해당 프리셋으로 재설정한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }

    /// 설정 값의 이상 여부를 점검한다. 경고는 동작을 막지 않는다.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.curve_points < 2 {
            warnings.push(ConfigWarning {
                field: "curve_points",
                message: format!(
                    "{} is below the minimum of 2; curve commands will fail",
                    self.curve_points
                ),
            });
        }
        if self.default_units != DefaultUnits::for_system(self.unit_system) {
            warnings.push(ConfigWarning {
                field: "default_units",
                message: format!(
                    "units differ from the {:?} preset; the explicit units are used",
                    self.unit_system
                ),
            });
        }
        warnings
    }
}
