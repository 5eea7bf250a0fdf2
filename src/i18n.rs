use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_VOGEL_RATE: &str = "main_menu.vogel_rate";
    pub const MAIN_MENU_VOGEL_MAX_RATE: &str = "main_menu.vogel_max_rate";
    pub const MAIN_MENU_PRODUCTIVITY_INDEX: &str = "main_menu.productivity_index";
    pub const MAIN_MENU_PI_RATE: &str = "main_menu.pi_rate";
    pub const MAIN_MENU_COMPOSITE: &str = "main_menu.composite";
    pub const MAIN_MENU_BACKPRESSURE_MATCH: &str = "main_menu.backpressure_match";
    pub const MAIN_MENU_BACKPRESSURE_RATE: &str = "main_menu.backpressure_rate";
    pub const MAIN_MENU_CURVE: &str = "main_menu.curve";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const PROMPT_PWF: &str = "prompt.p_wf";
    pub const PROMPT_PR: &str = "prompt.p_r";
    pub const PROMPT_PB: &str = "prompt.p_bubble";
    pub const PROMPT_QMAX: &str = "prompt.q_max";
    pub const PROMPT_Q_TEST: &str = "prompt.q_test";
    pub const PROMPT_PWF_TEST: &str = "prompt.p_wf_test";
    pub const PROMPT_Q_TEST2: &str = "prompt.q_test2";
    pub const PROMPT_PWF_TEST2: &str = "prompt.p_wf_test2";
    pub const PROMPT_PI: &str = "prompt.pi";
    pub const PROMPT_WATER_CUT: &str = "prompt.water_cut";
    pub const PROMPT_C: &str = "prompt.c";
    pub const PROMPT_N: &str = "prompt.n";
    pub const PROMPT_CURVE_MODEL: &str = "prompt.curve_model";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";

    pub const RESULT_OIL_RATE: &str = "result.oil_rate";
    pub const RESULT_LIQUID_RATE: &str = "result.liquid_rate";
    pub const RESULT_MAX_RATE: &str = "result.max_rate";
    pub const RESULT_PI: &str = "result.productivity_index";
    pub const RESULT_REGIME: &str = "result.regime";
    pub const REGIME_SINGLE_PHASE: &str = "regime.single_phase";
    pub const REGIME_TWO_PHASE: &str = "regime.two_phase";
    pub const RESULT_BACKPRESSURE_C: &str = "result.backpressure_c";
    pub const RESULT_BACKPRESSURE_N: &str = "result.backpressure_n";
    pub const RESULT_CONVERTED: &str = "result.converted";
    pub const CURVE_HEADER: &str = "result.curve_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if let Some(map) = &overrides {
            tracing::debug!(lang = lang_code, entries = map.len(), "loaded language pack");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩이 우선이며, 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> Cow<'_, str> {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return Cow::Borrowed(v.as_str());
        }
        match self.lang {
            Language::En => Cow::Borrowed(en(key).unwrap_or_else(|| ko(key))),
            Language::Ko => Cow::Borrowed(ko(key)),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LC_ALL", "LANG"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Petroleum Engineering Toolbox ===",
        MAIN_MENU_VOGEL_RATE => "1) Vogel 유량",
        MAIN_MENU_VOGEL_MAX_RATE => "2) Vogel 최대 유량(q_max) 역산",
        MAIN_MENU_PRODUCTIVITY_INDEX => "3) 생산성 지수(PI) 계산",
        MAIN_MENU_PI_RATE => "4) PI 선형 유량",
        MAIN_MENU_COMPOSITE => "5) 복합 IPR (기포점 기준)",
        MAIN_MENU_BACKPRESSURE_MATCH => "6) 배압식 C, n 매칭",
        MAIN_MENU_BACKPRESSURE_RATE => "7) 배압식 유량",
        MAIN_MENU_CURVE => "8) IPR 곡선",
        MAIN_MENU_UNIT_CONVERSION => "9) 단위 변환기",
        MAIN_MENU_SETTINGS => "10) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_PWF => "유동 저부압 p_wf",
        PROMPT_PR => "저류층 압력 p_r",
        PROMPT_PB => "기포점 압력 p_b",
        PROMPT_QMAX => "최대 유량 q_max",
        PROMPT_Q_TEST => "시험 유량 q1",
        PROMPT_PWF_TEST => "시험 유동 저부압 p_wf1",
        PROMPT_Q_TEST2 => "두 번째 시험 유량 q2",
        PROMPT_PWF_TEST2 => "두 번째 시험 유동 저부압 p_wf2",
        PROMPT_PI => "생산성 지수 PI",
        PROMPT_WATER_CUT => "수분율 w_c [0-1]: ",
        PROMPT_C => "배압식 계수 C [STB/d/psi^2n]: ",
        PROMPT_N => "배압식 지수 n: ",
        PROMPT_CURVE_MODEL => "모델 선택 (1=Vogel 2=선형 PI 3=복합 4=배압식): ",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 압력  2) 유량  3) 생산성 지수",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: psi, stb/d, m3/d/bar): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: bar, m3/d, stb/d/psi): ",
        RESULT_OIL_RATE => "원유 유량:",
        RESULT_LIQUID_RATE => "총 액체 유량:",
        RESULT_MAX_RATE => "최대 유량(AOF):",
        RESULT_PI => "생산성 지수:",
        RESULT_REGIME => "유동 영역:",
        REGIME_SINGLE_PHASE => "기포점 이상 (단상 선형)",
        REGIME_TWO_PHASE => "기포점 미만 (2상 Vogel/PI 혼합)",
        RESULT_BACKPRESSURE_C => "계수 C:",
        RESULT_BACKPRESSURE_N => "지수 n:",
        RESULT_CONVERTED => "변환 결과:",
        CURVE_HEADER => "p_wf | 원유 유량 | 총 액체 유량",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Field (psia, STB/d)  2) Metric (bar, m3/d)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 다음으로 설정되었습니다:",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Petroleum Engineering Toolbox ===",
        MAIN_MENU_VOGEL_RATE => "1) Vogel rate",
        MAIN_MENU_VOGEL_MAX_RATE => "2) Vogel maximum rate (q_max) from a test point",
        MAIN_MENU_PRODUCTIVITY_INDEX => "3) Productivity index (PI)",
        MAIN_MENU_PI_RATE => "4) Linear PI rate",
        MAIN_MENU_COMPOSITE => "5) Composite IPR (bubble point)",
        MAIN_MENU_BACKPRESSURE_MATCH => "6) Back-pressure C, n match",
        MAIN_MENU_BACKPRESSURE_RATE => "7) Back-pressure rate",
        MAIN_MENU_CURVE => "8) IPR curve",
        MAIN_MENU_UNIT_CONVERSION => "9) Unit converter",
        MAIN_MENU_SETTINGS => "10) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        PROMPT_PWF => "Bottomhole flowing pressure p_wf",
        PROMPT_PR => "Reservoir pressure p_r",
        PROMPT_PB => "Bubble-point pressure p_b",
        PROMPT_QMAX => "Maximum rate q_max",
        PROMPT_Q_TEST => "Test rate q1",
        PROMPT_PWF_TEST => "Test flowing pressure p_wf1",
        PROMPT_Q_TEST2 => "Second test rate q2",
        PROMPT_PWF_TEST2 => "Second test flowing pressure p_wf2",
        PROMPT_PI => "Productivity index PI",
        PROMPT_WATER_CUT => "Water cut w_c [0-1]: ",
        PROMPT_C => "Back-pressure coefficient C [STB/d/psi^2n]: ",
        PROMPT_N => "Back-pressure exponent n: ",
        PROMPT_CURVE_MODEL => "Model (1=Vogel 2=Linear PI 3=Composite 4=Back-pressure): ",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Pressure  2) Flow rate  3) Productivity index",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: psi, stb/d, m3/d/bar): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: bar, m3/d, stb/d/psi): ",
        RESULT_OIL_RATE => "Oil rate:",
        RESULT_LIQUID_RATE => "Total liquid rate:",
        RESULT_MAX_RATE => "Maximum rate (AOF):",
        RESULT_PI => "Productivity index:",
        RESULT_REGIME => "Flow regime:",
        REGIME_SINGLE_PHASE => "at or above bubble point (single-phase linear)",
        REGIME_TWO_PHASE => "below bubble point (two-phase Vogel/PI blend)",
        RESULT_BACKPRESSURE_C => "Coefficient C:",
        RESULT_BACKPRESSURE_N => "Exponent n:",
        RESULT_CONVERTED => "Result:",
        CURVE_HEADER => "p_wf | oil rate | liquid rate",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Field (psia, STB/d)  2) Metric (bar, m3/d)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
