use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::purity::{DeltaFlag, PurityCategory};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const DISCLAIMER: &str = "general.disclaimer";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_TABLE: &str = "main_menu.table";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALC_HEADING: &str = "calc.heading";
    pub const PROMPT_AIR_WEIGHT: &str = "prompt.air_weight";
    pub const PROMPT_WATER_WEIGHT: &str = "prompt.water_weight";
    pub const PROMPT_WATER_TEMPERATURE: &str = "prompt.water_temperature";

    pub const RESULT_DENSITY: &str = "result.density";
    pub const RESULT_WATER_DENSITY: &str = "result.water_density";
    pub const RESULT_GOLD_PERCENT: &str = "result.gold_percent";
    pub const RESULT_KARAT_FROM_PERCENT: &str = "result.karat_from_percent";
    pub const RESULT_KARAT_FROM_DENSITY: &str = "result.karat_from_density";
    pub const RESULT_INDETERMINATE: &str = "result.indeterminate";
    pub const RESULT_FINAL_RANGE: &str = "result.final_range";
    pub const RESULT_CATEGORY: &str = "result.category";
    pub const RESULT_DELTA: &str = "result.delta";

    pub const CATEGORY_VERY_HIGH: &str = "category.very_high";
    pub const CATEGORY_HIGH: &str = "category.high";
    pub const CATEGORY_MEDIUM: &str = "category.medium";
    pub const CATEGORY_LOW: &str = "category.low";
    pub const CATEGORY_VERY_LOW: &str = "category.very_low";
    pub const CATEGORY_NOTE_VERY_HIGH: &str = "category_note.very_high";
    pub const CATEGORY_NOTE_HIGH: &str = "category_note.high";
    pub const CATEGORY_NOTE_MEDIUM: &str = "category_note.medium";
    pub const CATEGORY_NOTE_LOW: &str = "category_note.low";
    pub const CATEGORY_NOTE_VERY_LOW: &str = "category_note.very_low";

    pub const DELTA_NOTE_NONE: &str = "delta_note.none";
    pub const DELTA_NOTE_OK: &str = "delta_note.ok";
    pub const DELTA_NOTE_WARN: &str = "delta_note.warn";

    pub const TABLE_HEADING: &str = "table.heading";
    pub const TABLE_PROMPT_FILTER: &str = "table.prompt_filter";
    pub const TABLE_COLUMNS: &str = "table.columns";
    pub const TABLE_EMPTY: &str = "table.empty";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const MASS_UNIT_OPTIONS: &str = "unit.mass_options";
    pub const TEMPERATURE_UNIT_OPTIONS: &str = "unit.temperature_options";
    pub const PROMPT_LANGUAGE: &str = "prompt.language";
    pub const PROMPT_DEFAULT_TEMPERATURE: &str = "prompt.default_temperature";
    pub const OUTPUT_OPTIONS: &str = "settings.output_options";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
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
        Self {
            overrides,
            ..Self::new(lang_code)
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// 순도 등급의 표시 이름.
    pub fn category_label(&self, category: PurityCategory) -> &str {
        use keys::*;
        self.t(match category {
            PurityCategory::VeryHigh => CATEGORY_VERY_HIGH,
            PurityCategory::High => CATEGORY_HIGH,
            PurityCategory::Medium => CATEGORY_MEDIUM,
            PurityCategory::Low => CATEGORY_LOW,
            PurityCategory::VeryLow => CATEGORY_VERY_LOW,
        })
    }

    /// 순도 등급 설명.
    pub fn category_note(&self, category: PurityCategory) -> &str {
        use keys::*;
        self.t(match category {
            PurityCategory::VeryHigh => CATEGORY_NOTE_VERY_HIGH,
            PurityCategory::High => CATEGORY_NOTE_HIGH,
            PurityCategory::Medium => CATEGORY_NOTE_MEDIUM,
            PurityCategory::Low => CATEGORY_NOTE_LOW,
            PurityCategory::VeryLow => CATEGORY_NOTE_VERY_LOW,
        })
    }

    /// 일관성 점검 설명. 비교 대상이 없으면 별도 문구.
    pub fn delta_note(&self, flag: DeltaFlag, has_comparator: bool) -> &str {
        use keys::*;
        self.t(match (flag, has_comparator) {
            (_, false) => DELTA_NOTE_NONE,
            (DeltaFlag::Ok, true) => DELTA_NOTE_OK,
            (DeltaFlag::Warn, true) => DELTA_NOTE_WARN,
        })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
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
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 중첩 테이블은 점으로 이은 키로 펼친다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
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
        DISCLAIMER => "※ 선별용 추정치입니다. 감정/인증을 대신하지 않습니다.",
        MAIN_MENU_TITLE => "\n=== Gold Karat Toolbox ===",
        MAIN_MENU_CALCULATE => "1) 카랏 추정",
        MAIN_MENU_TABLE => "2) 기준 밀도표",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALC_HEADING => "\n-- 카랏 추정 (정수압 칭량) --",
        PROMPT_AIR_WEIGHT => "공기 중 무게",
        PROMPT_WATER_WEIGHT => "수중 무게",
        PROMPT_WATER_TEMPERATURE => "수온 (비우면 기본값)",
        RESULT_DENSITY => "밀도:",
        RESULT_WATER_DENSITY => "물 밀도(보정):",
        RESULT_GOLD_PERCENT => "금 함량(추정):",
        RESULT_KARAT_FROM_PERCENT => "함량 기반 카랏:",
        RESULT_KARAT_FROM_DENSITY => "밀도표 기반 카랏:",
        RESULT_INDETERMINATE => "판정 불가",
        RESULT_FINAL_RANGE => "최종 범위:",
        RESULT_CATEGORY => "순도 등급:",
        RESULT_DELTA => "추정 차이:",
        CATEGORY_VERY_HIGH => "매우 높음",
        CATEGORY_HIGH => "높음",
        CATEGORY_MEDIUM => "보통",
        CATEGORY_LOW => "낮음",
        CATEGORY_VERY_LOW => "매우 낮음",
        CATEGORY_NOTE_VERY_HIGH => "22K 이상 고순도 금(골드바, 순금 장신구)에 해당합니다.",
        CATEGORY_NOTE_HIGH => "18K 계열 귀금속 합금에 해당합니다.",
        CATEGORY_NOTE_MEDIUM => "일상 장신구에 흔한 14K 계열 합금에 해당합니다.",
        CATEGORY_NOTE_LOW => "10K 계열 합금으로, 다른 금속 비중이 큽니다.",
        CATEGORY_NOTE_VERY_LOW => "일반 금 합금보다 낮습니다. 도금/필드 제품이거나 금이 아닐 수 있습니다.",
        DELTA_NOTE_NONE => "밀도표 기반 비교값이 없습니다.",
        DELTA_NOTE_OK => "두 추정값이 2K 이내로 일치합니다.",
        DELTA_NOTE_WARN => {
            "두 추정값이 2K 이상 차이 납니다. 보석/비금 부품, 땜납, 내부 공극, 기포, 측정 방법(표면장력, 용기 접촉)을 확인하세요."
        }
        TABLE_HEADING => "\n-- 기준 밀도표 --",
        TABLE_PROMPT_FILTER => "검색어 (예: 18, 비우면 전체): ",
        TABLE_COLUMNS => "카랏     함량(%)   밀도 범위(g/cm³)",
        TABLE_EMPTY => "일치하는 항목이 없습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 무게 단위  2) 수온 단위  3) 기본 수온  4) 언어  5) 출력 형식",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        MASS_UNIT_OPTIONS => "무게 단위: 1=g 2=kg 3=ozt 4=ct 5=lb",
        TEMPERATURE_UNIT_OPTIONS => "수온 단위: 1=°C 2=°F 3=K",
        PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        PROMPT_DEFAULT_TEMPERATURE => "기본 수온 [°C]: ",
        OUTPUT_OPTIONS => "출력 형식: 1=텍스트 2=JSON",
        _ => "[missing]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "error",
        APP_EXIT => "Exiting.",
        DISCLAIMER => "Note: screening estimate only; not a substitute for assay or certification.",
        MAIN_MENU_TITLE => "\n=== Gold Karat Toolbox ===",
        MAIN_MENU_CALCULATE => "1) Estimate karat",
        MAIN_MENU_TABLE => "2) Reference density table",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALC_HEADING => "\n-- Karat estimate (hydrostatic weighing) --",
        PROMPT_AIR_WEIGHT => "Weight in air",
        PROMPT_WATER_WEIGHT => "Weight in water",
        PROMPT_WATER_TEMPERATURE => "Water temperature (blank = default)",
        RESULT_DENSITY => "Density:",
        RESULT_WATER_DENSITY => "Water density (corrected):",
        RESULT_GOLD_PERCENT => "Gold content (est.):",
        RESULT_KARAT_FROM_PERCENT => "Karat from content:",
        RESULT_KARAT_FROM_DENSITY => "Karat from table:",
        RESULT_INDETERMINATE => "indeterminate",
        RESULT_FINAL_RANGE => "Final range:",
        RESULT_CATEGORY => "Purity category:",
        RESULT_DELTA => "Estimate delta:",
        CATEGORY_VERY_HIGH => "Very High",
        CATEGORY_HIGH => "High",
        CATEGORY_MEDIUM => "Medium",
        CATEGORY_LOW => "Low",
        CATEGORY_VERY_LOW => "Very Low",
        CATEGORY_NOTE_VERY_HIGH => PurityCategory::VeryHigh.note(),
        CATEGORY_NOTE_HIGH => PurityCategory::High.note(),
        CATEGORY_NOTE_MEDIUM => PurityCategory::Medium.note(),
        CATEGORY_NOTE_LOW => PurityCategory::Low.note(),
        CATEGORY_NOTE_VERY_LOW => PurityCategory::VeryLow.note(),
        DELTA_NOTE_NONE => "No density-based comparator available.",
        DELTA_NOTE_OK => "Both estimates agree within 2K.",
        DELTA_NOTE_WARN => {
            "Estimates differ by 2K or more. Check for gemstones or inserts, solder, voids, trapped air, or weighing technique."
        }
        TABLE_HEADING => "\n-- Reference density table --",
        TABLE_PROMPT_FILTER => "Filter (e.g. 18, blank for all): ",
        TABLE_COLUMNS => "Karat    Gold (%)  Density (g/cm³)",
        TABLE_EMPTY => "No matching rows.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => {
            "1) Mass unit  2) Temperature unit  3) Default water temperature  4) Language  5) Output format"
        }
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        MASS_UNIT_OPTIONS => "Mass units: 1=g 2=kg 3=ozt 4=ct 5=lb",
        TEMPERATURE_UNIT_OPTIONS => "Temperature units: 1=°C 2=°F 3=K",
        PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        PROMPT_DEFAULT_TEMPERATURE => "Default water temperature [°C]: ",
        OUTPUT_OPTIONS => "Output format: 1=text 2=JSON",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_korean_differ() {
        let en = Translator::new("en");
        let ko = Translator::new("ko-kr");
        assert_eq!(en.lang, Language::En);
        assert_eq!(ko.lang, Language::Ko);
        assert_eq!(en.t(keys::CATEGORY_HIGH), "High");
        assert_eq!(ko.t(keys::CATEGORY_HIGH), "높음");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(Translator::new("xx").lang, Language::En);
    }

    #[test]
    fn english_category_notes_match_core() {
        let en = Translator::new("en");
        for category in [
            PurityCategory::VeryHigh,
            PurityCategory::High,
            PurityCategory::Medium,
            PurityCategory::Low,
            PurityCategory::VeryLow,
        ] {
            assert_eq!(en.category_note(category), category.note());
        }
    }

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-US")), "en");
    }

    #[test]
    fn nested_toml_keys_are_flattened() {
        let map = parse_toml_to_map("[category]\nhigh = \"Hoch\"\n").unwrap();
        assert_eq!(map.get("category.high").map(String::as_str), Some("Hoch"));
    }
}
