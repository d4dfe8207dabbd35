use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const TAB_CALCULATOR: &str = "tab.calculator";
    pub const TAB_SETTINGS: &str = "tab.settings";
    pub const TAB_ABOUT: &str = "tab.about";
    pub const NAV_HEADING: &str = "nav.heading";

    pub const FIELD_PURCHASE_COST: &str = "field.purchase_cost";
    pub const FIELD_LIFESPAN: &str = "field.lifespan";
    pub const FIELD_SERVICE_COST: &str = "field.service_cost";
    pub const FIELD_INTEREST_RATE: &str = "field.interest_rate";
    pub const FIELD_DEDUCTION: &str = "field.deduction";

    pub const UNIT_CURRENCY: &str = "unit.currency";
    pub const UNIT_CURRENCY_PER_YEAR: &str = "unit.currency_per_year";
    pub const UNIT_YEARS: &str = "unit.years";
    pub const UNIT_PERCENT: &str = "unit.percent";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_MAX_COST_ZERO_BENEFIT: &str = "result.max_cost_zero_benefit";
    pub const RESULT_TOTAL_BENEFIT: &str = "result.total_benefit";
    pub const RESULT_YEARLY_BENEFIT: &str = "result.yearly_benefit";
    pub const RESULT_MONTHLY_BENEFIT: &str = "result.monthly_benefit";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_RESET: &str = "settings.reset";
    pub const SETTINGS_RESET_DONE: &str = "settings.reset_done";
    pub const SETTINGS_RESET_HINT: &str = "settings.reset_hint";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_WINDOW_ALPHA: &str = "settings.window_alpha";

    pub const ABOUT_HEADING: &str = "about.heading";
    pub const ABOUT_INTRO: &str = "about.intro";
    pub const ABOUT_FORMULA_MAX_COST: &str = "about.formula_max_cost";
    pub const ABOUT_FORMULA_BENEFIT: &str = "about.formula_benefit";
    pub const ABOUT_FORMULA_DEDUCTION: &str = "about.formula_deduction";

    pub const MENU_TITLE: &str = "menu.title";
    pub const MENU_EDIT: &str = "menu.edit";
    pub const MENU_RESET: &str = "menu.reset";
    pub const MENU_FORMULAS: &str = "menu.formulas";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_KEEP_CURRENT: &str = "prompt.keep_current";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Sv,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Sv
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Sv => "sv",
            Language::En => "en",
        }
    }

    /// 언어 선택 목록에 쓰는 자국어 이름.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Sv => "Svenska",
            Language::En => "English",
        }
    }

    pub const ALL: [Language; 2] = [Language::Sv, Language::En];
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(sv/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 sv로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if pack_dir.is_some() && overrides.is_none() {
            log::warn!("no language pack for {lang_code} in {pack_dir:?}, using built-in strings");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 영어 번역이 없으면 스웨덴어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| sv(key)),
            Language::Sv => sv(key),
        };
        builtin.unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "sv".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("sv") => Some("sv".into()),
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
        "sv" => Some("sv".into()),
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

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [table] 중첩.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
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

fn sv(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Avslutar.",
        APP_TITLE => "Förmånscykel – kalkylator",
        TAB_CALCULATOR => "Kalkylator",
        TAB_SETTINGS => "Inställningar",
        TAB_ABOUT => "Om beräkningen",
        NAV_HEADING => "Meny",
        FIELD_PURCHASE_COST => "Inköpspris",
        FIELD_LIFESPAN => "Livslängd",
        FIELD_SERVICE_COST => "Servicekostnad per år",
        FIELD_INTEREST_RATE => "Statslåneränta",
        FIELD_DEDUCTION => "Avdrag per år",
        UNIT_CURRENCY => "kr",
        UNIT_CURRENCY_PER_YEAR => "kr/år",
        UNIT_YEARS => "år",
        UNIT_PERCENT => "%",
        RESULT_HEADING => "Resultat",
        RESULT_MAX_COST_ZERO_BENEFIT => "Maxpris utan förmånsvärde",
        RESULT_TOTAL_BENEFIT => "Förmånsvärde per år (före avdrag)",
        RESULT_YEARLY_BENEFIT => "Skattepliktig förmån per år",
        RESULT_MONTHLY_BENEFIT => "Skattepliktig förmån per månad",
        SETTINGS_HEADING => "Inställningar",
        SETTINGS_RESET => "Återställ standardvärden",
        SETTINGS_RESET_DONE => "Återställt! ✓",
        SETTINGS_RESET_HINT => "Livslängd, servicekostnad, ränta och avdrag återställs. Inköpspriset behålls.",
        SETTINGS_LANGUAGE => "Språk",
        SETTINGS_WINDOW_ALPHA => "Fönstrets opacitet",
        ABOUT_HEADING => "Så räknar vi",
        ABOUT_INTRO => "Förmånsvärdet är årlig värdeminskning plus service plus en kapitalkostnad på 1 % + statslåneräntan. Avdraget dras av och resultatet kan aldrig bli negativt.",
        ABOUT_FORMULA_MAX_COST => "Maxpris = 100 × L × (A − S) / (100 × L × r + L + 100)",
        ABOUT_FORMULA_BENEFIT => "Förmånsvärde = P / L + S + P × (0,01 + r)",
        ABOUT_FORMULA_DEDUCTION => "Skattepliktigt = max(0, förmånsvärde − A), per månad = / 12",
        MENU_TITLE => "\n=== Förmånscykel – kalkylator ===",
        MENU_EDIT => "1) Ange värden",
        MENU_RESET => "2) Återställ standardvärden",
        MENU_FORMULAS => "3) Visa formler",
        MENU_EXIT => "0) Avsluta",
        PROMPT_MENU_SELECT => "Välj: ",
        PROMPT_KEEP_CURRENT => "(Enter = behåll, - = töm)",
        INVALID_SELECTION_RETRY => "Ogiltigt val. Försök igen.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting.",
        APP_TITLE => "Benefit bike calculator",
        TAB_CALCULATOR => "Calculator",
        TAB_SETTINGS => "Settings",
        TAB_ABOUT => "About the calculation",
        NAV_HEADING => "Menu",
        FIELD_PURCHASE_COST => "Purchase price",
        FIELD_LIFESPAN => "Lifespan",
        FIELD_SERVICE_COST => "Service cost per year",
        FIELD_INTEREST_RATE => "Government borrowing rate",
        FIELD_DEDUCTION => "Deduction per year",
        UNIT_CURRENCY_PER_YEAR => "kr/year",
        UNIT_YEARS => "years",
        RESULT_HEADING => "Results",
        RESULT_MAX_COST_ZERO_BENEFIT => "Max price with no taxable benefit",
        RESULT_TOTAL_BENEFIT => "Benefit value per year (before deduction)",
        RESULT_YEARLY_BENEFIT => "Taxable benefit per year",
        RESULT_MONTHLY_BENEFIT => "Taxable benefit per month",
        SETTINGS_HEADING => "Settings",
        SETTINGS_RESET => "Reset to defaults",
        SETTINGS_RESET_DONE => "Reset! ✓",
        SETTINGS_RESET_HINT => "Lifespan, service cost, rate and deduction are reset. The purchase price is kept.",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_WINDOW_ALPHA => "Window opacity",
        ABOUT_HEADING => "How it is calculated",
        ABOUT_INTRO => "The benefit value is yearly depreciation plus service plus a capital cost of 1 % + the government borrowing rate. The deduction is subtracted and the result never goes below zero.",
        ABOUT_FORMULA_MAX_COST => "Max price = 100 × L × (D − S) / (100 × L × r + L + 100)",
        ABOUT_FORMULA_BENEFIT => "Benefit value = P / L + S + P × (0.01 + r)",
        ABOUT_FORMULA_DEDUCTION => "Taxable = max(0, benefit value − D), monthly = / 12",
        MENU_TITLE => "\n=== Benefit bike calculator ===",
        MENU_EDIT => "1) Enter values",
        MENU_RESET => "2) Reset to defaults",
        MENU_FORMULAS => "3) Show formulas",
        MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select: ",
        PROMPT_KEEP_CURRENT => "(Enter = keep, - = clear)",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_falls_back_to_swedish() {
        let tr = Translator::new("en-us");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::SETTINGS_RESET), "Reset to defaults");
        assert_eq!(tr.t(keys::UNIT_CURRENCY), "kr");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let tr = Translator::new("sv");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn reset_feedback_text_is_swedish_by_default() {
        let tr = Translator::new("xx");
        assert_eq!(tr.t(keys::SETTINGS_RESET_DONE), "Återställt! ✓");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("en-GB", Some("sv")), "en");
        assert_eq!(resolve_language("auto", Some("sv-SE")), "sv");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[settings]\nreset = \"Nollställ\"\n").unwrap();
        assert_eq!(map.get("settings.reset").map(String::as_str), Some("Nollställ"));
    }
}
