use serde::{Deserialize, Serialize};

/// 입력이 비었거나 숫자가 아닐 때 쓰는 기본값.
pub const DEFAULT_PURCHASE_COST: f64 = 0.0;
pub const DEFAULT_LIFESPAN_YEARS: f64 = 6.0;
pub const DEFAULT_ANNUAL_SERVICE_COST: f64 = 500.0;
/// 입력 칸에 채우는 퍼센트 값. 계산에는 [`DEFAULT_INTEREST_RATE_FRACTION`]을 쓴다.
pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 1.96;
pub const DEFAULT_INTEREST_RATE_FRACTION: f64 = DEFAULT_INTEREST_RATE_PERCENT / 100.0;
pub const DEFAULT_ANNUAL_DEDUCTION: f64 = 3000.0;

/// 사용자가 입력한 그대로의 문자열 5개.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInputs {
    /// 구입가 [kr]
    pub purchase_cost: String,
    /// 사용 연수 [년]
    pub lifespan_years: String,
    /// 연간 서비스 비용 [kr/년]
    pub annual_service_cost: String,
    /// 이자율 [%]
    pub interest_rate_percent: String,
    /// 연간 공제액 [kr/년]
    pub annual_deduction: String,
}

impl RawInputs {
    /// 다섯 필드를 한 번에 채운다.
    pub fn new(
        purchase_cost: impl Into<String>,
        lifespan_years: impl Into<String>,
        annual_service_cost: impl Into<String>,
        interest_rate_percent: impl Into<String>,
        annual_deduction: impl Into<String>,
    ) -> Self {
        Self {
            purchase_cost: purchase_cost.into(),
            lifespan_years: lifespan_years.into(),
            annual_service_cost: annual_service_cost.into(),
            interest_rate_percent: interest_rate_percent.into(),
            annual_deduction: annual_deduction.into(),
        }
    }
}

/// 해석과 기본값 대체가 끝난 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitParameters {
    pub purchase_cost: f64,
    pub lifespan_years: f64,
    pub annual_service_cost: f64,
    /// 소수 이자율 (1.96% -> 0.0196)
    pub interest_rate: f64,
    pub annual_deduction: f64,
}

impl Default for BenefitParameters {
    fn default() -> Self {
        Self {
            purchase_cost: DEFAULT_PURCHASE_COST,
            lifespan_years: DEFAULT_LIFESPAN_YEARS,
            annual_service_cost: DEFAULT_ANNUAL_SERVICE_COST,
            interest_rate: DEFAULT_INTEREST_RATE_FRACTION,
            annual_deduction: DEFAULT_ANNUAL_DEDUCTION,
        }
    }
}

impl BenefitParameters {
    /// 문자열 입력을 해석한다. 실패하거나 유한하지 않은 값은 필드별 기본값으로 대체한다.
    ///
    /// 이자율은 100으로 나눈 뒤에 기본값 대체 여부를 판단한다.
    pub fn from_raw(raw: &RawInputs) -> Self {
        Self {
            purchase_cost: finite_or(
                parse_leading_float(&raw.purchase_cost),
                DEFAULT_PURCHASE_COST,
            ),
            lifespan_years: finite_or(
                parse_leading_float(&raw.lifespan_years),
                DEFAULT_LIFESPAN_YEARS,
            ),
            annual_service_cost: finite_or(
                parse_leading_float(&raw.annual_service_cost),
                DEFAULT_ANNUAL_SERVICE_COST,
            ),
            interest_rate: finite_or(
                parse_leading_float(&raw.interest_rate_percent) / 100.0,
                DEFAULT_INTEREST_RATE_FRACTION,
            ),
            annual_deduction: finite_or(
                parse_leading_float(&raw.annual_deduction),
                DEFAULT_ANNUAL_DEDUCTION,
            ),
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// 브라우저 숫자 해석이 건너뛰는 공백과 줄바꿈 문자. U+0085는 포함하지 않는다.
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        _ => c.is_whitespace(),
    }
}

/// 문자열 앞부분에서 읽을 수 있는 가장 긴 10진 실수를 해석한다.
///
/// 앞 공백은 건너뛰고 뒤에 붙은 문자는 무시한다("12abc" -> 12).
/// 숫자로 시작하지 않으면 NaN을 돌려준다.
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - end - 1;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    // 지수부는 숫자가 하나 이상 따라올 때만 포함
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_prefixed_numbers() {
        assert_eq!(parse_leading_float("42"), 42.0);
        assert_eq!(parse_leading_float("  7"), 7.0);
        assert_eq!(parse_leading_float("12abc"), 12.0);
        assert_eq!(parse_leading_float("1.96"), 1.96);
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("-3.5kr"), -3.5);
        assert_eq!(parse_leading_float("1e3"), 1000.0);
        assert_eq!(parse_leading_float("2e"), 2.0);
        assert_eq!(parse_leading_float("2e+x"), 2.0);
        // 쉼표는 소수점으로 보지 않는다
        assert_eq!(parse_leading_float("1,5"), 1.0);
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert!(parse_leading_float("").is_nan());
        assert!(parse_leading_float("abc").is_nan());
        assert!(parse_leading_float(".").is_nan());
        assert!(parse_leading_float("-").is_nan());
        assert!(parse_leading_float("inf").is_nan());
    }

    #[test]
    fn skips_only_script_whitespace() {
        assert_eq!(parse_leading_float("\t\n\u{a0}\u{2028}\u{feff}5"), 5.0);
        assert_eq!(parse_leading_float("\u{3000}8"), 8.0);
        assert!(parse_leading_float("\u{85}5").is_nan());
    }

    #[test]
    fn reads_infinity_keyword() {
        assert_eq!(parse_leading_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_leading_float("-Infinityxyz"), f64::NEG_INFINITY);
    }

    #[test]
    fn blank_inputs_resolve_to_defaults() {
        let params = BenefitParameters::from_raw(&RawInputs::default());
        assert_eq!(params, BenefitParameters::default());
    }

    #[test]
    fn non_finite_inputs_resolve_to_defaults() {
        let raw = RawInputs::new("Infinity", "x", "-Infinity", "Infinity", "");
        let params = BenefitParameters::from_raw(&raw);
        assert_eq!(params, BenefitParameters::default());
    }

    #[test]
    fn interest_rate_is_divided_before_fallback() {
        let raw = RawInputs::new("", "", "", "2.5", "");
        assert_eq!(BenefitParameters::from_raw(&raw).interest_rate, 0.025);

        let raw = RawInputs::new("", "", "", "n/a", "");
        assert_eq!(
            BenefitParameters::from_raw(&raw).interest_rate,
            DEFAULT_INTEREST_RATE_FRACTION
        );
    }

    #[test]
    fn zero_is_kept_as_entered() {
        let raw = RawInputs::new("0", "0", "0", "0", "0");
        let params = BenefitParameters::from_raw(&raw);
        assert_eq!(params.lifespan_years, 0.0);
        assert_eq!(params.annual_service_cost, 0.0);
        assert_eq!(params.interest_rate, 0.0);
        assert_eq!(params.annual_deduction, 0.0);
    }
}
