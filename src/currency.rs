//! 금액 표시용 통화 포맷. 계산 결과에 다시 들어가지 않는다.

/// 통화 표기 규칙.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// 금액 뒤에 붙는 통화 기호
    pub symbol: &'static str,
    /// 천 단위 구분자
    pub group_separator: char,
    /// 금액과 통화 기호 사이 문자
    pub symbol_separator: char,
    /// 음수 부호
    pub minus_sign: char,
}

impl CurrencyFormat {
    /// sv-SE 로케일의 스웨덴 크로나(SEK). 소수점 이하는 표시하지 않는다.
    pub const SWEDISH_KRONA: CurrencyFormat = CurrencyFormat {
        symbol: "kr",
        group_separator: '\u{a0}',
        symbol_separator: '\u{a0}',
        minus_sign: '\u{2212}',
    };

    /// 금액을 정수로 반올림한 뒤 통화 문자열로 만든다.
    pub fn format(&self, amount: f64) -> String {
        let rounded = round_half_up(amount);
        let body = if rounded.is_nan() {
            "NaN".to_string()
        } else if rounded.is_infinite() {
            "∞".to_string()
        } else {
            self.group_digits(&rounded.abs().to_string())
        };

        let mut out = String::with_capacity(body.len() + 8);
        if rounded.is_sign_negative() && !rounded.is_nan() {
            out.push(self.minus_sign);
        }
        out.push_str(&body);
        out.push(self.symbol_separator);
        out.push_str(self.symbol);
        out
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut result = String::with_capacity(len + len / 3 * 2);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                result.push(self.group_separator);
            }
            result.push(c);
        }
        result
    }
}

/// 고정 로케일(sv-SE, SEK)로 금액을 표시한다.
pub fn format_sek(amount: f64) -> String {
    CurrencyFormat::SWEDISH_KRONA.format(amount)
}

/// 가장 가까운 정수로 반올림한다. 0.5는 양의 무한대 방향으로 올린다(-2.5 -> -2).
///
/// 0으로 반올림되는 음수는 -0을 유지한다.
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    if rounded == 0.0 && value < 0.0 {
        -0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(12737.77), 12738.0);
        assert!(round_half_up(-0.4).is_sign_negative());
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format_sek(0.0), "0\u{a0}kr");
        assert_eq!(format_sek(999.4), "999\u{a0}kr");
        assert_eq!(format_sek(1000.0), "1\u{a0}000\u{a0}kr");
        assert_eq!(format_sek(12737.77), "12\u{a0}738\u{a0}kr");
        assert_eq!(format_sek(1_234_567.0), "1\u{a0}234\u{a0}567\u{a0}kr");
        // 큰 금액도 최단 십진 표현으로 표시
        assert_eq!(
            format_sek(1e23),
            "100\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}kr"
        );
        assert_eq!(
            format_sek(2.5e22),
            "25\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}000\u{a0}kr"
        );
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_sek(-1500.0), "\u{2212}1\u{a0}500\u{a0}kr");
        assert_eq!(format_sek(-0.2), "\u{2212}0\u{a0}kr");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_sek(f64::NAN), "NaN\u{a0}kr");
        assert_eq!(format_sek(f64::INFINITY), "∞\u{a0}kr");
        assert_eq!(format_sek(f64::NEG_INFINITY), "\u{2212}∞\u{a0}kr");
    }
}
