use serde::Serialize;

use super::inputs::{BenefitParameters, RawInputs};
use crate::currency::format_sek;

/// 한 번의 계산 결과. 반올림 전 값을 그대로 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedResults {
    /// 과세 혜택이 0이 되는 최대 구입가 [kr]
    pub max_cost_for_zero_benefit: f64,
    /// 공제 전 연간 혜택 가치 [kr/년]
    pub total_annual_benefit_value: f64,
    /// 공제 후 연간 과세 혜택 [kr/년], 0 미만으로 내려가지 않음
    pub yearly_taxable_benefit: f64,
    /// 월간 과세 혜택 [kr/월]
    pub monthly_taxable_benefit: f64,
}

/// 화면에 그대로 쓰는 결과 문자열.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedResults {
    pub max_cost_for_zero_benefit: String,
    pub total_annual_benefit_value: String,
    pub yearly_taxable_benefit: String,
    pub monthly_taxable_benefit: String,
}

impl ComputedResults {
    /// 네 금액을 각각 반올림해 크로나 문자열로 만든다.
    pub fn formatted(&self) -> FormattedResults {
        FormattedResults {
            max_cost_for_zero_benefit: format_sek(self.max_cost_for_zero_benefit),
            total_annual_benefit_value: format_sek(self.total_annual_benefit_value),
            yearly_taxable_benefit: format_sek(self.yearly_taxable_benefit),
            monthly_taxable_benefit: format_sek(self.monthly_taxable_benefit),
        }
    }
}

/// 입력 문자열에서 결과를 계산한다. 실패하지 않는다.
pub fn compute(raw: &RawInputs) -> ComputedResults {
    compute_with(&BenefitParameters::from_raw(raw))
}

/// 해석된 입력으로 네 결과를 계산한다.
///
/// 분모가 0이거나 음수인 경우의 inf/NaN은 보정하지 않고 그대로 전달한다.
pub fn compute_with(p: &BenefitParameters) -> ComputedResults {
    let total_annual_benefit_value = total_annual_benefit_value(p);
    let yearly_taxable_benefit =
        floor_at_zero(total_annual_benefit_value - p.annual_deduction);
    ComputedResults {
        max_cost_for_zero_benefit: max_cost_for_zero_benefit(p),
        total_annual_benefit_value,
        yearly_taxable_benefit,
        monthly_taxable_benefit: yearly_taxable_benefit / 12.0,
    }
}

/// 연간 혜택이 공제액과 같아지는 구입가(식 2를 구입가에 대해 푼 값).
pub fn max_cost_for_zero_benefit(p: &BenefitParameters) -> f64 {
    (100.0 * p.lifespan_years * (p.annual_deduction - p.annual_service_cost))
        / (100.0 * p.lifespan_years * p.interest_rate + p.lifespan_years + 100.0)
}

/// 정액 감가상각 + 서비스 비용 + 구입가의 (1% + 이자율).
pub fn total_annual_benefit_value(p: &BenefitParameters) -> f64 {
    p.purchase_cost / p.lifespan_years
        + p.annual_service_cost
        + p.purchase_cost * (0.01 + p.interest_rate)
}

// NaN은 0으로 바꾸지 않는다
fn floor_at_zero(value: f64) -> f64 {
    if value.is_nan() || value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_give_service_cost_only() {
        let res = compute(&RawInputs::default());
        assert_relative_eq!(res.total_annual_benefit_value, 500.0);
        assert_eq!(res.yearly_taxable_benefit, 0.0);
        assert_eq!(res.monthly_taxable_benefit, 0.0);
        assert_relative_eq!(
            res.max_cost_for_zero_benefit,
            1_500_000.0 / 117.76,
            max_relative = 1e-12
        );
    }

    #[test]
    fn floor_keeps_nan() {
        assert!(floor_at_zero(f64::NAN).is_nan());
        assert_eq!(floor_at_zero(-5.0), 0.0);
        assert!(floor_at_zero(-0.0).is_sign_positive());
        assert_eq!(floor_at_zero(3.5), 3.5);
    }

    #[test]
    fn zero_denominator_gives_infinity() {
        // 100 * L * 0 + L + 100 = 0  ->  L = -100
        let p = BenefitParameters {
            lifespan_years: -100.0,
            interest_rate: 0.0,
            ..BenefitParameters::default()
        };
        let res = compute_with(&p);
        assert!(res.max_cost_for_zero_benefit.is_infinite());
        assert!(res.max_cost_for_zero_benefit < 0.0);
    }

    #[test]
    fn formatted_uses_swedish_krona() {
        let out = compute(&RawInputs::default()).formatted();
        assert_eq!(out.max_cost_for_zero_benefit, "12\u{a0}738\u{a0}kr");
        assert_eq!(out.total_annual_benefit_value, "500\u{a0}kr");
        assert_eq!(out.yearly_taxable_benefit, "0\u{a0}kr");
        assert_eq!(out.monthly_taxable_benefit, "0\u{a0}kr");
    }
}
