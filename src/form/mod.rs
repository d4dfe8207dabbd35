//! 화면 어댑터가 들고 있는 입력 폼 상태. GUI와 CLI가 함께 쓴다.

pub mod feedback;
pub mod tab;

pub use feedback::*;
pub use tab::*;

use crate::benefit::{
    self, ComputedResults, RawInputs, DEFAULT_ANNUAL_DEDUCTION, DEFAULT_ANNUAL_SERVICE_COST,
    DEFAULT_INTEREST_RATE_PERCENT, DEFAULT_LIFESPAN_YEARS,
};
use crate::i18n::keys;

/// 입력 칸 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PurchaseCost,
    Lifespan,
    ServiceCost,
    InterestRate,
    Deduction,
}

impl FormField {
    /// 화면 표시 순서.
    pub const ALL: [FormField; 5] = [
        FormField::PurchaseCost,
        FormField::Lifespan,
        FormField::ServiceCost,
        FormField::InterestRate,
        FormField::Deduction,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            FormField::PurchaseCost => keys::FIELD_PURCHASE_COST,
            FormField::Lifespan => keys::FIELD_LIFESPAN,
            FormField::ServiceCost => keys::FIELD_SERVICE_COST,
            FormField::InterestRate => keys::FIELD_INTEREST_RATE,
            FormField::Deduction => keys::FIELD_DEDUCTION,
        }
    }

    pub fn unit_key(self) -> &'static str {
        match self {
            FormField::Lifespan => keys::UNIT_YEARS,
            FormField::InterestRate => keys::UNIT_PERCENT,
            FormField::ServiceCost | FormField::Deduction => keys::UNIT_CURRENCY_PER_YEAR,
            FormField::PurchaseCost => keys::UNIT_CURRENCY,
        }
    }
}

/// 다섯 입력 칸의 현재 문자열.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    pub purchase_cost: String,
    pub lifespan: String,
    pub service_cost: String,
    pub interest_rate: String,
    pub deduction: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self {
            purchase_cost: String::new(),
            lifespan: DEFAULT_LIFESPAN_YEARS.to_string(),
            service_cost: DEFAULT_ANNUAL_SERVICE_COST.to_string(),
            interest_rate: DEFAULT_INTEREST_RATE_PERCENT.to_string(),
            deduction: DEFAULT_ANNUAL_DEDUCTION.to_string(),
        }
    }
}

impl CalculatorForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::PurchaseCost => &self.purchase_cost,
            FormField::Lifespan => &self.lifespan,
            FormField::ServiceCost => &self.service_cost,
            FormField::InterestRate => &self.interest_rate,
            FormField::Deduction => &self.deduction,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::PurchaseCost => &mut self.purchase_cost,
            FormField::Lifespan => &mut self.lifespan,
            FormField::ServiceCost => &mut self.service_cost,
            FormField::InterestRate => &mut self.interest_rate,
            FormField::Deduction => &mut self.deduction,
        }
    }

    /// 현재 입력을 계산용 스냅샷으로 복사한다.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs::new(
            self.purchase_cost.as_str(),
            self.lifespan.as_str(),
            self.service_cost.as_str(),
            self.interest_rate.as_str(),
            self.deduction.as_str(),
        )
    }

    /// 스냅샷으로 다시 계산한다. 이전 결과는 재사용하지 않는다.
    pub fn calculate(&self) -> ComputedResults {
        let raw = self.raw_inputs();
        let results = benefit::compute(&raw);
        log::debug!("recomputed {raw:?} -> {results:?}");
        results
    }

    /// 비어 있지 않은 입력만 덮어쓴다. CLI 플래그를 초기값으로 넣을 때 쓴다.
    pub fn apply_non_blank(&mut self, raw: &RawInputs) {
        for (field, value) in [
            (FormField::PurchaseCost, &raw.purchase_cost),
            (FormField::Lifespan, &raw.lifespan_years),
            (FormField::ServiceCost, &raw.annual_service_cost),
            (FormField::InterestRate, &raw.interest_rate_percent),
            (FormField::Deduction, &raw.annual_deduction),
        ] {
            if !value.trim().is_empty() {
                *self.field_mut(field) = value.clone();
            }
        }
    }

    /// 구입가를 제외한 네 칸을 기본값으로 되돌린다.
    pub fn reset_to_defaults(&mut self) {
        let defaults = CalculatorForm::default();
        self.lifespan = defaults.lifespan;
        self.service_cost = defaults.service_cost;
        self.interest_rate = defaults.interest_rate;
        self.deduction = defaults.deduction;
        log::info!("form reset to defaults");
    }
}
