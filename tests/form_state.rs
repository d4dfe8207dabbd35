//! 폼 상태(초기화, 탭, 초기화 표시) 회귀 테스트.
use std::time::{Duration, Instant};

use bike_benefit_calculator::benefit::{compute, RawInputs};
use bike_benefit_calculator::form::{
    CalculatorForm, ResetFeedback, Tab, RESET_FEEDBACK_DURATION,
};

#[test]
fn reset_restores_defaults_but_not_purchase_cost() {
    let mut form = CalculatorForm {
        purchase_cost: "32000".into(),
        lifespan: "4".into(),
        service_cost: "900".into(),
        interest_rate: "3.1".into(),
        deduction: "1000".into(),
    };
    form.reset_to_defaults();

    assert_eq!(form.purchase_cost, "32000");
    let expected = compute(&RawInputs::new("32000", "6", "500", "1.96", "3000"));
    assert_eq!(form.calculate(), expected);
}

#[test]
fn edits_are_picked_up_on_next_calculation() {
    let mut form = CalculatorForm::default();
    let before = form.calculate();
    form.purchase_cost = "200000".into();
    let after = form.calculate();
    assert!(after.total_annual_benefit_value > before.total_annual_benefit_value);
    assert_eq!(after.max_cost_for_zero_benefit, before.max_cost_for_zero_benefit);
}

#[test]
fn default_tab_is_calculator() {
    assert_eq!(Tab::default(), Tab::Calculator);
    assert_eq!(Tab::ALL.len(), 3);
}

#[test]
fn rapid_resets_keep_one_pending_transition() {
    let t0 = Instant::now();
    let mut fb = ResetFeedback::default();
    for i in 0..5 {
        fb.trigger(t0 + Duration::from_millis(i * 300));
    }
    let last = t0 + Duration::from_millis(1200);
    assert!(!fb.tick(t0 + RESET_FEEDBACK_DURATION));
    assert!(fb.is_active());
    assert!(fb.tick(last + RESET_FEEDBACK_DURATION));
    assert!(!fb.is_active());
}
