use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::benefit::ComputedResults;
use crate::form::{CalculatorForm, FormField};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Edit,
    Reset,
    Formulas,
    Exit,
}

impl MenuChoice {
    fn parse(sel: &str) -> Option<MenuChoice> {
        match sel.trim() {
            "1" => Some(MenuChoice::Edit),
            "2" => Some(MenuChoice::Reset),
            "3" => Some(MenuChoice::Formulas),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MENU_TITLE));
    for key in [keys::MENU_EDIT, keys::MENU_RESET, keys::MENU_FORMULAS, keys::MENU_EXIT] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match MenuChoice::parse(&sel) {
            Some(choice) => return Ok(choice),
            None if sel.is_empty() => return Ok(MenuChoice::Exit),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력 칸을 비우는 응답. 빈 칸은 기본값으로 계산된다.
pub const CLEAR_FIELD: &str = "-";

/// 다섯 칸을 차례로 묻는다. 빈 입력은 현재 값을 유지하고 `-`는 칸을 비운다.
pub fn handle_edit(tr: &Translator, form: &mut CalculatorForm) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    edit_form(tr, form, &mut input, &mut out)
}

fn edit_form<R: BufRead, W: Write>(
    tr: &Translator,
    form: &mut CalculatorForm,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    for field in FormField::ALL {
        write!(
            out,
            "{} [{}] = {} {}: ",
            tr.t(field.label_key()),
            tr.t(field.unit_key()),
            form.field(field),
            tr.t(keys::PROMPT_KEEP_CURRENT),
        )?;
        out.flush()?;
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            break;
        }
        let entered = buf.trim_end_matches(['\r', '\n']);
        if entered.trim() == CLEAR_FIELD {
            form.field_mut(field).clear();
        } else if !entered.is_empty() {
            *form.field_mut(field) = entered.to_string();
        }
    }
    Ok(())
}

/// 네 결과를 표시한다.
pub fn print_results(tr: &Translator, results: &ComputedResults) {
    let text = results.formatted();
    println!("\n-- {} --", tr.t(keys::RESULT_HEADING));
    for (key, value) in [
        (keys::RESULT_MAX_COST_ZERO_BENEFIT, &text.max_cost_for_zero_benefit),
        (keys::RESULT_TOTAL_BENEFIT, &text.total_annual_benefit_value),
        (keys::RESULT_YEARLY_BENEFIT, &text.yearly_taxable_benefit),
        (keys::RESULT_MONTHLY_BENEFIT, &text.monthly_taxable_benefit),
    ] {
        println!("{:<44} {value}", tr.t(key));
    }
}

pub fn print_formulas(tr: &Translator) {
    println!("\n-- {} --", tr.t(keys::ABOUT_HEADING));
    println!("{}", tr.t(keys::ABOUT_INTRO));
    println!("  {}", tr.t(keys::ABOUT_FORMULA_MAX_COST));
    println!("  {}", tr.t(keys::ABOUT_FORMULA_BENEFIT));
    println!("  {}", tr.t(keys::ABOUT_FORMULA_DEDUCTION));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}
