use thiserror::Error;

use crate::form::CalculatorForm;
use crate::i18n::{self, Translator};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("in-/utmatningsfel: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 로드 오류
    #[error("konfigurationsfel: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// JSON 출력 오류
    #[error("JSON-fel: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI 대화형 루프를 실행한다. 입력값은 종료 시 버린다.
pub fn run(form: &mut CalculatorForm, tr: &Translator) -> Result<(), AppError> {
    ui_cli::print_results(tr, &form.calculate());
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Edit => {
                ui_cli::handle_edit(tr, form)?;
                ui_cli::print_results(tr, &form.calculate());
            }
            MenuChoice::Reset => {
                form.reset_to_defaults();
                println!("{}", tr.t(i18n::keys::SETTINGS_RESET_DONE));
                ui_cli::print_results(tr, &form.calculate());
            }
            MenuChoice::Formulas => ui_cli::print_formulas(tr),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
