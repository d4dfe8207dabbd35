use clap::Parser;
use serde::Serialize;

use bike_benefit_calculator::{
    app,
    app::AppError,
    benefit::{self, BenefitParameters, ComputedResults, FormattedResults, RawInputs},
    config,
    form::CalculatorForm,
    i18n::{self, Translator},
    ui_cli,
};

/// 자전거 복리후생 과세 가치 계산기 (CLI).
#[derive(Parser, Debug)]
#[command(
    name = "bike_benefit_calculator_cli",
    version,
    allow_negative_numbers = true,
    about = "Räknar ut förmånsvärdet för en förmånscykel"
)]
struct Cli {
    #[arg(long, default_value = "", help = "Inköpspris [kr]")]
    purchase_cost: String,
    #[arg(long, default_value = "", help = "Livslängd [år]")]
    lifespan: String,
    #[arg(long, default_value = "", help = "Servicekostnad per år [kr]")]
    service_cost: String,
    #[arg(long, default_value = "", help = "Statslåneränta [%]")]
    interest_rate: String,
    #[arg(long, default_value = "", help = "Avdrag per år [kr]")]
    deduction: String,
    #[arg(short, long, help = "Interaktivt läge med meny")]
    interactive: bool,
    #[arg(long, conflicts_with = "interactive", help = "Skriv resultatet som JSON")]
    json: bool,
    #[arg(short = 'L', long, default_value = "auto", help = "Språk (auto/sv/en)")]
    lang: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    inputs: &'a RawInputs,
    parameters: BenefitParameters,
    results: ComputedResults,
    formatted: FormattedResults,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = try_run(cli) {
        log::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    log::info!("CLI language resolved: {lang}");

    let raw = RawInputs::new(
        cli.purchase_cost,
        cli.lifespan,
        cli.service_cost,
        cli.interest_rate,
        cli.deduction,
    );

    if cli.interactive {
        let mut form = CalculatorForm::default();
        form.apply_non_blank(&raw);
        return app::run(&mut form, &tr);
    }

    let results = benefit::compute(&raw);
    if cli.json {
        let report = Report {
            inputs: &raw,
            parameters: BenefitParameters::from_raw(&raw),
            results,
            formatted: results.formatted(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui_cli::print_results(&tr, &results);
    }
    Ok(())
}
