#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use bike_benefit_calculator::{
    benefit::{ComputedResults, FormattedResults},
    config,
    form::{CalculatorForm, FormField, ResetFeedback, Tab},
    i18n::{self, keys, Language, Translator},
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, time::Instant};

// 초기화 완료 표시 색상
const FEEDBACK_FILL: egui::Color32 = egui::Color32::from_rgb(0x10, 0xb9, 0x81);
const FEEDBACK_STROKE: egui::Color32 = egui::Color32::from_rgb(0x05, 0x96, 0x69);

#[derive(Parser, Debug)]
#[command(name = "bike_benefit_calculator", version)]
struct GuiArgs {
    #[arg(short = 'L', long, default_value = "auto", help = "Språk (auto/sv/en)")]
    lang: String,
    #[arg(long, help = "Starta på fliken (calculator/settings/about)")]
    tab: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = GuiArgs::parse();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([760.0, 520.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        config::Config::default()
    });
    let lang = i18n::resolve_language(&args.lang, Some(app_cfg.language.as_str()));
    log::info!("GUI language resolved: {lang}");
    let start_tab = match args.tab.as_deref() {
        Some(id) => Tab::from_id(id).unwrap_or_else(|| {
            log::warn!("unknown tab {id:?}, starting on calculator");
            Tab::default()
        }),
        None => Tab::default(),
    };

    eframe::run_native(
        "Förmånscykel",
        options,
        Box::new(move |_cc| {
            let mut app = GuiApp::new(app_cfg, &lang);
            app.tab = start_tab;
            Box::new(app)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            log::warn!("icon {path} could not be decoded: {e}");
            return None;
        }
    };
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    tab: Tab,
    window_alpha: f32,
    form: CalculatorForm,
    results: ComputedResults,
    formatted: FormattedResults,
    feedback: ResetFeedback,
}

impl GuiApp {
    fn new(config: config::Config, lang_code: &str) -> Self {
        let tr = Translator::new_with_pack(lang_code, config.language_pack_dir.as_deref());
        let form = CalculatorForm::default();
        let results = form.calculate();
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            tr,
            tab: Tab::default(),
            formatted: results.formatted(),
            results,
            form,
            feedback: ResetFeedback::Idle,
        }
    }

    fn recalculate(&mut self) {
        self.results = self.form.calculate();
        self.formatted = self.results.formatted();
    }

    fn reset_to_defaults(&mut self, now: Instant) {
        self.form.reset_to_defaults();
        self.recalculate();
        self.feedback.trigger(now);
    }

    fn set_language(&mut self, lang: Language) {
        self.tr = Translator::new_with_pack(lang.as_code(), self.config.language_pack_dir.as_deref());
    }

    fn result_rows(&self) -> [(&'static str, &str); 4] {
        [
            (
                keys::RESULT_MAX_COST_ZERO_BENEFIT,
                &self.formatted.max_cost_for_zero_benefit,
            ),
            (
                keys::RESULT_TOTAL_BENEFIT,
                &self.formatted.total_annual_benefit_value,
            ),
            (
                keys::RESULT_YEARLY_BENEFIT,
                &self.formatted.yearly_taxable_benefit,
            ),
            (
                keys::RESULT_MONTHLY_BENEFIT,
                &self.formatted.monthly_taxable_benefit,
            ),
        ]
    }

    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(tr.t(keys::NAV_HEADING));
            ui.add_space(8.0);
        });
        for tab in Tab::ALL {
            let selected = self.tab == tab;
            let button = egui::Button::new(tr.t(tab.label_key()))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_calculator(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::TAB_CALCULATOR));
        ui.add_space(8.0);

        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("input_grid")
                .num_columns(3)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in FormField::ALL {
                        ui.label(tr.t(field.label_key()));
                        let edit = egui::TextEdit::singleline(self.form.field_mut(field))
                            .desired_width(140.0);
                        if ui.add(edit).changed() {
                            changed = true;
                        }
                        ui.label(tr.t(field.unit_key()));
                        ui.end_row();
                    }
                });
        });
        // 키 입력마다 다시 계산
        if changed {
            self.recalculate();
        }

        ui.add_space(12.0);
        ui.heading(tr.t(keys::RESULT_HEADING));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("result_grid")
                .num_columns(2)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for (key, value) in self.result_rows() {
                        ui.label(tr.t(key));
                        ui.label(egui::RichText::new(value).strong().monospace());
                        ui.end_row();
                    }
                });
        });
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::SETTINGS_HEADING));
        ui.add_space(8.0);
        ui.label(tr.t(keys::SETTINGS_RESET_HINT));

        let button = if self.feedback.is_active() {
            egui::Button::new(
                egui::RichText::new(tr.t(keys::SETTINGS_RESET_DONE)).color(egui::Color32::WHITE),
            )
            .fill(FEEDBACK_FILL)
            .stroke(egui::Stroke::new(1.0, FEEDBACK_STROKE))
        } else {
            egui::Button::new(tr.t(keys::SETTINGS_RESET))
        };
        if ui.add(button).clicked() {
            self.reset_to_defaults(Instant::now());
        }

        ui.separator();
        ui.label(tr.t(keys::SETTINGS_LANGUAGE));
        let mut lang = self.tr.language();
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(lang.native_name())
            .show_ui(ui, |ui| {
                for l in Language::ALL {
                    ui.selectable_value(&mut lang, l, l.native_name());
                }
            });
        if lang != self.tr.language() {
            self.set_language(lang);
        }

        ui.separator();
        ui.label(tr.t(keys::SETTINGS_WINDOW_ALPHA));
        ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0));
    }

    fn ui_about(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::ABOUT_HEADING));
        ui.add_space(8.0);
        ui.label(tr.t(keys::ABOUT_INTRO));
        ui.add_space(8.0);
        for key in [
            keys::ABOUT_FORMULA_MAX_COST,
            keys::ABOUT_FORMULA_BENEFIT,
            keys::ABOUT_FORMULA_DEDUCTION,
        ] {
            ui.label(egui::RichText::new(tr.t(key)).monospace());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = Instant::now();
        if self.feedback.tick(now) {
            ctx.request_repaint();
        }
        if let Some(left) = self.feedback.remaining(now) {
            ctx.request_repaint_after(left);
        }

        // 투명도는 기본 테마에서 매번 새로 계산
        let base = if ctx.style().visuals.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let mut visuals = base.clone();
        visuals.window_fill = base.window_fill.linear_multiply(self.window_alpha);
        visuals.panel_fill = base.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_visuals(visuals);

        let tr = self.tr.clone();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
            });
        });

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculator => self.ui_calculator(ui),
                    Tab::Settings => self.ui_settings(ui),
                    Tab::About => self.ui_about(ui),
                });
        });
    }
}
