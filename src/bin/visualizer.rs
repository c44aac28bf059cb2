// src/bin/visualizer.rs

use eframe::egui;
use egui::{Color32, FontId, Frame, RichText, Stroke};
use egui_plot::{Line, Plot, PlotPoints};
use env_logger::Builder;
use log::{LevelFilter, error, info};
use rand::rngs::StdRng;
use stock_wallet::config::{DATA_PATH_ENV, DEFAULT_SETTINGS_PATH, SETTINGS_PATH_ENV};
use stock_wallet::detail::ChartSummary;
use stock_wallet::display::{format_shares, get_change_color};
use stock_wallet::theme::{JsonFileThemeStore, hex_to_rgb};
use stock_wallet::types::chart::values;
use stock_wallet::{
    ChangeColor, ChartPeriod, ChartPoint, ColorScheme, FixtureSource, JsonFileSource, Palette,
    SortBy, StockDetail, StockScreen, StockSource, SyntheticCharts, ThemeMode, ThemeSettings,
    format_percentage_change, format_price,
};

type Screen = StockScreen<Box<dyn StockSource>, SyntheticCharts<StdRng>>;

struct OpenDetail {
    detail: StockDetail,
    points: Vec<ChartPoint>,
}

impl OpenDetail {
    fn new(detail: StockDetail, charts: &mut SyntheticCharts<StdRng>) -> Self {
        let points = detail.chart(charts);
        Self { detail, points }
    }

    fn redraw(&mut self, charts: &mut SyntheticCharts<StdRng>) {
        self.points = self.detail.chart(charts);
    }
}

struct VisualizerApp {
    // List screen state
    screen: Screen,
    filter_text: String,

    // Detail screen gets its own chart source; nothing is shared with the list.
    detail_charts: SyntheticCharts<StdRng>,
    detail: Option<OpenDetail>,
    detail_error: Option<String>,

    theme: ThemeSettings,
    theme_store: JsonFileThemeStore,
}

fn hex(hex: &str) -> Color32 {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::GRAY)
}

fn change_color(color: ChangeColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let system = frame.info().system_theme.map(|t| match t {
            eframe::Theme::Dark => ColorScheme::Dark,
            eframe::Theme::Light => ColorScheme::Light,
        });
        let is_dark = self.theme.is_dark(system);
        let palette = self.theme.palette(system);
        ctx.set_visuals(if is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stocks");
                ui.add_space(20.0);
                if ui.button("⟳ Refresh").clicked() {
                    self.screen.refresh();
                }
                ui.separator();
                for mode in ThemeMode::ALL {
                    if ui
                        .selectable_label(self.theme.mode() == mode, mode.as_str())
                        .clicked()
                    {
                        if let Err(e) = self.theme.set_mode(&self.theme_store, mode) {
                            error!("Failed to save theme: {}", e);
                        }
                    }
                }
            });
        });

        if self.detail.is_some() || self.detail_error.is_some() {
            egui::SidePanel::right("detail_panel")
                .min_width(380.0)
                .show(ctx, |ui| self.detail_panel(ui, &palette));
        }

        egui::CentralPanel::default()
            .frame(Frame::central_panel(&ctx.style()).fill(hex(palette.background)))
            .show(ctx, |ui| {
                if self.screen.is_loading() {
                    ui.centered_and_justified(|ui| ui.spinner());
                    return;
                }
                if let Some(message) = self.screen.error() {
                    ui.label(RichText::new(message).color(hex(palette.error)));
                    return;
                }
                self.wallet_header(ui, &palette);
                ui.add_space(8.0);
                self.filter_bar(ui);
                ui.separator();
                self.stock_list(ui, &palette);
            });
    }
}

impl VisualizerApp {
    fn wallet_header(&self, ui: &mut egui::Ui, palette: &Palette) {
        let wallet = self.screen.wallet();
        let color = change_color(get_change_color(wallet.daily_change_percentage));

        Frame::group(ui.style())
            .fill(hex(palette.card))
            .show(ui, |ui| {
                ui.label(RichText::new("ACCOUNT").color(hex(palette.text_secondary)));
                ui.label(
                    RichText::new(format_price(wallet.total_value))
                        .font(FontId::proportional(32.0))
                        .color(hex(palette.text)),
                );
                ui.label(
                    RichText::new(format!(
                        "{} • {}",
                        format_percentage_change(wallet.daily_change_percentage),
                        format_price(wallet.daily_change_value)
                    ))
                    .color(color),
                );
                let series = values(&wallet.chart_data);
                Plot::new("wallet_plot")
                    .height(100.0)
                    .show_axes([false, false])
                    .allow_drag(false)
                    .allow_zoom(false)
                    .allow_scroll(false)
                    .show(ui, |plot_ui| {
                        plot_ui.line(
                            Line::new(PlotPoints::from_ys_f64(&series))
                                .color(color)
                                .stroke(Stroke::new(2.0, color)),
                        );
                    });
            });
    }

    fn filter_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.filter_text).hint_text("Search stocks..."),
            );
            if search.changed() {
                self.screen.set_filter(self.filter_text.clone());
            }
            ui.add_space(12.0);
            for option in SortBy::ALL {
                let selected = self.screen.view().sort_by == option;
                if ui.selectable_label(selected, option.label()).clicked() {
                    self.screen.set_sort(option);
                }
            }
        });
    }

    fn stock_list(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let mut clicked: Option<String> = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for stock in self.screen.visible() {
                let color = change_color(get_change_color(stock.daily_change));
                Frame::group(ui.style())
                    .fill(hex(palette.card))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            if ui.button(RichText::new(&stock.symbol).strong()).clicked() {
                                clicked = Some(stock.symbol.clone());
                            }
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(&stock.name).color(hex(palette.text_secondary)),
                                );
                                if let Some(shares) = stock.shares_owned.filter(|s| *s > 0.0) {
                                    ui.label(
                                        RichText::new(format_shares(shares))
                                            .color(hex(palette.text_secondary)),
                                    );
                                }
                            });
                            let series = values(&stock.chart_data);
                            Plot::new(format!("spark_{}", stock.symbol))
                                .height(40.0)
                                .width(120.0)
                                .show_axes([false, false])
                                .allow_drag(false)
                                .allow_zoom(false)
                                .allow_scroll(false)
                                .show(ui, |plot_ui| {
                                    let line = Line::new(PlotPoints::from_ys_f64(&series));
                                    plot_ui.line(line.color(color));
                                });
                            ui.vertical(|ui| {
                                let price = format_price(stock.price);
                                let change = format_percentage_change(stock.daily_change);
                                ui.label(RichText::new(price).color(hex(palette.text)));
                                ui.label(RichText::new(change).color(color));
                            });
                        });
                    });
            }
        });
        if let Some(symbol) = clicked {
            self.open_detail(&symbol);
        }
    }

    fn open_detail(&mut self, symbol: &str) {
        match self
            .screen
            .open_detail(symbol)
            .and_then(|payload| StockDetail::from_payload(&payload))
        {
            Ok(detail) => {
                self.detail = Some(OpenDetail::new(detail, &mut self.detail_charts));
                self.detail_error = None;
            }
            Err(e) => {
                error!("Cannot open detail for {}: {}", symbol, e);
                self.detail = None;
                self.detail_error = Some(e.to_string());
            }
        }
    }

    fn detail_panel(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        if ui.button("✕ Close").clicked() {
            self.detail = None;
            self.detail_error = None;
            return;
        }
        if let Some(message) = &self.detail_error {
            ui.label(RichText::new(message).color(hex(palette.error)));
            return;
        }
        let Some(open) = self.detail.as_mut() else {
            return;
        };

        let stock = open.detail.stock().clone();
        let color = change_color(get_change_color(stock.daily_change));
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&stock.symbol).font(FontId::proportional(28.0)).strong());
                ui.label(RichText::new(&stock.name).color(hex(palette.text_secondary)));
            });
            ui.vertical(|ui| {
                ui.label(RichText::new(format_price(stock.price)).font(FontId::proportional(28.0)));
                ui.label(RichText::new(format_percentage_change(stock.daily_change)).color(color));
            });
        });

        let series = values(&open.points);
        Plot::new("detail_plot")
            .height(220.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from_ys_f64(&series))
                        .color(color)
                        .stroke(Stroke::new(2.0, color)),
                );
            });

        let mut picked: Option<ChartPeriod> = None;
        ui.horizontal(|ui| {
            for period in ChartPeriod::ALL {
                if ui
                    .selectable_label(open.detail.period() == period, period.label())
                    .clicked()
                {
                    picked = Some(period);
                }
            }
        });
        if let Some(period) = picked {
            open.detail.select_period(period);
            open.redraw(&mut self.detail_charts);
        }

        if let Some(summary) = ChartSummary::of(&open.points) {
            let as_of = open
                .points
                .last()
                .and_then(ChartPoint::time)
                .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_default();
            ui.label(
                RichText::new(format!(
                    "Range {} – {} • Avg {} • σ {:.2} • {}",
                    format_price(summary.low),
                    format_price(summary.high),
                    format_price(summary.mean),
                    summary.std_dev,
                    as_of
                ))
                .color(hex(palette.text_secondary)),
            );
        }

        if let Some(holding) = open.detail.holding() {
            Frame::group(ui.style())
                .fill(hex(palette.card))
                .show(ui, |ui| {
                    ui.label(RichText::new("MY ASSETS").color(hex(palette.text_secondary)));
                    ui.label(
                        RichText::new(format_price(holding.value)).font(FontId::proportional(24.0)),
                    );
                    ui.label(format_shares(holding.shares));
                });
        }

        Frame::group(ui.style())
            .fill(hex(palette.card))
            .show(ui, |ui| {
                ui.label(RichText::new("KEY STATISTICS").strong());
                egui::Grid::new("stats_grid")
                    .num_columns(2)
                    .spacing([20.0, 2.0])
                    .show(ui, |ui| {
                        for (label, value) in open.detail.key_statistics() {
                            ui.label(RichText::new(label).color(hex(palette.text_secondary)));
                            ui.label(RichText::new(value).font(FontId::monospace(14.0)));
                            ui.end_row();
                        }
                    });
            });
    }
}

fn main() -> Result<(), eframe::Error> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let source: Box<dyn StockSource> = match std::env::var(DATA_PATH_ENV) {
        Ok(path) => Box::new(JsonFileSource::new(path)),
        Err(_) => Box::new(FixtureSource::bundled()),
    };
    info!("Starting stock wallet with {}", source.describe());

    let settings_path =
        std::env::var(SETTINGS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());
    let theme_store = JsonFileThemeStore::new(settings_path);
    let theme = ThemeSettings::load(&theme_store);

    let mut screen = StockScreen::new(source, SyntheticCharts::from_entropy());
    screen.mount();

    let app_state = VisualizerApp {
        screen,
        filter_text: String::new(),
        detail_charts: SyntheticCharts::from_entropy(),
        detail: None,
        detail_error: None,
        theme,
        theme_store,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Stock Wallet"),
        follow_system_theme: true,
        ..Default::default()
    };

    eframe::run_native(
        "Stock Wallet",
        native_options,
        Box::new(|_cc| Box::new(app_state)),
    )
}
