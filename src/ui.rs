use std::collections::VecDeque;

use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};

use petridish::simulation::event_log::EventColor;
use petridish::simulation::params::Params;
use petridish::simulation::world::World;

const MAX_HISTORY_POINTS: usize = 500;
const PARAMS_PATH: &str = "petridish_params.json";

pub struct UiState {
    pub prey_history: VecDeque<(f64, f64)>,
    pub predator_history: VecDeque<(f64, f64)>,
    pub food_history: VecDeque<(f64, f64)>,
    pub restart_requested: bool,
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            prey_history: VecDeque::new(),
            predator_history: VecDeque::new(),
            food_history: VecDeque::new(),
            restart_requested: false,
            status_message: None,
        }
    }

    /// Records one population sample per tick.
    pub fn update_history(&mut self, world: &World) {
        let tick = world.ticks as f64;
        push_point(&mut self.prey_history, (tick, world.prey_count() as f64));
        push_point(
            &mut self.predator_history,
            (tick, world.predator_count() as f64),
        );
        push_point(&mut self.food_history, (tick, world.food.len() as f64));
    }

    pub fn reset_history(&mut self) {
        self.prey_history.clear();
        self.predator_history.clear();
        self.food_history.clear();
    }
}

fn push_point(series: &mut VecDeque<(f64, f64)>, point: (f64, f64)) {
    series.push_back(point);
    if series.len() > MAX_HISTORY_POINTS {
        series.pop_front();
    }
}

pub fn draw_ui(state: &mut UiState, world: &World, params: &mut Params) {
    egui_macroquad::ui(|egui_ctx| {
        egui::SidePanel::right("controls_panel")
            .default_width(300.0)
            .resizable(true)
            .show(egui_ctx, |ui| {
                ui.heading("Petri Dish");
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("💾 Save").clicked() {
                        state.status_message = Some(match params.save_to_file(PARAMS_PATH) {
                            Ok(()) => format!("Saved {}", PARAMS_PATH),
                            Err(e) => format!("Save failed: {}", e),
                        });
                    }
                    if ui.button("📂 Load").clicked() {
                        match Params::load_from_file(PARAMS_PATH) {
                            Ok(loaded) => {
                                *params = loaded;
                                state.status_message = Some(format!("Loaded {}", PARAMS_PATH));
                            }
                            Err(e) => {
                                state.status_message = Some(format!("Load failed: {}", e));
                            }
                        }
                    }
                    if ui.button("🔄 Restart").clicked() {
                        state.restart_requested = true;
                    }
                });
                if let Some(ref msg) = state.status_message {
                    ui.label(msg);
                }
                ui.separator();

                ui.label("Rules");
                ui.add(egui::Slider::new(&mut params.predator_rate, 1..=100).text("Predator Rate"));
                ui.add(egui::Slider::new(&mut params.fight_rate, 1..=20).text("Fight Rate"));
                ui.add(egui::Slider::new(&mut params.initial_dots, 2..=60).text("Initial Dots"));
                ui.add(egui::Slider::new(&mut params.initial_food, 0..=40).text("Initial Food"));
                ui.checkbox(&mut params.enable_habitats, "Predator habitats");
                ui.checkbox(&mut params.enable_hunters, "Hunters");
                ui.separator();

                ui.label(format!("Tick: {}", world.ticks));
                ui.label(format!("Prey: {}", world.prey_count()));
                ui.label(format!("Predators: {}", world.predator_count()));
                ui.label(format!("Food: {}", world.food.len()));
                ui.label(format!("Hunter out: {}", !world.hunters.is_empty()));
                ui.separator();

                draw_population_plot(ui, state);
            });

        draw_events_panel(egui_ctx, world);
    });
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UiState) {
    if state.prey_history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(160.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            let prey_points: PlotPoints = state.prey_history.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(prey_points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Prey"),
            );

            let predator_points: PlotPoints = state
                .predator_history
                .iter()
                .map(|&(x, y)| [x, y])
                .collect();
            plot_ui.line(
                Line::new(predator_points)
                    .color(egui::Color32::from_rgb(180, 100, 255))
                    .name("Predators"),
            );

            let food_points: PlotPoints = state.food_history.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(food_points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Food"),
            );
        });
}

/// Draws a transparent panel showing recent events
fn draw_events_panel(egui_ctx: &egui::Context, world: &World) {
    let screen_height = egui_ctx.screen_rect().height();
    let panel_height = 220.0;

    egui::Window::new("Recent Events")
        .fixed_pos(egui::pos2(10.0, screen_height - panel_height - 10.0))
        .fixed_size(egui::vec2(320.0, panel_height))
        .frame(
            egui::Frame::window(&egui_ctx.style())
                .fill(egui::Color32::from_rgba_premultiplied(20, 20, 30, 200))
                .stroke(egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgb(100, 100, 120),
                )),
        )
        .show(egui_ctx, |ui| {
            let events = world.event_log.events();

            if events.is_empty() {
                ui.label(
                    egui::RichText::new("No events yet...")
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .size(12.0),
                );
                return;
            }

            for event in events {
                let color = match event.color {
                    EventColor::Birth => egui::Color32::from_rgb(100, 255, 100),
                    EventColor::Combat => egui::Color32::from_rgb(255, 100, 100),
                    EventColor::Death => egui::Color32::from_rgb(150, 150, 150),
                    EventColor::Hunter => egui::Color32::from_rgb(100, 200, 255),
                };

                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("[{}]", event.tick))
                            .color(egui::Color32::from_rgb(180, 180, 200))
                            .size(11.0)
                            .monospace(),
                    );
                    ui.label(
                        egui::RichText::new(&event.description)
                            .color(color)
                            .size(11.0),
                    );
                });
            }
        });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
