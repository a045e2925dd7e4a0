use macroquad::prelude::*;

use petridish::simulation::params::Params;
use petridish::simulation::world::World;

mod graphics;
mod ui;

#[macroquad::main("Petri Dish")]
async fn main() {
    let mut genesis = true;

    let mut params = Params::default();
    let mut world = World::new();
    let mut sink = graphics::ScreenSink::new();
    let mut ui_state = ui::UiState::new();

    println!("Starting petri dish simulation");

    loop {
        if genesis {
            clear_background(LIGHTGRAY);
            let text = "Start the dish by pressing Enter";
            let font_size = 30.0;

            let text_size = measure_text(text, None, font_size as _, 1.0);
            draw_text(
                text,
                screen_width() / 2. - text_size.width / 2.,
                screen_height() / 2. - text_size.height / 2.,
                font_size,
                DARKGRAY,
            );

            if is_key_down(KeyCode::Enter) {
                genesis = false;

                // the dish is sized once per start; window resizes mid-run
                // leave the bounds alone
                params.box_width = screen_width();
                params.box_height = screen_height();
                world.restart(&params, &mut sink);
            }
            next_frame().await;
            continue;
        }

        clear_background(WHITE);

        world.tick(&params, &mut sink);
        ui_state.update_history(&world);

        sink.draw();
        ui::draw_ui(&mut ui_state, &world, &mut params);
        ui::process_egui();

        if ui_state.restart_requested {
            ui_state.restart_requested = false;
            ui_state.reset_history();
            params.box_width = screen_width();
            params.box_height = screen_height();
            world.restart(&params, &mut sink);
        }

        next_frame().await
    }
}
