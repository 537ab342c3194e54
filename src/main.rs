use log::info;
use macroquad::prelude::*;
use life_arcade::{
    App, Flow,
    config::{config_path, load_config},
    input, rendering,
};

fn window_conf() -> Conf {
    let (width, height) = load_config(&config_path()).window_size();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let path = config_path();
    let config = load_config(&path);
    info!(
        "board {}x{}, {} ticks/s, config at {}",
        config.grid_height,
        config.grid_width,
        config.ticks_per_second,
        path.display()
    );
    let mut app = App::new(config, path);

    'frames: loop {
        // Input -> transitions
        let menu = input::current_menu(&app);
        for action in input::collect_actions(&app, menu.as_ref()) {
            if app.dispatch(action) == Flow::Quit {
                break 'frames;
            }
        }

        app.update(get_frame_time());

        // The screen may have changed; lay out again before drawing
        let menu = input::current_menu(&app);
        rendering::draw(&app, menu.as_ref());

        next_frame().await;
    }

    info!("bye");
}
