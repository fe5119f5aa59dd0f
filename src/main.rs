use macroquad::prelude::{
    BLACK, Conf, clear_background, get_frame_time, get_keys_pressed, next_frame,
};

use arcade_hub::app::{App, FIELD_HEIGHT, FIELD_WIDTH, Paths};
use arcade_hub::audio::SoundBank;
use arcade_hub::input::frame_keys;
use arcade_hub::{logging, render};

// Long stalls (window drag, breakpoints) must not replay dozens of ticks at once.
const MAX_FRAME_DT: f32 = 0.25;

fn window_conf() -> Conf {
    Conf {
        window_title: "Arcade Hub".to_owned(),
        window_width: FIELD_WIDTH,
        window_height: FIELD_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    logging::init();

    let paths = Paths::from_env();
    let mut app = App::new(paths.clone());

    let (mut sounds, failures) = SoundBank::load(&paths.sounds()).await;
    for error in failures {
        app.report("during sound initialization", error);
    }

    loop {
        for key in frame_keys(get_keys_pressed()) {
            app.handle_key(key);
        }
        if app.should_quit() {
            break;
        }

        app.update(get_frame_time().min(MAX_FRAME_DT));
        for cue in app.take_cues() {
            sounds.play(cue);
        }

        clear_background(BLACK);
        render::draw_app(&app);

        next_frame().await;
    }

    tracing::info!("arcade hub closed");
}
