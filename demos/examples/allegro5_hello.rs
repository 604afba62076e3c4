//! Minimal Dear ImGui window on top of Allegro 5.
//!
//! Run with `cargo run -p backend-demos --example allegro5_hello`.

use allegro::{Color, Core, Display, Event, EventQueue, Timer};
use allegro_primitives::PrimitivesAddon;
use dear_imgui_allegro5::{AllegroPlatform, AllegroRenderer};
use dear_imgui_rs::{Condition, Context};

fn main() {
    backend_demos::init_logging();

    let core = Core::init().unwrap();
    core.install_keyboard().unwrap();
    core.install_mouse().unwrap();
    let primitives = PrimitivesAddon::init(&core).unwrap();

    let display = Display::new(&core, 1024, 768).unwrap();
    display.set_window_title("Dear ImGui + Allegro 5");

    let timer = Timer::new(&core, 1.0 / 60.0).unwrap();
    let queue = EventQueue::new(&core).unwrap();
    queue.register_event_source(display.get_event_source());
    queue.register_event_source(core.get_keyboard_event_source());
    queue.register_event_source(core.get_mouse_event_source());
    queue.register_event_source(timer.get_event_source());

    let mut imgui = Context::create_or_panic();
    let mut platform = AllegroPlatform::new(&mut imgui, &display).unwrap();
    let mut renderer = AllegroRenderer::new(&mut imgui, &primitives).unwrap();

    let mut clicks = 0u32;
    let mut redraw = true;
    timer.start();

    'main: loop {
        if redraw && queue.is_empty() {
            platform.new_frame(&mut imgui, &display);
            let ui = imgui.frame();

            ui.window("Hello from Allegro 5")
                .size([320.0, 160.0], Condition::FirstUseEver)
                .build(|| {
                    ui.text("Dear ImGui rendered through al_draw_prim");
                    ui.separator();
                    if ui.button("Click me") {
                        clicks += 1;
                    }
                    ui.text(&format!("Clicked {clicks} times"));
                });

            platform.prepare_render(ui);

            core.clear_to_color(Color::from_rgb_f(0.27, 0.30, 0.33));
            renderer.render(imgui.render()).unwrap();
            core.flip_display();
            redraw = false;
        }

        match queue.wait_for_event() {
            Event::DisplayClose { .. } => break 'main,
            Event::TimerTick { .. } => redraw = true,
            event => {
                platform.handle_event(&mut imgui, &event);
            }
        }
    }
}
