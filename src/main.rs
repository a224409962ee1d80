mod app;
mod components;
mod config;
mod datetime;
mod event;
mod logging;
mod notify;
mod theme;
mod tui;

use std::time::{Duration, Instant};

use app::App;
use color_eyre::Result;
use config::Config;
use ratatui::layout::{Constraint, Layout, Rect};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    let _log_guard = logging::init(&config.log_dir())?;

    let initial = std::env::args().nth(1);
    let mut app = App::new(&config, initial);

    tui::install_panic_hook();

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    if let Err(ref e) = result {
        tracing::error!("exiting with error: {:?}", e);
    }
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| {
            let area = frame.area();

            // Main layout: form + status bar
            let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            let form_area = form_rect(layout[0]);
            let trigger = components::SlotForm::render(
                frame,
                form_area,
                &app.value,
                app.active_field,
                &app.picker,
                app.today,
            );

            app.picker.render(frame, trigger, &app.value, app.today);

            components::ToastView::render(frame, layout[0], &app.toasts);
            components::StatusBar::render(frame, layout[1], app.mode_label(), app.hints());
        })?;

        if let Some(key) = event::next_key_press(Duration::from_millis(100))? {
            app.handle_key(key);
        }
        app.tick(Instant::now());
    }

    tracing::info!("quit after {} change(s), final value {:?}", app.changes, app.value);
    Ok(())
}

/// The form box: full width up to 72 columns, five rows tall.
fn form_rect(area: Rect) -> Rect {
    let w = area.width.min(72);
    let h = area.height.min(5);
    Rect::new(area.x, area.y, w, h)
}
