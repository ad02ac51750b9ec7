use std::fmt;
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::style::{self, Stylize};
use crossterm::{cursor, event as term_event, execute, terminal};
use instant::Instant;
use scopeguard::defer;
use url::Url;

use symbiotic_chess::controller::Controller;
use symbiotic_chess::event::EngineRequest;
use symbiotic_chess::network::EngineApi;

use crate::tui;


pub struct ClientConfig {
    pub server_url: String,
}

enum IncomingEvent {
    Terminal(term_event::Event),
    Tick,
}

fn writeln_raw(stdout: &mut io::Stdout, v: impl fmt::Display) -> io::Result<()> {
    let s = v.to_string();
    // Note. Not using `lines()` because it removes trailing new line.
    for line in s.split('\n') {
        execute!(stdout, style::Print(line), cursor::MoveToNextLine(1), cursor::Hide)?;
    }
    Ok(())
}

fn render(
    stdout: &mut io::Stdout, app_start_time: Instant, controller: &Controller,
) -> io::Result<()> {
    let now = Instant::now();
    execute!(stdout, cursor::MoveTo(0, 0))?;
    match controller.snapshot() {
        Some(snapshot) => {
            writeln_raw(stdout, tui::render_game(snapshot, controller.selected()))?;
            // Note. Don't clear the board to avoid blinking.
            execute!(stdout, terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }
        None => {
            execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
            writeln_raw(stdout, "Waiting for the engine service...")?;
        }
    }

    // Simulate cursor: real cursor blinking is broken with Show/Hide.
    let show_cursor = now.duration_since(app_start_time).as_millis() % 1000 >= 500;
    let cursor = if show_cursor { '▂' } else { ' ' };
    writeln_raw(stdout, format!("> {}{}", controller.move_input(), cursor))?;
    writeln_raw(
        stdout,
        "click two squares or type a move; enter: move  M: merge  D: disintegrate  R: reset  Q: quit"
            .with(style::Color::DarkGrey),
    )?;
    Ok(())
}

// Every engine round trip ends in a fresh snapshot; transport failures are
// logged and leave the previous snapshot on screen.
fn execute_request(api: &EngineApi, controller: &mut Controller, request: EngineRequest) {
    match api.perform(&request) {
        Ok(snapshot) => {
            if request.is_mutation() {
                controller.reset_selection();
            }
            controller.set_snapshot(snapshot);
        }
        Err(err) => {
            log::error!("Engine request {:?} failed: {:?}", request, err);
        }
    }
}

pub fn run(config: ClientConfig) -> io::Result<()> {
    let base_url = Url::parse(&config.server_url).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Bad server URL '{}': {}", config.server_url, err),
        )
    })?;
    let api = EngineApi::new(base_url);
    let mut controller = Controller::new();
    execute_request(&api, &mut controller, EngineRequest::FetchState);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        term_event::EnableMouseCapture,
        cursor::Hide
    )?;
    defer! {
        let _ = execute!(
            io::stdout(),
            term_event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        let _ = terminal::disable_raw_mode();
    };
    let app_start_time = Instant::now();

    let (tx, rx) = mpsc::channel();
    let tx_terminal = tx.clone();
    let tx_tick = tx;
    thread::spawn(move || {
        loop {
            let ev = term_event::read().unwrap();
            if tx_terminal.send(IncomingEvent::Terminal(ev)).is_err() {
                break;
            }
        }
    });
    thread::spawn(move || {
        loop {
            thread::sleep(Duration::from_millis(100));
            if tx_tick.send(IncomingEvent::Tick).is_err() {
                break;
            }
        }
    });

    for event in rx {
        match event {
            IncomingEvent::Terminal(term_event::Event::Key(key))
                if key.kind != term_event::KeyEventKind::Release =>
            {
                match key.code {
                    term_event::KeyCode::Char('Q') => return Ok(()),
                    term_event::KeyCode::Char('M') => {
                        if let Some(request) = controller.request_merge() {
                            execute_request(&api, &mut controller, request);
                        }
                    }
                    term_event::KeyCode::Char('D') => {
                        if let Some(request) = controller.request_disintegrate() {
                            execute_request(&api, &mut controller, request);
                        }
                    }
                    term_event::KeyCode::Char('R') => {
                        let request = controller.request_reset();
                        execute_request(&api, &mut controller, request);
                    }
                    term_event::KeyCode::Enter => {
                        if let Some(request) = controller.request_move() {
                            execute_request(&api, &mut controller, request);
                        }
                    }
                    term_event::KeyCode::Esc => controller.reset_selection(),
                    term_event::KeyCode::Backspace => controller.pop_input(),
                    term_event::KeyCode::Char(ch) => controller.push_input(ch),
                    _ => {}
                }
            }
            IncomingEvent::Terminal(term_event::Event::Mouse(mouse)) => {
                if mouse.kind == term_event::MouseEventKind::Down(term_event::MouseButton::Left) {
                    if let Some(pos) = tui::board_cell_at(mouse.column, mouse.row) {
                        if let Some(request) = controller.click_square(pos) {
                            execute_request(&api, &mut controller, request);
                        }
                    }
                }
            }
            IncomingEvent::Terminal(_) => {}
            IncomingEvent::Tick => {
                // Any event triggers repaint, so no additional action is required.
            }
        }
        render(&mut stdout, app_start_time, &controller)?;
    }
    panic!("Unexpected end of events stream");
}
