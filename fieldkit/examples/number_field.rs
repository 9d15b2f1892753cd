//! Interactive demo: an amount field, a date field and a toggle.
//!
//! Tab cycles focus, Space flips the toggle, Esc quits.
//! Logs go to `fieldkit_demo.log`.

use std::fs::File;
use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use fieldkit::{
    ErrorDisplay, FieldView, Key, Modifiers, NumberField, NumberFieldConfig, Rules, TextField,
    TextFieldConfig, Theme, Toggle, ValueStore,
};
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Amount,
    Date,
    Toggle,
}

fn draw_field(out: &mut impl Write, row: u16, view: &FieldView, theme: &Theme) -> io::Result<()> {
    let label = view.label.as_deref().unwrap_or("");
    queue!(out, MoveTo(2, row), Print(format!("{label:<8}")))?;
    if let Some(rgb) = theme.text_color(&view.classes) {
        queue!(out, SetForegroundColor(Color::Rgb { r: rgb.r, g: rgb.g, b: rgb.b }))?;
    }
    let line = view.lines().join(" ");
    queue!(out, MoveTo(12, row), Print(format!("[{line:<24}]")), ResetColor)?;
    match (&view.error, view.error_display) {
        (Some(error), ErrorDisplay::Inline | ErrorDisplay::Below) => {
            queue!(out, MoveTo(40, row), Print(error))?;
        }
        _ => {}
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let log_file = File::create("fieldkit_demo.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let amount = ValueStore::new("1250.5".to_string());
    let date = ValueStore::new(String::new());
    let enabled = ValueStore::new(false);

    let config = NumberFieldConfig::new()
        .label("Amount")
        .prefix("$ ")
        .integer_limit(7)
        .decimal_limit(2)
        .clearable()
        .autofocus();
    let mut amount_field = NumberField::new(config, amount.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?
        .with_rules(Rules::new().required("Amount is required"));
    let mut date_field = TextField::new(
        TextFieldConfig::new().label("Date").mask("date").placeholder("MM/DD/YYYY"),
        date.clone(),
    )
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut toggle = Toggle::new(enabled.clone()).label("Enabled");
    let theme = Theme::default();

    amount_field.mount();
    date_field.mount();
    let mut focus = Focus::Amount;

    let mut out = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = (|| -> io::Result<()> {
        loop {
            queue!(out, Clear(ClearType::All), MoveTo(2, 0), Print("Tab: next field, Esc: quit"))?;
            let amount_view = amount_field.view();
            let date_view = date_field.view();
            draw_field(&mut out, 2, &amount_view, &theme)?;
            draw_field(&mut out, 3, &date_view, &theme)?;
            let mark = if toggle.is_on() { "x" } else { " " };
            queue!(out, MoveTo(2, 4), Print(format!("Enabled [{mark}]")))?;
            queue!(
                out,
                MoveTo(2, 6),
                Print(format!("amount = {:?}  date = {:?}", amount.get(), date.get()))
            )?;

            let caret = match focus {
                Focus::Amount => amount_view.caret.map(|(_, col)| (13 + col as u16, 2)),
                Focus::Date => date_view.caret.map(|(_, col)| (13 + col as u16, 3)),
                Focus::Toggle => Some((11, 4)),
            };
            if let Some((col, row)) = caret {
                queue!(out, MoveTo(col, row), Show)?;
            }
            out.flush()?;

            amount_field.after_render();
            date_field.after_render();

            let CrosstermEvent::Key(key_event) = event::read()? else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }
            let key = Key::from(key_event.code);
            let modifiers = Modifiers::from(key_event.modifiers);

            match (key, focus) {
                (Key::Escape, _) => return Ok(()),
                (Key::Tab, Focus::Amount) => {
                    amount_field.blur();
                    date_field.focus();
                    focus = Focus::Date;
                }
                (Key::Tab, Focus::Date) => {
                    date_field.blur();
                    focus = Focus::Toggle;
                }
                (Key::Tab, Focus::Toggle) => {
                    amount_field.focus();
                    focus = Focus::Amount;
                }
                (_, Focus::Amount) => {
                    amount_field.handle_key(key, modifiers);
                }
                (_, Focus::Date) => {
                    date_field.handle_key(key, modifiers);
                }
                (_, Focus::Toggle) => {
                    toggle.handle_key(key);
                }
            }

            for event in amount_field
                .take_events()
                .into_iter()
                .chain(date_field.take_events())
                .chain(toggle.take_events())
            {
                log::info!("event: {event:?}");
            }
        }
    })();

    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}
