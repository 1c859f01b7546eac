//! Interactive gallery browser
//!
//! Reads pointer commands line by line and re-renders the affected card.
//! Generic over the input and output streams so sessions can be scripted.

use crate::view::flip::CardEvent;
use crate::view::gallery::Gallery;
use crate::view::render::{render_card, render_page, RenderOptions};
use crate::{DexError, Result};
use std::io::{BufRead, Write};

/// A parsed browser command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send a pointer event to the card at a 1-based position
    Event(usize, CardEvent),
    /// Re-render the whole gallery
    View,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// `<n>` and `c <n>` click, `e <n>` enters, `l <n>` leaves.
    pub fn parse(input: &str) -> std::result::Result<Command, String> {
        let mut parts = input.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("empty command".to_string());
        };

        let command = match head {
            "q" | "quit" => Command::Quit,
            "?" | "h" | "help" => Command::Help,
            "v" | "view" => Command::View,
            "c" | "click" => Command::Event(parse_position(parts.next())?, CardEvent::Click),
            "e" | "enter" => {
                Command::Event(parse_position(parts.next())?, CardEvent::PointerEnter)
            }
            "l" | "leave" => {
                Command::Event(parse_position(parts.next())?, CardEvent::PointerLeave)
            }
            number => Command::Event(parse_position(Some(number))?, CardEvent::Click),
        };

        if let Some(extra) = parts.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }
        Ok(command)
    }
}

fn parse_position(arg: Option<&str>) -> std::result::Result<usize, String> {
    let arg = arg.ok_or_else(|| "missing card number".to_string())?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid card number '{arg}'")),
    }
}

/// Drives a gallery from line-based commands
pub struct Browser<'a, R, W> {
    gallery: &'a mut Gallery,
    options: RenderOptions,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Browser<'a, R, W> {
    pub fn new(gallery: &'a mut Gallery, options: RenderOptions, input: R, output: W) -> Self {
        Browser {
            gallery,
            options,
            input,
            output,
        }
    }

    /// Run until `q` or end of input
    pub fn run(&mut self) -> Result<()> {
        self.output
            .write_all(render_page(self.gallery, &self.options).as_bytes())?;
        self.write_help()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => return Ok(()),
                Ok(Command::Help) => self.write_help()?,
                Ok(Command::View) => {
                    let page = render_page(self.gallery, &self.options);
                    self.output.write_all(page.as_bytes())?;
                }
                Ok(Command::Event(position, event)) => self.deliver(position, event)?,
                Err(message) => writeln!(self.output, "{message} (? for help)")?,
            }
        }
    }

    fn deliver(&mut self, position: usize, event: CardEvent) -> Result<()> {
        match self.gallery.dispatch(position, event) {
            Ok(state) => {
                let card = self.gallery.card(position)?;
                writeln!(self.output, "{} #{} shows its {state}", card.view.name, card.view.number)?;
                for line in render_card(&card.view, card.state, &self.options) {
                    writeln!(self.output, "{line}")?;
                }
            }
            Err(DexError::NotFound(n)) => writeln!(
                self.output,
                "No card {n}. Enter 1-{}.",
                self.gallery.len()
            )?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn write_help(&mut self) -> Result<()> {
        writeln!(self.output, "\n=== Help ===")?;
        writeln!(self.output, "  <n> | c <n>  - Click card n (flip it)")?;
        writeln!(self.output, "  e <n>        - Point at card n (show moves)")?;
        writeln!(self.output, "  l <n>        - Move pointer off card n (show front)")?;
        writeln!(self.output, "  v            - View the whole gallery")?;
        writeln!(self.output, "  ?            - Show this help")?;
        writeln!(self.output, "  q            - Quit")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
