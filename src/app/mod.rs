pub mod print;
mod prompt;
mod terminal;

pub use terminal::TerminalSession;

use std::io::{Stdout, Write};

use crossterm::{
    ExecutableCommand, cursor,
    event::{self, KeyCode},
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self as term, ClearType},
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    config::Config,
    error::Result,
    generators::generate_maze,
    maze::{Cell, Dimensions, Grid},
    render::{Layout, TerminalRenderer, draw_maze, draw_solution},
};
use prompt::SidePrompt;

/// What is currently on screen, so it can be redrawn after a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Maze,
    Solution,
}

/// Interactive terminal driver: asks for maze dimensions, then generates, draws and
/// solves mazes on key presses.
pub struct App {
    config: Config,
    /// Number of mazes generated so far, used to derive per-maze seeds
    generation: u64,
}

impl App {
    /// Rows above the canvas reserved for the controls and status lines
    const HEADER_ROWS: u16 = 2;
    const CONTROLS: &'static str = "g: new maze  d: draw maze  s: draw solution  Esc/q: exit";

    pub fn new(config: Config) -> Self {
        Self {
            config,
            generation: 0,
        }
    }

    /// Seed for the next maze. A configured seed yields a reproducible sequence of mazes.
    fn next_seed(&mut self) -> Option<u64> {
        let seed = self
            .config
            .seed
            .map(|seed| seed.wrapping_add(self.generation));
        self.generation += 1;
        seed
    }

    /// Main application loop
    pub fn run(&mut self, stdout: &mut Stdout) -> Result<()> {
        let dimensions = match App::ask_maze_dimensions(stdout)? {
            Some(dims) => dims,
            None => return Ok(()),
        };
        tracing::info!(
            "[app] maze dimensions set to {}x{}",
            dimensions.width(),
            dimensions.height()
        );

        queue!(stdout, term::Clear(ClearType::All), cursor::Hide)?;
        let layout = Layout::square(1);
        let mut renderer = TerminalRenderer::new(App::HEADER_ROWS);
        let from = Cell::ORIGIN;
        let to = dimensions.far_corner();

        let mut grid = generate_maze(dimensions, self.next_seed());
        let mut view = View::Maze;
        let mut status = App::show(&grid, &layout, view, from, to, &mut renderer)?;
        App::print_header(stdout, &status)?;

        tracing::info!("[app] started main loop");
        loop {
            let next_view = match event::read()? {
                event::Event::Key(event::KeyEvent { code, kind, .. })
                    if kind == event::KeyEventKind::Press =>
                {
                    match code {
                        KeyCode::Char('g') => {
                            grid = generate_maze(dimensions, self.next_seed());
                            View::Maze
                        }
                        KeyCode::Char('d') => View::Maze,
                        KeyCode::Char('s') => View::Solution,
                        KeyCode::Esc | KeyCode::Char('q') => {
                            tracing::debug!("[app loop] exit key pressed");
                            break;
                        }
                        _ => continue,
                    }
                }
                event::Event::Resize(_, _) => view,
                _ => continue,
            };
            view = next_view;
            status = App::show(&grid, &layout, view, from, to, &mut renderer)?;
            App::print_header(stdout, &status)?;
        }
        tracing::info!("[app] exiting main loop");
        Ok(())
    }

    /// Draws the requested view and returns the status line describing it.
    fn show(
        grid: &Grid,
        layout: &Layout,
        view: View,
        from: Cell,
        to: Cell,
        renderer: &mut TerminalRenderer,
    ) -> std::io::Result<String> {
        draw_maze(grid, layout, renderer);
        let mut status = format!(
            "{}x{} maze, {} walkway cells",
            grid.width(),
            grid.height(),
            grid.walkway_count()
        );
        if view == View::Solution {
            match draw_solution(grid, layout, from, to, renderer) {
                Some(path) => {
                    tracing::info!("[app] path from {} to {} has {} steps", from, to, path.cost());
                    status.push_str(&format!(", path of {} steps", path.cost()));
                }
                None => {
                    tracing::info!("[app] no path from {} to {}", from, to);
                    status.push_str(&format!(", no path from {} to {}", from, to));
                }
            }
        }
        if !renderer.present()? {
            tracing::debug!("[app] terminal too small for the canvas");
        }
        Ok(status)
    }

    /// Print the controls and status lines above the canvas, truncated to the terminal width
    fn print_header(stdout: &mut Stdout, status: &str) -> std::io::Result<()> {
        let term_width = term::size().map(|(w, _)| w as usize).unwrap_or(80);
        let (controls, _) = App::CONTROLS.unicode_truncate(term_width);
        let (status, _) = status.unicode_truncate(term_width);
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            term::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(controls.with(Color::Cyan)),
            cursor::MoveTo(0, 1),
            term::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(status.with(Color::Yellow).attribute(Attribute::Bold)),
        )?;
        stdout.flush()
    }

    /// Ask user for maze dimensions
    /// Returns None if user cancels input with Esc
    fn ask_maze_dimensions(stdout: &mut Stdout) -> Result<Option<Dimensions>> {
        stdout.execute(style::PrintStyledContent(
            "Enter maze dimensions, or press Esc to exit. Press Enter on an empty line to fill \
the terminal. Odd sizes put the goal corner on a walkway.\r\n"
                .with(Color::Blue),
        ))?;

        let (width_prompt, height_prompt) = match term::size() {
            Ok((term_width, term_height)) => (
                SidePrompt::fitting("Width: ", term_width, TerminalRenderer::CELL_WIDTH),
                SidePrompt::fitting(
                    "Height: ",
                    term_height.saturating_sub(App::HEADER_ROWS),
                    1,
                ),
            ),
            // Size unknown, allow anything the grid can hold
            Err(_) => (
                SidePrompt { label: "Width: ", max: Dimensions::MAX },
                SidePrompt { label: "Height: ", max: Dimensions::MAX },
            ),
        };

        let Some(width) = width_prompt.read(stdout)? else {
            return Ok(None);
        };
        stdout.execute(style::PrintStyledContent(
            format!("Width set to {}\r\n", width)
                .with(Color::Green)
                .attribute(Attribute::Bold),
        ))?;
        let Some(height) = height_prompt.read(stdout)? else {
            return Ok(None);
        };

        Ok(Some(Dimensions::new(width, height)?))
    }
}
