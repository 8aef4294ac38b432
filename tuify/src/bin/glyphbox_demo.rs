/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Runs each widget in the current terminal. Try:
//!
//! ```text
//! cargo run --bin glyphbox-demo -- menu
//! cargo run --bin glyphbox-demo -- dialogue --delay-ms 10 --log-file
//! ```

use std::{io::Stdout, time::Duration};

use clap::{Args, Parser, Subcommand};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use glyphbox_tuify::{CrosstermKeyPressReader, DEFAULT_LOG_FILE_NAME, DialogueStyle,
                     FrameStyle, OutputBuffer, PromptStyle, Selection, SelectorStyle,
                     TracingConfig, clear_region, col, color_bg, color_fg,
                     draw_box, draw_text, height, prompt, row, select_horizontal,
                     select_vertical, speak, text_speak, try_initialize_logging_global,
                     width};
use miette::IntoDiagnostic;

const MENU_OPTIONS: [&str; 5] = ["New Game", "Load Game", "Options", "Credits", "Quit"];

const DIALOGUE_TEXT: &str = "Welcome, traveler! This box reveals its text one \
                             character at a time. Press any key to show the rest of a \
                             line at once.\nWhen the \u{25BC} appears, press Enter, Space \
                             or Z to turn the page. \x1b[33mInline colors\x1b[37m work \
                             too, and so do accents: ol\u{e1}, cora\u{e7}\u{e3}o.";

#[derive(Debug, Parser)]
#[command(bin_name = "glyphbox-demo")]
#[command(about = "Try the glyphbox widgets in your terminal")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArg {
    #[command(subcommand)]
    command: DemoCommand,

    #[command(flatten)]
    global_options: GlobalOption,
}

#[derive(Debug, Args)]
struct GlobalOption {
    /// Log to a file, `log.txt` if no path is given. Watch it with `tail -f`.
    #[arg(
        global = true,
        long,
        short = 'l',
        value_name = "path",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE_NAME
    )]
    log_file: Option<String>,

    /// Pause after each character revealed by the dialogue, in milliseconds.
    #[arg(global = true, long, value_name = "ms", default_value_t = 30)]
    delay_ms: u64,
}

#[derive(Debug, Subcommand)]
enum DemoCommand {
    /// A box with a vertical menu inside.
    Menu,
    /// Ask for a name, up to 8 characters.
    Name,
    /// A colored box and prompt. Type `q` to quit.
    Colors,
    /// A paged typewriter dialogue, then a horizontal choice.
    Dialogue,
}

/// Puts the terminal in raw mode until dropped, so keys arrive one at a time and are
/// not echoed.
#[derive(Debug)]
struct RawModeGuard;

impl RawModeGuard {
    fn try_new() -> miette::Result<Self> {
        enable_raw_mode().into_diagnostic()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(message = "Could not leave raw mode", ?error);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli_arg = CliArg::parse();

    if let Some(log_file) = &cli_arg.global_options.log_file {
        try_initialize_logging_global(TracingConfig::new_file(Some(log_file.clone())))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut buf = OutputBuffer::new_stdout();
    let mut keys = CrosstermKeyPressReader;
    let char_delay = Duration::from_millis(cli_arg.global_options.delay_ms);

    {
        let _raw_mode = RawModeGuard::try_new()?;
        buf.clear_screen();
        match cli_arg.command {
            DemoCommand::Menu => run_menu(&mut buf, &mut keys)?,
            DemoCommand::Name => run_name(&mut buf, &mut keys)?,
            DemoCommand::Colors => run_colors(&mut buf, &mut keys)?,
            DemoCommand::Dialogue => run_dialogue(&mut buf, &mut keys, char_delay)?,
        }
        buf.move_cursor_to(col(1) + row(20));
        buf.reset_style();
        buf.show_cursor();
        buf.flush()?;
    }

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

fn run_menu(
    buf: &mut OutputBuffer<Stdout>,
    keys: &mut CrosstermKeyPressReader,
) -> miette::Result<()> {
    draw_box(
        buf,
        col(1) + row(1),
        width(20) + height(10),
        "UI",
        "",
        &FrameStyle::default(),
    );

    let selection = select_vertical(
        buf,
        keys,
        col(3) + row(3),
        &MENU_OPTIONS,
        &SelectorStyle::default(),
    )?;

    let message = match selection {
        Selection::Confirmed(0) => "Starting a new game...".to_string(),
        Selection::Confirmed(1) => "Loading save...".to_string(),
        Selection::Confirmed(4) => "Leaving...".to_string(),
        Selection::Confirmed(index) => format!("You picked {}.", MENU_OPTIONS[index]),
        Selection::Cancelled => "Esc pressed, nothing selected.".to_string(),
    };
    draw_text(buf, col(3) + row(13), &message, "", "");
    buf.flush()?;
    Ok(())
}

fn run_name(
    buf: &mut OutputBuffer<Stdout>,
    keys: &mut CrosstermKeyPressReader,
) -> miette::Result<()> {
    draw_text(buf, col(1) + row(1), "What is your name?", "", "");
    draw_text(buf, col(1) + row(2), ">", "", "");

    let name = prompt(buf, keys, col(3) + row(2), &PromptStyle::new(8, ""))?;

    draw_text(buf, col(3) + row(2), &format!("Hello, {name}!"), "", "");
    buf.flush()?;
    Ok(())
}

fn run_colors(
    buf: &mut OutputBuffer<Stdout>,
    keys: &mut CrosstermKeyPressReader,
) -> miette::Result<()> {
    let frame_style = FrameStyle::from_hex_colors("#FFFFFF", "#0000FF", "#00FFFF");
    let input_color = format!("{}{}", color_fg("#0000FF"), color_bg("#FFFFFF"));
    let prompt_style = PromptStyle::new(8, &input_color);

    loop {
        draw_box(
            buf,
            col(1) + row(1),
            width(20) + height(10),
            "ui",
            "Hello colorful world. Type q to quit.",
            &frame_style,
        );
        let answer = prompt(buf, keys, col(3) + row(6), &prompt_style)?;
        if answer == "q" {
            break;
        }
    }

    clear_region(buf, col(1) + row(1), width(20) + height(10), None);
    buf.flush()?;
    Ok(())
}

fn run_dialogue(
    buf: &mut OutputBuffer<Stdout>,
    keys: &mut CrosstermKeyPressReader,
    char_delay: Duration,
) -> miette::Result<()> {
    let box_pos = col(2) + row(2);
    let box_size = width(40) + height(3);
    let style = DialogueStyle::default().with_char_delay(char_delay);

    speak(buf, keys, box_pos, box_size, "Guide", DIALOGUE_TEXT, &style)?;
    clear_region(buf, box_pos, box_size, None);
    text_speak(buf, keys, col(2) + row(2), "Read it again?", &style)?;

    let selection = select_horizontal(
        buf,
        keys,
        col(2) + row(4),
        &["Yes", "No"],
        &SelectorStyle::default(),
    )?;
    let message = match selection {
        Selection::Confirmed(0) => "Run the dialogue demo again to see it.",
        _ => "Bye!",
    };
    draw_text(buf, col(2) + row(6), message, "", "");
    buf.flush()?;
    Ok(())
}
