//! Console input: prompts and validation of raw text.

use std::io::{self, BufRead, Write};
use strictly_rps::Gesture;
use tracing::{debug, instrument};

/// Prompt shown before each round.
pub const CHOICE_PROMPT: &str = "  Choose: 1) Rock  2) Scissors  3) Paper  > ";

/// Parses a menu number (1-3) or a gesture name, ignoring case.
#[instrument]
pub fn parse_choice(input: &str) -> Option<Gesture> {
    let input = input.trim();
    if let Ok(number) = input.parse::<u8>() {
        return number
            .checked_sub(1)
            .and_then(|index| Gesture::from_index(index).ok());
    }
    Gesture::ALL
        .into_iter()
        .find(|g| g.display_name().eq_ignore_ascii_case(input))
}

/// Prompts until a valid gesture is entered.
///
/// Returns `None` when the input is closed.
#[instrument(skip_all)]
pub fn read_choice<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Gesture>> {
    loop {
        write!(output, "{}", CHOICE_PROMPT)?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_choice(&line) {
            Some(gesture) => return Ok(Some(gesture)),
            None => {
                debug!(input = %line.trim(), "Rejected choice");
                writeln!(output, "  Invalid input. Try again.")?;
            }
        }
    }
}

/// Asks for the player's name, falling back to `"Player"` when left blank.
#[instrument(skip_all)]
pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "  Enter your name: ")?;
    output.flush()?;

    let name = read_line(input)?.unwrap_or_default();
    let name = name.trim();
    Ok(if name.is_empty() {
        "Player".to_string()
    } else {
        name.to_string()
    })
}

/// Asks whether to play another session. Anything but `y` means no.
#[instrument(skip_all)]
pub fn read_play_again<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "\n  Play again? (y/n): ")?;
    output.flush()?;

    Ok(read_line(input)?
        .map(|answer| answer.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
