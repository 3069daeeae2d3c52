use clap::{App, Arg};
use nix::sys::termios::{tcgetattr, tcsetattr, LocalFlags, SetArg, Termios};
use std::process;

use lc3vm::Config;

const STDIN_FILENO: i32 = 0;

fn main() {
    env_logger::init();

    let matches = App::new("LC-3 VM")
        .arg(
            Arg::with_name("debug")
                .short("d")
                .long("debug")
                .help("Runs under the interactive debugger"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .help("Treats a reserved opcode as a fatal error instead of a no-op"),
        )
        .arg(
            Arg::with_name("PROGRAM")
                .help("The program image to run.")
                .required(true)
                .index(1),
        )
        .get_matches();

    let config = Config::new(
        matches.value_of("PROGRAM").unwrap().to_string(),
        matches.is_present("debug"),
        matches.is_present("strict"),
    );

    let original_termios = disable_input_buffering();

    let result = lc3vm::run(config);

    if let Some(termios) = original_termios {
        restore_input_buffering(termios);
    }

    if let Err(e) = result {
        eprintln!("Application error: {}", e);
        process::exit(1);
    }
}

/// Puts the terminal into raw-ish mode (no line buffering, no local echo) so the
/// VM can poll the keyboard a character at a time. Returns the prior settings,
/// so they can be restored before the process exits.
fn disable_input_buffering() -> Option<Termios> {
    let original = match tcgetattr(STDIN_FILENO) {
        Ok(termios) => termios,
        Err(err) => {
            eprintln!("Unable to read terminal settings: {}", err);
            return None;
        }
    };

    let mut termios = original.clone();
    termios.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);

    if let Err(err) = tcsetattr(STDIN_FILENO, SetArg::TCSANOW, &termios) {
        eprintln!("Unable to set terminal settings: {}", err);
        return None;
    }

    Some(original)
}

fn restore_input_buffering(original: Termios) {
    if let Err(err) = tcsetattr(STDIN_FILENO, SetArg::TCSANOW, &original) {
        eprintln!("Unable to restore terminal settings: {}", err);
    }
}
