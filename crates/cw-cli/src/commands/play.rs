use std::io::{self, BufRead, Write};

use colored::Colorize;

use cw_session::{Session, SessionConfig, Tone};

pub fn run(seed: Option<u64>, journal_preview: usize) -> Result<(), String> {
    let mut config = SessionConfig::default().with_journal_preview(journal_preview);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::new(config);

    println!("  {} Castaway draw simulator", "Starting".bold());
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!(
        "  Bag ready ({} tokens). Weather deck ready ({} cards).",
        session.bag().len(),
        session.deck().remaining()
    );
    println!("  Commands: f (food), r (weather), w[1-5] (wood), q (quit), help\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }
        // Undecodable bytes become U+FFFD and fall through to an unknown command.
        let line = String::from_utf8_lossy(&buf);

        match session.process(&line) {
            Ok(response) => {
                if response.text.is_empty() {
                    continue;
                }
                match response.tone {
                    Tone::Plain => println!("{}\n", response.text),
                    Tone::Alert => println!("{}\n", response.text.red().bold()),
                    Tone::Farewell => {
                        println!("{}", response.text);
                        break;
                    }
                }
            }
            Err(e) => {
                println!("{}", format!("error: {e}").yellow());
                if e.is_parse_error() {
                    println!("{}", "Type 'help' for command syntax.".dimmed());
                }
                println!();
            }
        }
    }

    log::info!(
        "session ended in round {} with {} journal entries",
        session.round(),
        session.journal().len()
    );
    Ok(())
}
