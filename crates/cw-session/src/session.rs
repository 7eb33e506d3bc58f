//! Castaway session management.
//!
//! `Session` owns the token bag, the weather deck, and the random source,
//! and turns each line of player input into a draw or a bookkeeping
//! command. The deck only reports a storm; deciding that the game is over
//! is up to the players.

use chrono::Utc;
use rand::rngs::StdRng;

use cw_mechanics::{Token, TokenBag, WeatherDeck, WeatherDraw, WoodDraw};

use crate::command::{Command, ExportFormat, parse_command};
use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::resources::{Resource, Resources};

const STORM_BANNER: &str = "\
******************************
        !!! STORM !!!
      !!! GAME OVER !!!
******************************";

/// How a response should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary output.
    Plain,
    /// A storm or a snake bite.
    Alert,
    /// The session is over.
    Farewell,
}

/// Output of one processed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text to show the player. Empty for blank input.
    pub text: String,
    /// Presentation hint.
    pub tone: Tone,
}

impl Response {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    fn alert(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Alert,
        }
    }

    /// Whether the player asked to end the session.
    pub fn is_quit(&self) -> bool {
        self.tone == Tone::Farewell
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// An interactive Castaway session.
pub struct Session {
    bag: TokenBag,
    deck: WeatherDeck,
    resources: Resources,
    round: u32,
    journal: Journal,
    journal_preview: usize,
    rng: StdRng,
}

impl Session {
    /// Start a session with a freshly built weather deck.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = config.rng();
        let deck = WeatherDeck::new(&mut rng);
        let mut journal = Journal::new();
        journal.append(JournalEntry::DeckBuilt {
            generation: deck.generation(),
            timestamp: Utc::now(),
        });

        match config.seed {
            Some(seed) => log::info!("session started with seed {seed}"),
            None => log::info!("session started with an OS seed"),
        }

        Self {
            bag: TokenBag::standard(),
            deck,
            resources: Resources::new(),
            round: 0,
            journal,
            journal_preview: config.journal_preview,
            rng,
        }
    }

    /// Get the token bag.
    pub fn bag(&self) -> &TokenBag {
        &self.bag
    }

    /// Get the weather deck.
    pub fn deck(&self) -> &WeatherDeck {
        &self.deck
    }

    /// Get the resource counters.
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Current round: the number of weather cards drawn from this deck.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Draw a token for food.
    pub fn draw_food(&mut self) -> Token {
        let token = self.bag.draw_for_food(&mut self.rng);
        self.journal.append(JournalEntry::FoodDraw {
            token,
            timestamp: Utc::now(),
        });
        token
    }

    /// Draw tokens for wood. Nothing is drawn if the declaration is invalid.
    pub fn draw_wood(&mut self, declared: u32) -> SessionResult<WoodDraw> {
        let draw = self.bag.draw_for_wood(declared, &mut self.rng)?;
        self.journal.append(JournalEntry::WoodDraw {
            declared,
            tokens: draw.tokens.clone(),
            snake: draw.contains_black,
            timestamp: Utc::now(),
        });
        Ok(draw)
    }

    /// Draw a weather card and start the next round.
    ///
    /// When the deck is empty a new one is built first and the round count
    /// starts over at 1.
    pub fn draw_weather(&mut self) -> WeatherDraw {
        let draw = self.deck.draw(&mut self.rng);
        if draw.rebuilt {
            self.round = 0;
            self.journal.append(JournalEntry::DeckBuilt {
                generation: self.deck.generation(),
                timestamp: Utc::now(),
            });
        }
        self.round += 1;

        if draw.is_storm {
            log::info!("storm drawn in round {}", self.round);
        }
        self.journal.append(JournalEntry::WeatherDraw {
            round: self.round,
            label: draw.card.label.clone(),
            value: draw.card.value,
            storm: draw.is_storm,
            remaining: draw.remaining,
            timestamp: Utc::now(),
        });
        draw
    }

    /// Change a resource counter. Returns the new value.
    pub fn adjust(&mut self, resource: Resource, delta: i64) -> u32 {
        let value = self.resources.adjust(resource, delta);
        self.journal.append(JournalEntry::ResourceAdjusted {
            resource: resource.name().to_string(),
            delta,
            value,
            timestamp: Utc::now(),
        });
        value
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<Response> {
        let command = parse_command(input)?;
        self.execute(command)
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> SessionResult<Response> {
        log::debug!("executing {command:?}");
        match command {
            Command::Food => Ok(self.do_food()),
            Command::Weather => Ok(self.do_weather()),
            Command::Wood { declared } => self.do_wood(declared),
            Command::Adjust { resource, delta } => Ok(self.do_adjust(resource, delta)),
            Command::Status => Ok(self.do_status()),
            Command::Deck => Ok(self.do_deck()),
            Command::Journal => Ok(self.do_journal_show()),
            Command::Export { format } => self.do_journal_export(format),
            Command::Help => Ok(Response::plain(help_text())),
            Command::Quit => Ok(Response {
                text: "Ending the simulation.".to_string(),
                tone: Tone::Farewell,
            }),
            Command::Empty => Ok(Response::plain(String::new())),
        }
    }

    fn do_food(&mut self) -> Response {
        let token = self.draw_food();
        Response::plain(format!(
            "--- Food ---\nDrew {token}: {} fish. Advance the food counter by {}.",
            token.fish, token.fish
        ))
    }

    fn do_wood(&mut self, declared: u32) -> SessionResult<Response> {
        let draw = self.draw_wood(declared)?;
        let mut output = format!(
            "--- Wood (declared {declared}) ---\nDrew: {}\n",
            draw.describe_tokens()
        );
        if draw.contains_black {
            output.push_str("Black token! Bitten by a snake and paralysed. No wood gathered.");
            Ok(Response::alert(output))
        } else {
            output.push_str(&format!(
                "No black token. Gathered {} wood!",
                draw.wood_gained()
            ));
            Ok(Response::plain(output))
        }
    }

    fn do_weather(&mut self) -> Response {
        let draw = self.draw_weather();
        let mut output = String::new();
        if draw.rebuilt {
            output.push_str("The weather deck ran out. Shuffled a new one.\n");
        }
        output.push_str(&format!(
            "--- Round {} ---\nDrew: {}\n",
            self.round, draw.card
        ));

        if draw.is_storm {
            output.push_str(STORM_BANNER);
            output.push_str(&format!("\n({} weather cards left)", draw.remaining));
            return Response::alert(output);
        }

        output.push_str(&format!(
            "Rainfall is {}.\n({} weather cards left)",
            draw.card.value, draw.remaining
        ));
        Response::plain(output)
    }

    fn do_adjust(&mut self, resource: Resource, delta: i64) -> Response {
        let value = self.adjust(resource, delta);
        Response::plain(format!("{resource}: {value} ({delta:+})"))
    }

    fn do_status(&self) -> Response {
        let mut out = format!("Round: {}\n", self.round);
        out.push_str(&format!("Resources: {}\n", self.resources));
        out.push_str(&format!(
            "Weather deck #{}: {} cards left\n",
            self.deck.generation(),
            self.deck.remaining()
        ));
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        Response::plain(out)
    }

    fn do_deck(&self) -> Response {
        if self.deck.is_empty() {
            return Response::plain(
                "The weather deck is empty. The next draw shuffles a new one.",
            );
        }
        let (safe, danger): (Vec<_>, Vec<_>) = self.deck.cards().partition(|c| c.is_safe());
        let mut out = format!(
            "Weather deck #{}: {} cards left\n",
            self.deck.generation(),
            self.deck.remaining()
        );
        out.push_str(&format!(
            "  [{}{}]\n",
            "o".repeat(safe.len()),
            "x".repeat(danger.len())
        ));
        out.push_str(&format!(
            "  o = safe ({}), x = storm possible ({})",
            safe.len(),
            danger.len()
        ));
        Response::plain(out)
    }

    fn do_journal_show(&self) -> Response {
        if self.journal.is_empty() {
            return Response::plain("Journal is empty.");
        }
        let recent = self.journal.recent(self.journal_preview);
        let mut out = format!(
            "Journal ({} entries, showing last {}):\n",
            self.journal.len(),
            recent.len()
        );
        out.push_str(&Journal::format_lines(recent));
        Response::plain(out.trim_end())
    }

    fn do_journal_export(&self, format: ExportFormat) -> SessionResult<Response> {
        let text = match format {
            ExportFormat::Markdown => self.journal.export_markdown(),
            ExportFormat::Text => self.journal.export_text(),
            ExportFormat::Json => self.journal.export_json()?,
        };
        Ok(Response::plain(text))
    }
}

fn help_text() -> &'static str {
    "\
Castaway Commands:
  f                       Draw a token for food
  r                       Draw a weather card (next round)
  w<N>                    Draw N tokens for wood, N from 1 to 5 (e.g. w3)
  +<resource> [amount]    Increase food, water, wood or raft
  -<resource> [amount]    Decrease food, water, wood or raft
  status                  Show round, resources and deck size
  deck                    Show the remaining weather deck
  journal                 Show recent journal entries
  export [md|text|json]   Export the full journal
  help                    Show this help
  q, quit                 Exit"
}
