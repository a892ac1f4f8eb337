//! Client application state and its event loop.
//!
//! [`App`] owns the player list, the form and the dashboard. Commands are
//! turned into [`Effect`]s, which [`run`] carries out against the API. The
//! loop is cooperative: each command or completed lookup is handled to the
//! end before the next one starts, while several lookups may be in flight
//! and finish in any order.

use std::io::Write;

use leaderboard_core::error::CoreError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::api::LeaderboardApi;
use crate::dashboard::Dashboard;
use crate::error::ClientError;
use crate::form::{LookupTicket, PlayerForm};
use crate::model::{NewPlayer, PlayerRecord};
use crate::render::{render_dashboard, render_form};
use crate::roster::PlayerList;

pub const HELP: &str = "\
Commands:
  name <text>       set the player name (2+ characters fetch suggestions)
  pick <n>          use suggestion number n as the name
  points <n>        set the score
  color <#rrggbb>   set the color tag
  submit            save the player
  search <text>     filter the dashboard by name (empty clears)
  show              redraw the form and dashboard
  reload            fetch the full list again
  help              show this text
  quit              exit";

/// Why a line of user input was refused.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list")]
    Unknown(String),

    #[error("'{0}' is not a suggestion number")]
    BadSuggestionNumber(String),

    /// The command parsed but a field rule refused it.
    #[error(transparent)]
    Rejected(#[from] CoreError),
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Pick(usize),
    Points(String),
    Color(String),
    Submit,
    Search(String),
    Show,
    Reload,
    Help,
    Quit,
}

impl Command {
    /// Parse a command line. The argument is everything after the first
    /// space, so names and search text may contain spaces.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (verb, arg) = match line.split_once(' ') {
            Some((verb, arg)) => (verb, arg),
            None => (line, ""),
        };

        match verb.trim() {
            "name" => Ok(Command::Name(arg.to_string())),
            "pick" => arg
                .trim()
                .parse()
                .map(Command::Pick)
                .map_err(|_| CommandError::BadSuggestionNumber(arg.trim().to_string())),
            "points" => Ok(Command::Points(arg.trim().to_string())),
            "color" => Ok(Command::Color(arg.trim().to_string())),
            "submit" => Ok(Command::Submit),
            "search" => Ok(Command::Search(arg.to_string())),
            "show" | "" => Ok(Command::Show),
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Work the event loop must do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing.
    Render,
    /// Issue a name lookup.
    Lookup(LookupTicket),
    /// Send a create request.
    Create(NewPlayer),
    /// Fetch the full list.
    Reload,
    /// Print the help text.
    Help,
    /// Leave the loop.
    Quit,
}

/// Completion of a background lookup.
#[derive(Debug)]
pub struct LookupDone {
    pub seq: u64,
    pub result: Result<Vec<String>, ClientError>,
}

#[derive(Debug, Default)]
pub struct App {
    players: PlayerList,
    form: PlayerForm,
    dashboard: Dashboard,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn players(&self) -> &PlayerList {
        &self.players
    }

    pub fn form(&self) -> &PlayerForm {
        &self.form
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Apply a command to local state and report the follow-up work.
    ///
    /// Rejected input leaves state unchanged and sends nothing.
    pub fn handle(&mut self, command: Command) -> Result<Effect, CommandError> {
        let effect = match command {
            Command::Name(name) => match self.form.set_name(name) {
                Some(ticket) => Effect::Lookup(ticket),
                None => Effect::Render,
            },
            Command::Pick(index) => match self.form.select_suggestion(index)? {
                Some(ticket) => Effect::Lookup(ticket),
                None => Effect::Render,
            },
            Command::Points(points) => {
                self.form.set_points(points);
                Effect::Render
            }
            Command::Color(color) => {
                self.form.set_color_tag(&color)?;
                Effect::Render
            }
            Command::Submit => Effect::Create(self.form.submit()?),
            Command::Search(text) => {
                self.dashboard.set_search(text);
                Effect::Render
            }
            Command::Show => Effect::Render,
            Command::Reload => Effect::Reload,
            Command::Help => Effect::Help,
            Command::Quit => Effect::Quit,
        };
        Ok(effect)
    }

    /// Full replace after a list load.
    pub fn on_loaded(&mut self, players: Vec<PlayerRecord>) {
        self.players.replace_all(players);
    }

    /// Append after a successful create.
    pub fn on_created(&mut self, player: PlayerRecord) {
        self.players.append(player);
    }

    /// Apply a lookup response if it is still the newest one.
    pub fn on_suggestions(&mut self, seq: u64, names: Vec<String>) -> bool {
        self.form.apply_suggestions(seq, names)
    }

    /// Render the form and dashboard.
    pub fn render(&self) -> String {
        let view = self.dashboard.view(&self.players);
        format!(
            "{}\n{}",
            render_form(&self.form),
            render_dashboard(&view, self.dashboard.search())
        )
    }
}

/// Run the interactive loop until `quit` or end of input.
///
/// Loads the full list once at startup. Lookups run as spawned tasks and
/// report back over a channel; creates and reloads are awaited in place.
/// Failures are logged and never retried.
pub async fn run<R, W>(api: LeaderboardApi, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut app = App::new();
    reload(&api, &mut app).await;
    writeln!(output, "Player Performance Tracker\n\n{}", app.render())?;

    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<LookupDone>();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                let effect = match Command::parse(&line).and_then(|cmd| app.handle(cmd)) {
                    Ok(effect) => effect,
                    Err(e) => {
                        tracing::debug!(error = %e, "Input rejected");
                        writeln!(output, "{e}")?;
                        continue;
                    }
                };

                match effect {
                    Effect::Render => {}
                    Effect::Lookup(ticket) => spawn_lookup(&api, ticket, done_tx.clone()),
                    Effect::Create(player) => match api.create_player(&player).await {
                        Ok(created) => {
                            tracing::info!(player_id = created.id, "Player saved");
                            app.on_created(created);
                        }
                        Err(e) => tracing::error!(error = %e, "Error saving player data"),
                    },
                    Effect::Reload => reload(&api, &mut app).await,
                    Effect::Help => {
                        writeln!(output, "{HELP}")?;
                        continue;
                    }
                    Effect::Quit => break,
                }
                writeln!(output, "{}", app.render())?;
            }
            Some(done) = done_rx.recv() => match done.result {
                Ok(names) => {
                    if app.on_suggestions(done.seq, names) {
                        writeln!(output, "{}", render_form(app.form()))?;
                    }
                }
                Err(e) => tracing::warn!(error = %e, seq = done.seq, "Error fetching suggestions"),
            },
        }
    }

    Ok(())
}

fn spawn_lookup(
    api: &LeaderboardApi,
    ticket: LookupTicket,
    done: mpsc::UnboundedSender<LookupDone>,
) {
    let api = api.clone();
    tokio::spawn(async move {
        let result = api.search_names(&ticket.prefix).await;
        // The receiver only goes away when the loop has exited.
        let _ = done.send(LookupDone {
            seq: ticket.seq,
            result,
        });
    });
}

async fn reload(api: &LeaderboardApi, app: &mut App) {
    match api.list_players().await {
        Ok(players) => {
            tracing::info!(count = players.len(), "Loaded players");
            app.on_loaded(players);
        }
        Err(e) => tracing::error!(error = %e, "Error fetching player data"),
    }
}
