//! Headless mode for the Monopoly table.
//!
//! A line-oriented interface for running the table without a TUI, meant for
//! scripts and quick checks against a server.

use std::io::{self, BufRead, Write};

use monopoly_core::costs::{streets_in_group, ColorGroup, OTHER_PROPERTIES};
use monopoly_core::dice::{parse_die_input, roll_random};
use monopoly_core::{BoardView, RollSession, SessionEvent};
use tokio::sync::mpsc::Receiver;

/// Run the table on stdin/stdout.
///
/// Protocol:
/// - A line with two integers (`3 4` or `3,4`) submits a roll
/// - Lines starting with `#` are commands (random, costs, status, ping, quit)
/// - Each roll is awaited before the next line is read
pub async fn run_headless(
    session: RollSession,
    events: Receiver<SessionEvent>,
) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_lines(session, events, stdin.lock(), stdout.lock()).await
}

/// Drive a session from `input`, writing results to `out`.
pub async fn run_lines<R: BufRead, W: Write>(
    mut session: RollSession,
    mut events: Receiver<SessionEvent>,
    input: R,
    mut out: W,
) -> io::Result<()> {
    let mut view = BoardView::new();

    writeln!(out, "=== Monopoly Headless Mode ===")?;
    if let Some(url) = session.server_url() {
        writeln!(out, "Server: {url}")?;
    }
    writeln!(out)?;
    print_commands(&mut out)?;
    writeln!(out)?;
    writeln!(out, "Enter two dice per line, e.g. `3 4`:")?;
    out.flush()?;

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable input line");
                writeln!(out, "[ERROR] Error reading input: {e}")?;
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix('#') {
            match command.split_whitespace().next() {
                Some("quit") | Some("exit") => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Some("random") => {
                    let roll = roll_random(&mut rand::thread_rng());
                    writeln!(out, "[ROLL] {} and {}", roll.dice1, roll.dice2)?;
                    submit_and_wait(
                        &mut session,
                        &mut events,
                        &mut view,
                        (i64::from(roll.dice1), i64::from(roll.dice2)),
                        &mut out,
                    )
                    .await?;
                }
                Some("costs") => print_costs(&mut out)?,
                Some("status") => {
                    writeln!(out, "[STATUS]")?;
                    writeln!(out, "  Journal: {}", view.journal())?;
                    writeln!(out, "  Player: {}", view.current_player())?;
                    writeln!(out, "  Dice: {} and {}", view.dice1(), view.dice2())?;
                    writeln!(out, "  Rolls sent: {}", session.submitted())?;
                }
                Some("ping") => {
                    session.check_connection();
                    let reachable = wait_for_connectivity(&mut events, &mut view).await;
                    match reachable {
                        Some(true) => writeln!(out, "[SERVER] reachable")?,
                        Some(false) => writeln!(out, "[SERVER] unreachable")?,
                        None => writeln!(out, "[ERROR] Session closed")?,
                    }
                }
                Some("help") => {
                    writeln!(out, "[HELP]")?;
                    print_commands(&mut out)?;
                }
                _ => {
                    writeln!(out, "[ERROR] Unknown command. Type #help for help.")?;
                }
            }
            out.flush()?;
            continue;
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();
        let [first, second] = parts.as_slice() else {
            writeln!(out, "[ERROR] Enter two dice, e.g. `3 4`")?;
            out.flush()?;
            continue;
        };

        match parse_die_input(first).and_then(|a| parse_die_input(second).map(|b| (a, b))) {
            Ok(dice) => {
                submit_and_wait(&mut session, &mut events, &mut view, dice, &mut out).await?
            }
            Err(e) => {
                tracing::debug!(detail = %e.detail(), "unparsable roll");
                writeln!(out, "[WARNING] {e}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}

/// Submit one roll and block until its own event arrives.
async fn submit_and_wait<W: Write>(
    session: &mut RollSession,
    events: &mut Receiver<SessionEvent>,
    view: &mut BoardView,
    (dice1, dice2): (i64, i64),
    out: &mut W,
) -> io::Result<()> {
    view.set_dice1(dice1);
    view.set_dice2(dice2);

    let ticket = match session.submit(dice1, dice2) {
        Ok(ticket) => ticket,
        Err(e) => return writeln!(out, "[WARNING] {e}"),
    };

    while let Some(event) = events.recv().await {
        view.apply(&event);
        if event.ticket() != Some(ticket) {
            continue;
        }
        return match event {
            SessionEvent::Failed { error, .. } => writeln!(out, "[ERROR] {error}"),
            _ => {
                writeln!(out, "[JOURNAL] {}", view.journal())?;
                writeln!(out, "[PLAYER] {}", view.current_player())
            }
        };
    }

    writeln!(out, "[ERROR] Session closed")
}

async fn wait_for_connectivity(
    events: &mut Receiver<SessionEvent>,
    view: &mut BoardView,
) -> Option<bool> {
    while let Some(event) = events.recv().await {
        view.apply(&event);
        if let SessionEvent::Connectivity { reachable } = event {
            return Some(reachable);
        }
    }
    None
}

fn print_commands<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <a> <b>   - Send a roll of two dice")?;
    writeln!(out, "  #random   - Roll two random dice and send them")?;
    writeln!(out, "  #costs    - Show the property cost table")?;
    writeln!(out, "  #status   - Show the journal and current player")?;
    writeln!(out, "  #ping     - Check that the server answers")?;
    writeln!(out, "  #help     - Show this help")?;
    writeln!(out, "  #quit     - Exit")
}

fn print_costs<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "[COSTS]")?;
    for group in ColorGroup::ALL {
        writeln!(out, "{group}")?;
        for street in streets_in_group(group) {
            writeln!(out, "  {}", street.name)?;
            for (label, value) in street.cost_lines() {
                writeln!(out, "    {label}: {value}")?;
            }
        }
    }
    writeln!(out, "Railroads & Utilities")?;
    for property in &OTHER_PROPERTIES {
        writeln!(out, "  {}", property.name)?;
        writeln!(out, "    Price: ${}", property.price)?;
        writeln!(out, "    Mortgage: {}", property.mortgage)?;
        writeln!(out, "    Mortgage Repayment: {}", property.unmortgage_amount())?;
        writeln!(out, "    Rent: {}", property.rent_rule())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use monopoly_core::{DiceRoll, GameResponse, MockTable};

    async fn run(table: &Arc<MockTable>, input: &str) -> String {
        run_bytes(table, input.as_bytes()).await
    }

    async fn run_bytes(table: &Arc<MockTable>, input: &[u8]) -> String {
        let (session, events) = RollSession::with_service(table.clone(), 16);
        let mut out = Vec::new();
        run_lines(session, events, Cursor::new(input.to_vec()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_roll_prints_journal_and_player() {
        let table = Arc::new(MockTable::new());
        table.respond_to(4, 5, GameResponse::new("Rolled 4 and 5", "Alice"));

        let output = run(&table, "4 5\n#status\n").await;

        assert!(output.contains("[JOURNAL] Rolled 4 and 5"));
        assert!(output.contains("[PLAYER] Alice"));
        assert!(output.contains("  Player: Alice"));
        assert_eq!(table.calls(), vec![DiceRoll::new(4, 5)]);
    }

    #[tokio::test]
    async fn test_invalid_rolls_warn() {
        let table = Arc::new(MockTable::new());

        let output = run(&table, "0 3\n3,7\nfour 2\n").await;

        assert_eq!(
            output.matches("[WARNING] Dice must be between 1 and 6").count(),
            3
        );
        assert_eq!(table.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_prints_error_and_keeps_view() {
        let table = Arc::new(MockTable::new());
        table
            .respond_to(1, 1, GameResponse::new("Rolled 1 and 1", "Bob"))
            .fail_on(2, 2, "connection refused");

        let output = run(&table, "1 1\n2 2\n#status\n").await;

        assert!(output.contains("[ERROR]"));
        assert!(output.contains("connection refused"));
        assert!(output.contains("  Journal: Rolled 1 and 1"));
        assert!(output.contains("  Player: Bob"));
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let table = Arc::new(MockTable::new());
        table.respond_to_any(GameResponse::new("ok", "Carol"));

        let output = run(&table, "#quit\n6 6\n").await;

        assert!(output.contains("Goodbye!"));
        assert_eq!(table.call_count(), 0);
    }

    #[tokio::test]
    async fn test_commands() {
        let table = Arc::new(MockTable::new());
        table.respond_to_any(GameResponse::new("Random roll", "Dana"));
        table.set_reachable(false);

        let output = run(&table, "#costs\n#random\n#ping\n#bogus\n1\n").await;

        assert!(output.contains("  Boardwalk"));
        assert!(output.contains("    Mortgage Repayment: 220"));
        assert!(output.contains("[ROLL] "));
        assert!(output.contains("[PLAYER] Dana"));
        assert!(output.contains("[SERVER] unreachable"));
        assert!(output.contains("[ERROR] Unknown command"));
        assert!(output.contains("[ERROR] Enter two dice"));
        assert_eq!(table.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_input_stops_cleanly() {
        let table = Arc::new(MockTable::new());
        table.respond_to_any(GameResponse::new("ok", "Erin"));

        let output = run_bytes(&table, b"4 5\n\xff\xfe\n6 6\n").await;

        assert!(output.contains("[PLAYER] Erin"));
        assert!(output.contains("[ERROR] Error reading input"));
        assert_eq!(table.calls(), vec![DiceRoll::new(4, 5)]);
    }
}
