use std::fs::File;

use anyhow::Context;
use clap::Parser;
use tarneeb::policy::Console;
use tarneeb::{Game, Phase, Policy, Seat, Team, Tick};

mod args;
use self::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = args.game_config()?;
    let console = Console::new(!args.no_color);
    let mut game = Game::new(config);
    let result = cli_main(&mut game, &console, args.rounds);
    if let Some(path) = &args.log {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, game.log())?;
        log::info!(
            "wrote {} deals and {} actions to {}",
            game.log().deals().len(),
            game.log().action_count(),
            path.display()
        );
    }
    result
}

/// Runs the match with a simple command-line interface.
fn cli_main(game: &mut Game, console: &Console, rounds: Option<u32>) -> anyhow::Result<()> {
    // The console shows the first human seat's hand, or South's when watching.
    let me = Seat::all_seats()
        .iter()
        .copied()
        .find(|&s| !game.config().is_automated(s));
    let watching = me.is_none();
    let me = me.unwrap_or(Seat::South);
    let rounds = rounds.unwrap_or(if watching { 1 } else { u32::MAX });
    if !watching {
        println!("You are {me}, partnered with {}", me.partner());
    }

    let mut played = 0;
    loop {
        while let Some(event) = game.pop_event() {
            console.notify(&game.player_view(me), &event);
        }
        if game.tick()? != Tick::Idle {
            continue;
        }

        if let Some(expect) = game.next_action() {
            let view = game.player_view(expect.seat);
            let Some(data) = console.take_action(&view, expect.action) else {
                continue;
            };
            match game.apply_action(expect.with_data(data)) {
                Err(err) if console.handle_error(&err) => continue,
                Err(err) => return Err(err.into()),
                Ok(()) => continue,
            }
        }

        debug_assert_eq!(Phase::RoundEnd, game.phase());
        played += 1;
        let state = game.state();
        console.scores(state.score(Team::A), state.score(Team::B));
        if played >= rounds || (!watching && !console.confirm("Deal again?")) {
            return Ok(());
        }
        game.advance_round()?;
    }
}
