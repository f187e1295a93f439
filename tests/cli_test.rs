#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use seabattle::{
        parse_move, ui, Actor, AiPlayer, Board, Cell, CliPlayer, InputError, Match, MatchResult,
        Player, PlayerError, RandomStrategy, Ship, ShotLog, ShotOutcome, UntriedPool,
    };

    fn cell(x: usize, y: usize) -> Cell {
        Cell::new(x, y).unwrap()
    }

    fn output_text(player: &CliPlayer<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(player.output().clone()).unwrap()
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("2 3"), Ok(cell(2, 3)));
        assert_eq!(parse_move("  0   5 \n"), Ok(cell(0, 5)));
        assert_eq!(parse_move("6 0"), Err(InputError::OutOfBounds));
        assert_eq!(parse_move("-1 2"), Err(InputError::OutOfBounds));
        assert_eq!(parse_move("a b"), Err(InputError::Malformed));
        assert_eq!(parse_move("1"), Err(InputError::Malformed));
        assert_eq!(parse_move("1 2 3"), Err(InputError::Malformed));
        assert_eq!(parse_move(""), Err(InputError::Malformed));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let mut shots = ShotLog::new();
        shots.record(cell(1, 1), ShotOutcome::Miss);
        let input = Cursor::new("abc\n9 9\n1 1\n2 3\n");
        let mut player = CliPlayer::new("Player", input, Vec::new());

        assert_eq!(player.select_target(&shots), Ok(cell(2, 3)));
        let out = output_text(&player);
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Coordinates are off the board."));
        assert!(out.contains("You have already fired at this cell."));
        assert_eq!(out.matches("Player, your move").count(), 4);
    }

    #[test]
    fn test_closed_input() {
        let mut player = CliPlayer::new("Player", Cursor::new("bad\n"), Vec::new());
        assert_eq!(
            player.select_target(&ShotLog::new()),
            Err(PlayerError::InputClosed)
        );
    }

    #[test]
    fn test_outcome_messages() {
        let mut player = CliPlayer::new("Player", Cursor::new(""), Vec::new());
        let log = ShotLog::new();
        player.handle_shot_result(cell(0, 0), ShotOutcome::Hit, &log);
        player.handle_shot_result(cell(0, 1), ShotOutcome::Sunk, &log);
        player.handle_shot_result(cell(0, 2), ShotOutcome::Miss, &log);
        player.handle_opponent_shot(cell(4, 4), ShotOutcome::Miss);
        let out = output_text(&player);
        assert!(out.contains("Hit!\nShip sunk!\nMiss!\n"));
        assert!(out.contains("Opponent fired at (4, 4): Miss!"));
    }

    #[test]
    fn test_human_wins_match() {
        let mut human_board = Board::new();
        human_board
            .place(Ship::new(vec![cell(5, 5)]).unwrap())
            .unwrap();
        let mut bot_board = Board::new();
        bot_board
            .place(Ship::new(vec![cell(1, 1), cell(1, 2)]).unwrap())
            .unwrap();

        let human = CliPlayer::new("Player", Cursor::new("1 1\n1 1\n1 2\n"), Vec::new());
        let bot = AiPlayer::new(Box::new(RandomStrategy::with_pool(UntriedPool::from_order([
            cell(0, 0),
            cell(0, 1),
        ]))));
        let mut game = Match::new(
            Actor::new("Player", human_board, Box::new(human)),
            Actor::new("Bot 2", bot_board, Box::new(bot)),
        );
        // the repeated "1 1" is rejected without costing a turn
        assert_eq!(game.run().unwrap(), MatchResult::new("Player", 3));
    }

    #[test]
    fn test_render_board() {
        let mut board = Board::new();
        board
            .place(Ship::new(vec![cell(1, 0), cell(2, 0)]).unwrap())
            .unwrap();
        board.receive_shot(cell(1, 0));
        board.receive_shot(cell(0, 1));

        let revealed = ui::render_board(&board, true);
        let lines: Vec<&str> = revealed.lines().collect();
        assert_eq!(lines[0], "  0 1 2 3 4 5");
        assert_eq!(lines[1], "0 . X ■ . . .");
        assert_eq!(lines[2], "1 o . . . . .");
        assert_eq!(lines.len(), 7);

        let hidden = ui::render_shot_log(board.shot_log());
        assert_eq!(hidden.lines().nth(1), Some("0 . X . . . ."));
    }
}
