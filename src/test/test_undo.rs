mod test {
    use crate::core::Direction::*;
    use crate::core::GridPos;
    use crate::test::test_util::GameTestState;

    #[test]
    fn step_then_undo_restores_the_player() {
        // open 5x5 area, player in the middle, no walls or boxes
        let level = "     \n     \n  @  \n     \n     \n";
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        assert_eq!(game.session.player(), GridPos::new(3, 2));
        assert_eq!(game.session.history_len(), 1);

        assert!(game.undo());
        assert_eq!(game.session.player(), GridPos::new(2, 2));
        assert_eq!(game.session.history_len(), 0);
    }

    #[test]
    fn undo_with_empty_history_is_a_no_op() {
        let level = r#"
#@ #
"#;
        let mut game = GameTestState::new(level);
        assert!(!game.undo());
        game.assert_matches(level);
    }

    #[test]
    fn undo_restores_a_push_in_full() {
        let level = r#"
#@$ #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);
        game.assert_matches(
            r#"
# @$#
"#,
        );

        assert!(game.undo());
        game.assert_matches(level);
        assert_eq!(game.session.history_len(), 0);
    }

    #[test]
    fn undo_mid_animation_is_refused() {
        let mut game = GameTestState::new("#@  #");
        game.session.try_step(Right);

        assert!(!game.session.can_undo_now());
        assert!(!game.session.try_undo());
        assert_eq!(game.session.history_len(), 1);

        game.session.tick(1.0);
        assert!(game.session.can_undo_now());
        assert!(game.session.try_undo());
        assert_eq!(game.session.history_len(), 0);
    }

    #[test]
    fn undoing_a_whole_sequence_restores_the_exact_board() {
        let level = r#"
#    #
#@$  #
# $  #
#    #
"#;
        let mut game = GameTestState::new(level);
        let original = game.game_to_string();

        game.assert_moves(&[Right, Down, Right, Up]);
        assert_ne!(game.game_to_string(), original);
        assert_eq!(game.session.history_len(), 4);

        for _ in 0..4 {
            assert!(game.undo());
        }
        assert_eq!(game.game_to_string(), original);
        assert_eq!(game.session.history_len(), 0);
        assert_eq!(game.session.player(), GridPos::new(1, 1));
        assert_eq!(
            game.session.box_positions(),
            &[GridPos::new(2, 1), GridPos::new(2, 2)]
        );
    }

    #[test]
    fn undo_snaps_any_leftover_motion() {
        let mut game = GameTestState::new("#@  #");
        game.try_move(Right);

        // settle, then undo; nothing should remain in flight afterwards
        assert!(game.session.try_undo());
        assert!(!game.session.any_motion_in_flight());
        assert_eq!(game.session.player_world().x, 1.0);
    }
}
