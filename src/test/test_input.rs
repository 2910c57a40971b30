mod test {
    use crate::core::Direction::*;
    use crate::core::{InputRepeater, RepeatConfig};

    const RIGHT: (f32, f32) = (1.0, 0.0);
    const UP: (f32, f32) = (0.0, 1.0);
    const NONE: (f32, f32) = (0.0, 0.0);

    fn repeater() -> InputRepeater {
        InputRepeater::new(RepeatConfig::default())
    }

    #[test]
    fn first_press_steps_immediately() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
    }

    #[test]
    fn holding_waits_for_the_first_delay_then_repeats_faster() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));

        // still inside the first delay
        assert_eq!(input.sample(RIGHT, 0.10), None);
        assert_eq!(input.sample(RIGHT, 0.24), None);

        // first repeat fires, then the shorter interval takes over
        assert_eq!(input.sample(RIGHT, 0.25), Some(Right));
        assert_eq!(input.sample(RIGHT, 0.30), None);
        assert_eq!(input.sample(RIGHT, 0.37), Some(Right));
    }

    #[test]
    fn direction_change_counts_as_a_fresh_press() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
        assert_eq!(input.sample(UP, 0.05), Some(Up));

        // the first delay is re-armed, not the repeat interval
        assert_eq!(input.sample(UP, 0.20), None);
        assert_eq!(input.sample(UP, 0.30), Some(Up));
    }

    #[test]
    fn release_then_press_steps_immediately_again() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
        assert_eq!(input.sample(NONE, 0.05), None);
        assert_eq!(input.sample(RIGHT, 0.06), Some(Right));
    }

    #[test]
    fn undo_reset_rearms_the_full_first_delay() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
        assert_eq!(input.sample(RIGHT, 0.25), Some(Right));

        input.reset_after_undo(0.30);

        // a direction still held reads as a fresh press, and the following
        // repeat waits the full first delay again
        assert_eq!(input.sample(RIGHT, 0.31), Some(Right));
        assert_eq!(input.sample(RIGHT, 0.40), None);
        assert_eq!(input.sample(RIGHT, 0.56), Some(Right));
    }

    #[test]
    fn interrupt_drops_the_held_direction() {
        let mut input = repeater();
        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
        input.interrupt();
        assert_eq!(input.sample(RIGHT, 0.01), Some(Right));
    }

    #[test]
    fn diagonal_input_collapses_to_one_axis() {
        // strictly larger horizontal magnitude wins
        assert_eq!(InputRepeater::normalize(2.0, 1.0), Some(Right));
        assert_eq!(InputRepeater::normalize(-2.0, 1.0), Some(Left));

        // vertical wins when it is larger, and on exact ties
        assert_eq!(InputRepeater::normalize(1.0, 2.0), Some(Up));
        assert_eq!(InputRepeater::normalize(1.0, 1.0), Some(Up));
        assert_eq!(InputRepeater::normalize(-1.0, -1.0), Some(Down));

        assert_eq!(InputRepeater::normalize(0.0, 0.0), None);
    }

    #[test]
    fn disabled_repeat_steps_only_on_the_input_edge() {
        let mut input = InputRepeater::new(RepeatConfig {
            enabled: false,
            ..RepeatConfig::default()
        });

        assert_eq!(input.sample(RIGHT, 0.0), Some(Right));
        assert_eq!(input.sample(RIGHT, 1.0), None);
        assert_eq!(input.sample(RIGHT, 2.0), None);

        // a direction change while still held is not an edge in this mode
        assert_eq!(input.sample(UP, 3.0), None);

        assert_eq!(input.sample(NONE, 4.0), None);
        assert_eq!(input.sample(UP, 5.0), Some(Up));
    }
}
