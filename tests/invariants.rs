use breath_runner::sim::{GamePhase, GameState, Player};
use breath_runner::tuning::PlayerTuning;
use breath_runner::{Game, Settings, ui};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Input {
    Jump,
    DuckPress,
    DuckRelease,
    Idle,
}

fn input() -> impl Strategy<Value = Input> {
    prop_oneof![
        Just(Input::Jump),
        Just(Input::DuckPress),
        Just(Input::DuckRelease),
        Just(Input::Idle),
    ]
}

fn player() -> Player {
    Player::new(&PlayerTuning::default(), 550.0, true)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn health_and_body_stay_in_bounds(
        seed in any::<u64>(),
        frames in prop::collection::vec((0.001f32..0.2, input()), 1..400),
    ) {
        let settings = Settings { seed: Some(seed), ..Settings::default() };
        let mut game = Game::create(&settings);
        let c = ui::start_button(&settings.tuning.field).rect.center();
        game.on_primary_click(c.x, c.y);

        let mut best = 0;
        for (dt, input) in frames {
            match input {
                Input::Jump => game.on_jump_pressed(),
                Input::DuckPress => game.on_duck_pressed(),
                Input::DuckRelease => game.on_duck_released(),
                Input::Idle => {}
            }
            game.update(dt);

            let state = game.state();
            let p = &state.player;
            prop_assert!(p.health <= p.max_health);
            prop_assert!(p.damage_cooldown >= 0.0);
            prop_assert!(p.protection_timer >= 0.0);
            prop_assert!(p.pos.y + p.height <= 550.0 + 1e-3);
            prop_assert!(state.best_score >= best);
            prop_assert_eq!(state.phase == GamePhase::GameOver, p.health == 0);
            best = state.best_score;
        }
    }

    #[test]
    fn one_hit_per_cooldown_window(
        amounts in prop::collection::vec(1u32..40, 2..10),
        gap in 0.0f32..0.49,
    ) {
        let mut p = player();
        prop_assert!(p.take_damage(amounts[0]));
        for &amount in &amounts[1..] {
            p.update(gap / amounts.len() as f32);
            prop_assert!(!p.take_damage(amount));
        }
        prop_assert_eq!(p.health, 100 - amounts[0]);
    }

    #[test]
    fn protection_blocks_every_hit(
        hits in prop::collection::vec((1u32..200, 0.0f32..0.5), 1..10),
    ) {
        let mut p = player();
        p.collect_mask(20, 5.0);
        prop_assert!(p.is_protected());
        for (amount, dt) in hits {
            prop_assert!(!p.take_damage(amount));
            p.update(dt);
        }
        prop_assert_eq!(p.health, 100);
    }

    #[test]
    fn best_score_is_running_max(seconds in prop::collection::vec(0.0f32..60.0, 1..8)) {
        let mut state = GameState::new(&Settings::default());
        state.start();
        let mut expected = 0;
        for s in seconds {
            state.add_survival_time(s);
            expected = expected.max(state.score);
            state.player.take_damage(1000);
            prop_assert!(state.check_death());
            prop_assert_eq!(state.best_score, expected);
            prop_assert!(state.respawn());
        }
    }
}
