#[cfg(test)]
mod tests {
    use negspace_core::constants::*;
    use negspace_core::enums::{EnemyKind, LifePhase};
    use negspace_core::types::{Position, Velocity};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::fsm::{
        aim_rotation, evaluate, jitter, roll_shot_interval, should_fire, ContactOutcome,
        EnemyContext,
    };
    use crate::profiles::{get_profile, AimMode, SpawnRegion};

    fn make_context(kind: EnemyKind, position: Position, ship: Position) -> EnemyContext {
        let profile = get_profile(kind);
        EnemyContext {
            kind,
            phase: LifePhase::Alive,
            position,
            speed: profile.base_speed,
            spin: profile.base_spin_deg.to_radians(),
            hit_radius: profile.hit_radius,
            stunned: false,
            stunned_at: 0.0,
            ship_position: ship,
            shield_active: false,
            now: 10.0,
        }
    }

    #[test]
    fn test_spinner_chases_ship() {
        let ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 100.0),
            Position::new(400.0, 500.0),
        );
        let update = evaluate(&ctx);
        assert!(update.velocity.x.abs() < 1e-10);
        assert!((update.velocity.y - SPINNER_SPEED).abs() < 1e-10);
        assert!(update.angular_velocity > 0.0);
        assert_eq!(update.contact, ContactOutcome::None);
    }

    #[test]
    fn test_stunned_enemy_flees_with_reversed_spin() {
        let mut ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 100.0),
            Position::new(400.0, 500.0),
        );
        ctx.stunned = true;
        ctx.stunned_at = 9.5;
        let update = evaluate(&ctx);
        assert!(update.stunned);
        assert!((update.velocity.y + SPINNER_SPEED).abs() < 1e-10);
        assert!(update.angular_velocity < 0.0);
    }

    #[test]
    fn test_stun_times_out_per_kind() {
        // Spinner: 1.0s timeout
        let mut ctx = make_context(
            EnemyKind::Spinner,
            Position::new(100.0, 100.0),
            Position::new(400.0, 500.0),
        );
        ctx.stunned = true;
        ctx.stunned_at = 8.9;
        assert!(!evaluate(&ctx).stunned);

        // Thresher: 2.5s timeout, still stunned after 1.1s
        let mut ctx = make_context(
            EnemyKind::Thresher,
            Position::new(400.0, 200.0),
            Position::new(400.0, 500.0),
        );
        ctx.stunned = true;
        ctx.stunned_at = 8.9;
        assert!(evaluate(&ctx).stunned);
    }

    #[test]
    fn test_shielded_contact_stuns() {
        // Inside 1.5x hit radius but outside hit radius
        let mut ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 480.0),
            Position::new(400.0, 500.0),
        );
        ctx.shield_active = true;
        let update = evaluate(&ctx);
        assert_eq!(update.contact, ContactOutcome::Stunned { entered: true });
        assert!(update.stunned);
        assert_eq!(update.stunned_at, 10.0);

        // Refresh while already stunned
        ctx.stunned = true;
        ctx.stunned_at = 9.8;
        let update = evaluate(&ctx);
        assert_eq!(update.contact, ContactOutcome::Stunned { entered: false });
        assert_eq!(update.stunned_at, 10.0);
    }

    #[test]
    fn test_unshielded_contact_destroys_ship() {
        let ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 490.0),
            Position::new(400.0, 500.0),
        );
        assert_eq!(evaluate(&ctx).contact, ContactOutcome::ShipDestroyed);

        // Between hit radius and 1.5x hit radius: no effect without shield
        let ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 480.0),
            Position::new(400.0, 500.0),
        );
        assert_eq!(evaluate(&ctx).contact, ContactOutcome::None);
    }

    #[test]
    fn test_dying_enemy_is_inert() {
        let mut ctx = make_context(
            EnemyKind::Spinner,
            Position::new(400.0, 495.0),
            Position::new(400.0, 500.0),
        );
        ctx.phase = LifePhase::Dying;
        let update = evaluate(&ctx);
        assert_eq!(update.contact, ContactOutcome::None);
        assert_eq!(update.velocity, Velocity::zero());
    }

    #[test]
    fn test_thresher_stays_put() {
        let ctx = make_context(
            EnemyKind::Thresher,
            Position::new(400.0, 200.0),
            Position::new(100.0, 500.0),
        );
        let update = evaluate(&ctx);
        assert_eq!(update.velocity.speed(), 0.0);
    }

    #[test]
    fn test_jitter_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let v = jitter(SPINNER_SPEED, &mut rng);
            assert!((56.0..84.0).contains(&v), "jittered speed {v} out of range");
            assert_eq!(v, v.floor());
        }
        assert_eq!(jitter(0.0, &mut rng), 0.0);
    }

    #[test]
    fn test_shot_interval_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let sprayer = get_profile(EnemyKind::Sprayer).ranged.unwrap();
        let thresher = get_profile(EnemyKind::Thresher).ranged.unwrap();
        for _ in 0..100 {
            let s = roll_shot_interval(&sprayer, &mut rng);
            assert!((1.5..2.5).contains(&s));
            let t = roll_shot_interval(&thresher, &mut rng);
            assert!((0.1..0.3).contains(&t));
        }
        assert!(get_profile(EnemyKind::Spinner).ranged.is_none());
    }

    #[test]
    fn test_should_fire_respects_first_shot_delay() {
        // Armed at t=5 with a 2s delay: the timer starts at t=7
        let last_shot_at = 5.0 + SPRAYER_FIRST_SHOT_DELAY;
        assert!(!should_fire(last_shot_at, 1.5, 8.0));
        assert!(!should_fire(last_shot_at, 1.5, 8.5));
        assert!(should_fire(last_shot_at, 1.5, 8.6));
    }

    /// An aimed shot fired along `aim_rotation` travels toward the ship.
    #[test]
    fn test_aim_at_player() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let from = Position::new(100.0, 100.0);
        let ship = Position::new(400.0, 500.0);
        let rotation = aim_rotation(AimMode::AtPlayer, from, ship, &mut rng);
        let v = Velocity::from_facing(rotation, 1.0);
        assert!((v.x - 0.6).abs() < 1e-9, "x = {}", v.x);
        assert!((v.y - 0.8).abs() < 1e-9, "y = {}", v.y);

        for _ in 0..50 {
            let r = aim_rotation(AimMode::RandomAngle, from, ship, &mut rng);
            assert!((0.0..std::f64::consts::TAU).contains(&r));
        }
    }

    #[test]
    fn test_spawn_regions() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let thresher = get_profile(EnemyKind::Thresher).spawn_region;
        for _ in 0..100 {
            let p = thresher.sample(&mut rng);
            assert!(thresher.contains(&p));
            let q = SpawnRegion::RESET.sample(&mut rng);
            assert!(SpawnRegion::RESET.contains(&q));
        }
    }

    #[test]
    fn test_profile_table() {
        let spinner = get_profile(EnemyKind::Spinner);
        assert_eq!(spinner.life, 10);
        assert_eq!(spinner.hit_radius, 15.0);
        let sprayer = get_profile(EnemyKind::Sprayer);
        assert_eq!(sprayer.life, 25);
        assert_eq!(sprayer.ranged.unwrap().aim, AimMode::AtPlayer);
        let thresher = get_profile(EnemyKind::Thresher);
        assert_eq!(thresher.life, 40);
        assert_eq!(thresher.stun_timeout, 2.5);
        assert_eq!(thresher.stun_score, 100);
        assert_eq!(thresher.kill_score, 3500);
    }
}
