#[cfg(test)]
mod tests {
    use crate::commands::{InputState, PlayerCommand};
    use crate::config::{default_speed, GameConfig, ProjectileConfig};
    use crate::constants::*;
    use crate::energy::{Gauge, Shield};
    use crate::enums::*;
    use crate::error::ConfigError;
    use crate::events::{AudioEvent, GameEvent, SoundId, VisualEvent, VisualHandle};
    use crate::state::{GameStateSnapshot, SectorSummary};
    use crate::types::{Position, RoomId, SimTime, Velocity};

    // --- Gauge ---

    #[test]
    fn test_gauge_starts_full() {
        let gauge = Gauge::new(100.0, 33.0);
        assert_eq!(gauge.available(), 100.0);
        assert_eq!(gauge.max(), 100.0);
    }

    /// `can_use` is strict: holding exactly the amount is not enough.
    #[test]
    fn test_gauge_can_use_is_strict() {
        let mut gauge = Gauge::new(100.0, 0.0);
        gauge.spend(90.0);
        assert!(gauge.can_use(9.99));
        assert!(!gauge.can_use(10.0));
        assert!(!gauge.can_use(10.5));
    }

    #[test]
    fn test_gauge_spend_exact() {
        let mut gauge = Gauge::new(100.0, 33.0);
        let before = gauge.available();
        assert!(gauge.can_use(10.0));
        gauge.spend(10.0);
        assert_eq!(gauge.available(), before - 10.0);
    }

    #[test]
    fn test_gauge_spend_clamps_at_zero() {
        let mut gauge = Gauge::new(100.0, 33.0);
        gauge.spend(70.0);
        gauge.spend(70.0);
        assert_eq!(gauge.available(), 0.0);
    }

    #[test]
    fn test_gauge_recharge_clamps_at_max() {
        let mut gauge = Gauge::new(100.0, 33.0);
        gauge.spend(50.0);
        gauge.update(1.0);
        assert!((gauge.available() - 83.0).abs() < 1e-9);
        gauge.update(1.0);
        assert_eq!(gauge.available(), 100.0);
    }

    /// Invariant holds over an arbitrary sequence of spends and ticks.
    #[test]
    fn test_gauge_stays_in_bounds() {
        let mut gauge = Gauge::new(100.0, 33.0);
        for i in 0..500 {
            if i % 3 == 0 {
                gauge.spend(17.0);
            } else {
                gauge.update(DT);
            }
            assert!(gauge.available() >= 0.0);
            assert!(gauge.available() <= gauge.max());
        }
    }

    #[test]
    fn test_gauge_segment_fill() {
        let mut gauge = Gauge::new(100.0, 0.0);
        gauge.spend(65.0);
        let segments = gauge.segment_fill(10);
        assert_eq!(segments.len(), 10);
        assert_eq!(&segments[..3], &[1.0, 1.0, 1.0]);
        assert!((segments[3] - 0.5).abs() < 1e-9);
        assert!(segments[4..].iter().all(|s| *s == 0.0));

        let full = Gauge::new(100.0, 0.0).segment_fill(10);
        assert!(full.iter().all(|s| *s == 1.0));
        assert!(gauge.segment_fill(0).is_empty());
    }

    #[test]
    fn test_gauge_from_config_starting_level() {
        let mut config = GameConfig::default().gauge;
        config.current = Some(40.0);
        let gauge = Gauge::from_config(&config);
        assert_eq!(gauge.available(), 40.0);
    }

    // --- Shield ---

    #[test]
    fn test_shield_activation_debits_gauge() {
        let mut gauge = Gauge::new(100.0, 0.0);
        let mut shield = Shield::new(SHIELD_DRAIN, SHIELD_DURATION);
        assert!(shield.can_activate(&gauge));
        shield.activate(&mut gauge, 1.0);
        assert!(shield.is_active());
        assert_eq!(gauge.available(), 93.0);
        // Already active
        assert!(!shield.can_activate(&gauge));
    }

    #[test]
    fn test_shield_expires_after_duration() {
        let mut gauge = Gauge::new(100.0, 0.0);
        let mut shield = Shield::new(SHIELD_DRAIN, SHIELD_DURATION);
        shield.activate(&mut gauge, 0.0);
        shield.update(0.05);
        assert!(shield.is_active());
        shield.update(0.10);
        assert!(shield.is_active(), "exactly at duration is still active");
        shield.update(0.11);
        assert!(!shield.is_active());
    }

    #[test]
    fn test_shield_needs_energy() {
        let mut gauge = Gauge::new(100.0, 0.0);
        gauge.spend(93.0);
        let shield = Shield::new(SHIELD_DRAIN, SHIELD_DURATION);
        assert!(!shield.can_activate(&gauge));
    }

    // --- Config ---

    #[test]
    fn test_config_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.ship.lives, SHIP_LIVES);
        assert_eq!(config.gauge.max, GAUGE_MAX);
        assert_eq!(config.shield.drain, SHIELD_DRAIN);
        assert_eq!(config.map.min_rooms, MIN_ROOMS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_overrides_only_given_keys() {
        let config =
            GameConfig::from_json_str(r#"{ "ship": { "lives": 5 }, "map": { "rng_rooms": 0 } }"#)
                .unwrap();
        assert_eq!(config.ship.lives, 5);
        assert_eq!(config.ship.shot_cost, SHIP_SHOT_COST);
        assert_eq!(config.map.rng_rooms, 0);
        assert_eq!(config.map.min_rooms, MIN_ROOMS);
        assert_eq!(config.gauge, GameConfig::default().gauge);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = GameConfig::from_json_str(r#"{ "gauge": { "max": 0.0 } }"#).unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "gauge.max"),
            other => panic!("expected Invalid, got {other:?}"),
        }

        let err = GameConfig::from_json_str(r#"{ "map": { "enemies_min": 12 } }"#).unwrap_err();
        assert!(err.to_string().contains("map.enemies_min"));

        let err = GameConfig::from_json_str(r#"{ "ship": { "lives": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ship.lives", .. }));
    }

    #[test]
    fn test_config_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_projectile_config_defaults() {
        let config = ProjectileConfig::default();
        assert_eq!(config.kind, ProjectileKind::Shot);
        assert_eq!(config.owner, Owner::Player);
        assert_eq!(config.damage(), 5);
        assert_eq!(config.speed(), 500.0);
        assert_eq!(config.lifetime_secs(), 3.0);

        assert_eq!(default_speed(ProjectileKind::Homing), 100.0);
        assert_eq!(default_speed(ProjectileKind::Beam), 0.0);

        let sprayer_shot = ProjectileConfig {
            owner: Owner::Enemy,
            speed: Some(90.0),
            ..Default::default()
        };
        assert_eq!(sprayer_shot.speed(), 90.0);
    }

    // --- Geometry ---

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
    }

    /// Rotation 0 faces up the screen; positive rotation turns clockwise.
    #[test]
    fn test_velocity_from_facing() {
        let up = Velocity::from_facing(0.0, 100.0);
        assert!(up.x.abs() < 1e-10);
        assert!((up.y + 100.0).abs() < 1e-10);

        let right = Velocity::from_facing(std::f64::consts::FRAC_PI_2, 100.0);
        assert!((right.x - 100.0).abs() < 1e-10);
        assert!(right.y.abs() < 1e-10);

        let nose = Position::new(400.0, 500.0).offset_along(0.0, SHIP_NOSE_OFFSET);
        assert!((nose.y - 468.0).abs() < 1e-10);
    }

    #[test]
    fn test_velocity_reversed() {
        let v = Velocity::new(3.0, -4.0);
        assert_eq!(v.reversed(), Velocity::new(-3.0, 4.0));
        assert!((v.speed() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
        assert!((time.since(0.25) - 0.75).abs() < 1e-10);
    }

    // --- Serde ---

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartSector,
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
        let input: InputState = serde_json::from_str(r#"{ "thrust": true, "rotate_left": false, "rotate_right": false, "reverse": false, "shield": false, "fire": true, "wormhole": false, "relaunch": false }"#).unwrap();
        assert!(input.thrust && input.fire);
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            GameEvent::RoomEntered {
                room: RoomId(3),
                label: "Region 4F-A09Z".to_string(),
            },
            GameEvent::LivesChanged { lives: 2 },
            GameEvent::SectorCleared,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }

        let audio = AudioEvent::PlayOneShot {
            sound: SoundId::Shield,
            volume: SHIELD_SOUND_VOLUME,
        };
        let json = serde_json::to_string(&audio).unwrap();
        assert!(json.contains("\"type\":\"PlayOneShot\""));

        let visual = VisualEvent::Destroy {
            handle: VisualHandle(7),
        };
        let back: VisualEvent =
            serde_json::from_str(&serde_json::to_string(&visual).unwrap()).unwrap();
        assert_eq!(visual, back);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );

        let summary = SectorSummary {
            score: 3600,
            enemies_destroyed: 7,
            sectors_cleared: 1,
        };
        let back: SectorSummary =
            serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();
        assert_eq!(summary, back);
    }
}
