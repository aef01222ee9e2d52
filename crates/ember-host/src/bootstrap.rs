//! Startup ordering: database first, then the script runtime, then the entry point

use crate::config::HostConfig;
use anyhow::{Context, Result};
use ember_db::Store;
use ember_script::{ScriptHost, ScriptLoader};
use log::{error, info};

/// How the scripted session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The entry point returned normally
    Completed,
    /// The script layer raised an error, which has been reported
    ScriptFailed(String),
}

/// Ensure the schema exists and the catalog is seeded
pub fn prepare_store(config: &HostConfig) -> ember_db::Result<Store> {
    let store = Store::open(&config.db_path)?;
    store.seed_catalog()?;
    Ok(store)
}

/// Run one game session.
///
/// Storage and runtime start-up failures are returned as errors. Errors from
/// the script itself are logged and reported as `ScriptFailed`.
pub fn run(config: &HostConfig) -> Result<SessionOutcome> {
    let store = prepare_store(config)
        .with_context(|| format!("failed to prepare database {:?}", config.db_path))?;

    let host = ScriptHost::new(store, ScriptLoader::new(&config.scripts_dir))
        .context("failed to start script runtime")?;

    let outcome = match host.run_entry(&config.entry_module, &config.entry_point) {
        Ok(()) => SessionOutcome::Completed,
        Err(e) => {
            error!("Script error: {}", e);
            SessionOutcome::ScriptFailed(e.to_string())
        }
    };

    let player = host.player().borrow();
    info!(
        "Session ended: hp={} weaponType={} items={:?}",
        player.hp,
        player.weapon_type,
        player.inventory()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> HostConfig {
        let scripts_dir = dir.path().join("scripts");
        fs::create_dir(&scripts_dir).unwrap();
        HostConfig {
            db_path: dir.path().join("save_data.db"),
            scripts_dir,
            ..HostConfig::default()
        }
    }

    fn write_entry(config: &HostConfig, source: &str) {
        fs::write(config.scripts_dir.join("game_logic.lua"), source).unwrap();
    }

    #[test]
    fn test_catalog_is_seeded_before_script_runs() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_entry(
            &config,
            r#"
            function start_game()
                assert(#engine.allIds() == 5, "catalog not seeded")
                engine.player.hp = 7
                engine.player.weaponType = 2
                engine.save(engine.player)
            end
            "#,
        );

        assert_eq!(run(&config).unwrap(), SessionOutcome::Completed);

        let store = prepare_store(&config).unwrap();
        let record = store.load_record().unwrap().unwrap();
        assert_eq!((record.hp, record.weapon_type), (7, 2));
    }

    #[test]
    fn test_script_error_does_not_fail_the_run() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_entry(&config, "function start_game() error('boom') end\n");

        let outcome = run(&config).unwrap();
        assert!(matches!(outcome, SessionOutcome::ScriptFailed(ref msg) if msg.contains("boom")));
    }

    #[test]
    fn test_missing_entry_script_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let outcome = run(&config).unwrap();
        assert!(matches!(outcome, SessionOutcome::ScriptFailed(_)));
    }

    #[test]
    fn test_unopenable_database_fails_the_run() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.db_path = dir.path().join("no").join("such").join("dir.db");

        assert!(run(&config).is_err());
    }

    #[test]
    fn test_default_script_saves_weapon_category() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_entry(&config, include_str!("../../../scripts/game_logic.lua"));

        assert_eq!(run(&config).unwrap(), SessionOutcome::Completed);
        assert_eq!(run(&config).unwrap(), SessionOutcome::Completed);

        let record = prepare_store(&config).unwrap().load_record().unwrap().unwrap();
        assert!(matches!(record.weapon_type, 0 | 1));
    }

    #[test]
    fn test_progress_survives_sessions() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        write_entry(
            &config,
            r#"
            function start_game()
                local p = engine.player
                if engine.load(p) then
                    p.hp = p.hp - 1
                end
                engine.save(p)
            end
            "#,
        );

        run(&config).unwrap();
        run(&config).unwrap();

        let record = prepare_store(&config).unwrap().load_record().unwrap().unwrap();
        assert_eq!(record.hp, 19);
    }
}
