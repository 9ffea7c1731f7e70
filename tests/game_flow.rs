use gomoku::{
    Cell, GameSession, GameStore, LoadSnapshotFailure, OutcomeKind, SessionSetup, Shell, FAREWELL,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run_shell(store: &GameStore, script: &str, seed: u64) -> String {
    let mut shell = Shell::new(
        script.as_bytes(),
        Vec::new(),
        store,
        StdRng::seed_from_u64(seed),
    );
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn test_save_survives_restart() {
    init_log();
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("gomoku_db");
    let session = {
        let store = GameStore::open(&db_path).unwrap();
        let mut session =
            SessionSetup::new("amber", "lisa").start(&mut StdRng::seed_from_u64(2022));
        session.apply_move(7, 7).unwrap();
        session.apply_move(6, 8).unwrap();
        session.apply_move(0, 14).unwrap();
        store.save_snapshot(&session.suspend(1_700_000_000).unwrap()).unwrap();
        session
    };

    let store = GameStore::open(&db_path).unwrap();
    let snapshot = store.load_snapshot().unwrap();
    let resumed = GameSession::resume(&snapshot).unwrap();
    assert_eq!(resumed.move_count(), 3);
    assert_eq!(resumed.board(), session.board());
    assert_eq!(resumed.board().get(0, 14), Ok(Cell::Black));
    assert_eq!(resumed.current_player(), session.turn().white());
    assert_eq!(resumed, session);
}

#[test]
fn test_fresh_store_is_empty() {
    init_log();
    let dir = tempdir().unwrap();
    let store = GameStore::open(&dir.path().join("gomoku_db")).unwrap();
    assert!(store.load_history().is_empty());
    assert_eq!(store.load_snapshot(), Err(LoadSnapshotFailure::NotFound));
}

#[test]
fn test_shell_plays_a_saved_game_to_the_end() {
    init_log();
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("gomoku_db");
    {
        let store = GameStore::open(&db_path).unwrap();
        let out = run_shell(&store, "1\namber\nlisa\n8 4\n1 1\n8 5\n1 2\ns\n", 5);
        assert!(out.contains("game saved"));
        assert!(out.ends_with(&format!("{}\n", FAREWELL)));
    }

    let store = GameStore::open(&db_path).unwrap();
    let out = run_shell(&store, "2\n8 6\n1 3\n8 7\n1 4\n8 8\n4\n5\n0\n", 6);
    assert!(out.contains("4 moves played"));
    assert!(out.contains("wins after 9 moves!"));
    assert!(out.contains("games played: 1"));
    assert!(!store.has_snapshot());

    let history = store.load_history();
    assert_eq!(history.len(), 1);
    let result = &history[0];
    assert_eq!(result.kind, OutcomeKind::Win);
    assert_eq!(result.move_count, 9);
    assert_eq!(result.winner.as_deref(), Some(result.black_player.as_str()));
    assert_eq!(result.player_a, result.black_player);
    assert_eq!(result.player_b, result.white_player);
    assert_eq!(result.first_mover, result.black_player);
    assert_eq!(result.board_size, 15);
}
