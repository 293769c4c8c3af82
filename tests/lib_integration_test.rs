//! Integration tests for the Snake MCTS library public API

use snake_mcts::{
    Grid, MctsHyperparameters, Result, SnakeMctsError, DESCRIPTION, NAME, VERSION,
};

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "snake_mcts");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let grid_error = Grid::from_rows(vec![vec![0, 0], vec![0]]).unwrap_err();
    assert!(matches!(grid_error, SnakeMctsError::InvalidGrid(_)));
    assert!(grid_error.to_string().starts_with("Invalid grid:"));

    let config_error = MctsHyperparameters {
        max_iterations: 0,
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    assert!(matches!(config_error, SnakeMctsError::InvalidConfig(_)));

    let io_error: SnakeMctsError =
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(io_error, SnakeMctsError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());

    let failure: Result<i32> = Err(SnakeMctsError::InvalidConfig("test".to_string()));
    assert!(failure.is_err());
}
