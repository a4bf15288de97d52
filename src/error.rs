use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("start coordinate is outside the grid")]
    StartOutsideGrid,
    #[error("goal coordinate is outside the grid")]
    GoalOutsideGrid,
    #[error("start coordinate is blocked")]
    StartBlocked,
    #[error("grid contains no cells")]
    EmptyGrid,
    #[error("unknown cell value {value} at row {row}, column {column}")]
    UnknownCellValue { value: u8, row: usize, column: usize },
    #[error("unknown cell symbol {symbol:?} at row {row}, column {column}")]
    UnknownCellSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error("path contains no coordinates")]
    EmptyPath,
    #[error("path step {index} is not a move to a neighbouring cell")]
    NonAdjacentStep { index: usize },
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Broken search invariants. These indicate a defect rather than bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("goal was selected but has no node in the registry")]
    MissingGoal,
    #[error("predecessor chain did not reach the start within {steps} steps")]
    PredecessorCycle { steps: usize },
    #[error("node refers to a predecessor that is not in the registry")]
    DanglingPredecessor,
    #[error("selected node is not in the registry")]
    MissingNode,
}
