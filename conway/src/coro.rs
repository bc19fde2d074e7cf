// coro.rs - Generation pass with one cooperative tokio task per row
//
// Every task reads the same immutable snapshot. Rows are merged into the output
// only after all tasks have finished, so callers never see a half-built grid.

use crate::error::LifeError;
use crate::grid::Grid;
use crate::rule::next_state;
use crate::topology::Topology;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Row coroutine: computes row `row_index` of the next generation.
async fn process_row(row_index: usize, snapshot: Arc<Grid>, topology: Topology) -> (usize, Vec<bool>) {
    let counter = topology.strategy();
    let mut row_result = vec![false; snapshot.width()];
    for (x, cell) in row_result.iter_mut().enumerate() {
        let neighbors = counter.count(&snapshot, x, row_index);
        *cell = next_state(snapshot.is_alive(x, row_index), neighbors);

        tokio::task::yield_now().await; // Cooperative yielding
    }
    (row_index, row_result)
}

/// Computes the generation after `snapshot` with every row running as its own task.
/// Must be called from within a tokio runtime.
pub async fn advance_rows(snapshot: Arc<Grid>, topology: Topology) -> Result<Grid, LifeError> {
    let (width, height) = snapshot.dimensions();
    let mut next = Grid::new(width, height)?;

    let handles: Vec<_> = (0..height)
        .map(|row| tokio::spawn(process_row(row, Arc::clone(&snapshot), topology)))
        .collect();

    merge_rows(&mut next, handles).await?;

    tracing::trace!(rows = height, "row coroutines merged");
    Ok(next)
}

/// Awaits every row task, even after one has failed, then copies the rows into
/// `next`. Nothing is written unless all rows arrived.
async fn merge_rows(
    next: &mut Grid,
    handles: Vec<JoinHandle<(usize, Vec<bool>)>>,
) -> Result<(), LifeError> {
    let mut rows = Vec::with_capacity(handles.len());
    let mut first_err = None;

    for (row, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok(completed) => rows.push(completed),
            Err(e) => {
                tracing::warn!(row, error = %e, "row coroutine failed");
                first_err.get_or_insert(LifeError::RowTask { row, reason: e.to_string() });
            }
        }
    }

    if let Some(err) = first_err {
        return Err(err);
    }
    for (row_index, completed_row) in rows {
        next.row_mut(row_index).copy_from_slice(&completed_row);
    }
    Ok(())
}
