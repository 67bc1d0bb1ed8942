// lib.rs - Row-parallel Game of Life stepper built on tokio tasks
//
// Every row of the next generation is computed by its own task. Tasks share a
// read-only snapshot of the current grid and each returns only its own row,
// so no task can observe a value written during the same generation.

use std::sync::Arc;

use conway::{Grid, Stepper};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

/// Row task: compute one row of the next generation from the snapshot.
async fn process_row(
    row_index: usize,
    snapshot: Arc<Grid>,
    mut row_result: Vec<bool>,
) -> (usize, Vec<bool>) {
    row_result.resize(snapshot.columns(), false);
    snapshot.next_row(row_index, &mut row_result);
    (row_index, row_result) // Return (row_id, completed_row)
}

/// Await every row task, copy its row into `next` and keep its buffer for reuse.
///
/// A failed task is re-raised on the caller: a panic resumes with its
/// original payload.
async fn collect_rows(
    handles: Vec<JoinHandle<(usize, Vec<bool>)>>,
    next: &mut Grid,
    buffers: &mut Vec<Vec<bool>>,
) {
    for (row, handle) in handles.into_iter().enumerate() {
        match handle.await {
            Ok((row_index, completed_row)) => {
                next.row_mut(row_index).copy_from_slice(&completed_row);
                buffers.push(completed_row);
            }
            Err(err) => match err.try_into_panic() {
                Ok(payload) => std::panic::resume_unwind(payload),
                Err(err) => panic!("row task {row} did not complete: {err}"),
            },
        }
    }
}

/// [`Stepper`] that fans rows out over a multi-threaded tokio runtime.
///
/// The snapshot grid and the per-row buffers are kept between generations and
/// refilled in place; only the task handles are allocated on each step.
pub struct RowStepper {
    runtime: Runtime,
    snapshot: Option<Arc<Grid>>,
    row_buffers: Vec<Vec<bool>>,
}

impl RowStepper {
    /// Runtime with one worker per available core.
    pub fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .thread_name("conway-row")
            .build()?;
        Ok(Self::with_runtime(runtime))
    }

    pub fn with_worker_threads(workers: usize) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers.max(1))
            .thread_name("conway-row")
            .build()?;
        Ok(Self::with_runtime(runtime))
    }

    fn with_runtime(runtime: Runtime) -> Self {
        Self {
            runtime,
            snapshot: None,
            row_buffers: Vec::new(),
        }
    }

    /// Copy `current` into the shared snapshot, reusing its buffer when no task still holds it.
    fn refresh_snapshot(&mut self, current: &Grid) -> Arc<Grid> {
        let snapshot = match self.snapshot.take() {
            Some(mut snapshot) => {
                match Arc::get_mut(&mut snapshot) {
                    Some(grid) => grid.clone_from(current),
                    None => snapshot = Arc::new(current.clone()),
                }
                snapshot
            }
            None => Arc::new(current.clone()),
        };
        self.snapshot = Some(Arc::clone(&snapshot));
        snapshot
    }
}

impl Stepper for RowStepper {
    fn advance(&mut self, current: &Grid, next: &mut Grid) {
        let snapshot = self.refresh_snapshot(current);
        let mut buffers = std::mem::take(&mut self.row_buffers);
        buffers.resize_with(current.rows(), Vec::new);

        self.runtime.block_on(async {
            let handles: Vec<_> = buffers
                .drain(..)
                .enumerate()
                .map(|(row, buffer)| tokio::spawn(process_row(row, Arc::clone(&snapshot), buffer)))
                .collect();

            // Join every row before the caller swaps buffers
            collect_rows(handles, next, &mut buffers).await;
        });

        self.row_buffers = buffers;
    }
}
