//! Asynchronous load tasks.
//!
//! A [`LoadTask`] wraps a single read-only media index query. Executing it
//! returns immediately; the query and row materialization run on a dedicated
//! blocking worker, and the rows are delivered to the task's
//! [`MethodResult`] exactly once from the runtime the task was spawned on.
//!
//! ## Faults
//!
//! The media index reports failures as runtime faults rather than typed
//! results. A fault raised while opening the query or in the middle of
//! iteration is caught at the task boundary and logged, and the task still
//! completes successfully with whatever rows it had accumulated (often none).
//! A panic inside the media store or cursor is handled the same way.
//! A caller therefore cannot tell "no matching rows" apart from "the query
//! failed"; both arrive as an empty list.
//!
//! ## Lifecycle
//!
//! `Created → Running → Completed`. There is no cancellation and no retry.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use bridge_traits::channel::MethodResult;
use bridge_traits::media_store::{ContentQuery, ContentUri, Cursor, MediaStore};
use bridge_traits::platform::PlatformCapabilities;
use core_async::runtime::Handle;
use core_async::sync::watch;
use core_async::task::{spawn_blocking, spawn_on, JoinHandle};
use tracing::{debug, error, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::{LibraryError, Result};
use crate::query::{Projection, SelectionPredicate};
use crate::record::{MediaRecord, ResultSet};

/// Lifecycle of a load task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Created,
    Running,
    Completed,
}

/// How cursor rows are turned into [`MediaRecord`]s.
///
/// Chosen once per task, from what the host's query layer supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMaterializer {
    /// Every column is inserted as-is.
    Plain,
    /// The projection carries a `DISTINCT` modifier, so the index itself
    /// collapses duplicate rows; every column is inserted as-is.
    DistinctProjection,
    /// For hosts without the `DISTINCT` modifier: a column is only inserted
    /// when its value is not already present in the same row's record. This
    /// is a per-row check, never a cross-row de-duplication.
    GuardedInsert,
}

impl RowMaterializer {
    /// Distinct-capable hosts get [`DistinctProjection`](Self::DistinctProjection),
    /// the rest [`GuardedInsert`](Self::GuardedInsert).
    pub fn for_capabilities(capabilities: &PlatformCapabilities) -> Self {
        if capabilities.supports_distinct_projection {
            RowMaterializer::DistinctProjection
        } else {
            RowMaterializer::GuardedInsert
        }
    }

    /// Projection as sent to the media index.
    pub fn project(&self, projection: &Projection) -> Vec<String> {
        match self {
            RowMaterializer::DistinctProjection => projection.render_distinct(),
            RowMaterializer::Plain | RowMaterializer::GuardedInsert => projection.render(),
        }
    }

    /// Reads the cursor's current row into a fresh record.
    ///
    /// Column `i` is stored under `fields[i]`; result columns beyond the
    /// projection keep the name the cursor reports.
    pub fn materialize_row(&self, cursor: &dyn Cursor, fields: &[&str]) -> Result<MediaRecord> {
        let mut record = MediaRecord::new();

        for (index, column) in cursor.column_names().iter().enumerate() {
            let field = fields.get(index).copied().unwrap_or(column.as_str());
            let value = cursor.get_string(index)?;

            match self {
                RowMaterializer::GuardedInsert => {
                    if !record.contains_value(&value) {
                        record.insert(field, value);
                    }
                }
                RowMaterializer::Plain | RowMaterializer::DistinctProjection => {
                    record.insert(field, value);
                }
            }
        }

        Ok(record)
    }
}

/// Everything a loader decides about one query.
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub uri: ContentUri,
    pub projection: Projection,
    pub selection: SelectionPredicate,
    pub sort_order: String,
    pub materializer: RowMaterializer,
}

impl LoadRequest {
    fn content_query(&self) -> ContentQuery {
        let (selection, selection_args) = self.selection.clone().into_parts();
        ContentQuery {
            uri: self.uri,
            projection: self.materializer.project(&self.projection),
            selection,
            selection_args,
            sort_order: Some(self.sort_order.clone()),
        }
    }
}

/// One query, one worker, one reply.
pub struct LoadTask {
    id: Uuid,
    loader: &'static str,
    store: Arc<dyn MediaStore>,
    runtime: Handle,
    query: ContentQuery,
    projection: Projection,
    materializer: RowMaterializer,
    result: Box<dyn MethodResult>,
}

impl std::fmt::Debug for LoadTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadTask")
            .field("id", &self.id)
            .field("loader", &self.loader)
            .field("query", &self.query)
            .field("materializer", &self.materializer)
            .field("store", &"MediaStore { ... }")
            .field("result", &"MethodResult { ... }")
            .finish()
    }
}

impl LoadTask {
    /// Creates a task in the [`Created`](TaskState::Created) state.
    ///
    /// `loader` names the originating loader in diagnostics. `runtime` is the
    /// context the result callback is delivered from.
    pub fn new(
        loader: &'static str,
        store: Arc<dyn MediaStore>,
        runtime: Handle,
        request: LoadRequest,
        result: Box<dyn MethodResult>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            loader,
            query: request.content_query(),
            projection: request.projection,
            materializer: request.materializer,
            store,
            runtime,
            result,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> TaskState {
        TaskState::Created
    }

    /// The query this task will issue.
    pub fn query(&self) -> &ContentQuery {
        &self.query
    }

    /// Starts the task and returns without waiting for it.
    pub fn execute(self) -> TaskHandle {
        let LoadTask {
            id,
            loader,
            store,
            runtime,
            query,
            projection,
            materializer,
            result,
        } = self;

        let (state_tx, state_rx) = watch::channel(TaskState::Running);
        let span = info_span!("load_task", task_id = %id, loader, uri = %query.uri);

        debug!(
            parent: &span,
            projection = ?query.projection,
            selection = ?query.selection,
            args = ?query.selection_args,
            sort_order = ?query.sort_order,
            "Starting load task"
        );

        let worker_span = span.clone();
        let result = ResultGuard(Some(result));
        let join = spawn_on(
            &runtime,
            async move {
                let worker = spawn_blocking(move || {
                    let _entered = worker_span.enter();
                    load_data(loader, store.as_ref(), &query, &projection, materializer)
                });

                let records = match worker.await {
                    Ok(records) => records,
                    Err(err) => {
                        error!(loader, error = %err, "Load worker panicked; delivering empty result");
                        ResultSet::new()
                    }
                };

                debug!(rows = records.len(), "Delivering load task result");
                result.deliver(records);
                state_tx.send_replace(TaskState::Completed);
            }
            .instrument(span),
        );

        TaskHandle {
            id,
            join,
            state: state_rx,
        }
    }
}

/// Handle to an executing [`LoadTask`].
///
/// Dropping the handle does not stop the task.
#[derive(Debug)]
pub struct TaskHandle {
    id: Uuid,
    join: JoinHandle<()>,
    state: watch::Receiver<TaskState>,
}

impl TaskHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> TaskState {
        *self.state.borrow()
    }

    /// Waits until the result callback has fired.
    pub async fn wait(self) -> Result<()> {
        self.join
            .await
            .map_err(|err| LibraryError::WorkerFailed(err.to_string()))
    }
}

/// Completes the wrapped result with an empty list if the task is dropped
/// before it delivered, e.g. when its runtime has already shut down.
struct ResultGuard(Option<Box<dyn MethodResult>>);

impl ResultGuard {
    fn deliver(mut self, records: ResultSet) {
        if let Some(result) = self.0.take() {
            result.success(records.into());
        }
    }
}

impl Drop for ResultGuard {
    fn drop(&mut self) {
        if let Some(result) = self.0.take() {
            warn!("Load task dropped before completion; delivering empty result");
            result.success(ResultSet::new().into());
        }
    }
}

/// Closes the wrapped cursor when dropped.
struct CursorGuard(Box<dyn Cursor>);

impl Drop for CursorGuard {
    fn drop(&mut self) {
        if !self.0.is_closed() {
            self.0.close();
        }
    }
}

/// Runs the query and collects its rows; never fails.
///
/// Rows read before a fault or a panic are kept.
fn load_data(
    loader: &'static str,
    store: &dyn MediaStore,
    query: &ContentQuery,
    projection: &Projection,
    materializer: RowMaterializer,
) -> ResultSet {
    let mut records = ResultSet::new();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        read_rows(store, query, projection, materializer, &mut records)
    }));

    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            error!(
                loader,
                error = %err,
                rows = records.len(),
                "{}::load_data failed",
                loader
            );
        }
        Err(payload) => {
            error!(
                loader,
                error = %panic_message(payload.as_ref()),
                rows = records.len(),
                "{}::load_data failed",
                loader
            );
        }
    }

    records
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "worker panicked"
    }
}

fn read_rows(
    store: &dyn MediaStore,
    query: &ContentQuery,
    projection: &Projection,
    materializer: RowMaterializer,
    records: &mut ResultSet,
) -> Result<()> {
    let Some(cursor) = store.query(query)? else {
        debug!("Media store returned no cursor");
        return Ok(());
    };
    let mut cursor = CursorGuard(cursor);

    while cursor.0.move_to_next()? {
        let record = materializer.materialize_row(&*cursor.0, projection.fields())?;
        records.push(record);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::media_store::MemoryCursor;
    use bridge_traits::BridgeError;

    fn cursor(columns: &[&str], rows: &[&[Option<&str>]]) -> MemoryCursor {
        MemoryCursor::new(
            columns.iter().map(|column| column.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|value| value.map(str::to_string)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_materializer_selection() {
        assert_eq!(
            RowMaterializer::for_capabilities(&PlatformCapabilities::android(28)),
            RowMaterializer::DistinctProjection
        );
        assert_eq!(
            RowMaterializer::for_capabilities(&PlatformCapabilities::android(33)),
            RowMaterializer::GuardedInsert
        );
    }

    #[test]
    fn test_distinct_projection_rendering() {
        let projection = Projection::new(&["name"]);
        assert_eq!(
            RowMaterializer::DistinctProjection.project(&projection),
            vec!["DISTINCT name"]
        );
        assert_eq!(RowMaterializer::GuardedInsert.project(&projection), vec!["name"]);
    }

    #[test]
    fn test_plain_row_keeps_duplicate_values() {
        let mut cursor = cursor(&["title", "album"], &[&[Some("Blue"), Some("Blue")]]);
        cursor.move_to_next().unwrap();

        let record = RowMaterializer::Plain
            .materialize_row(&cursor, &["title", "album"])
            .unwrap();
        assert_eq!(record.get("title"), Some("Blue"));
        assert_eq!(record.get("album"), Some("Blue"));
    }

    #[test]
    fn test_guarded_insert_checks_within_row_only() {
        let mut cursor = cursor(&["title", "album"], &[&[Some("Blue"), Some("Blue")]]);
        cursor.move_to_next().unwrap();

        let record = RowMaterializer::GuardedInsert
            .materialize_row(&cursor, &["title", "album"])
            .unwrap();
        assert_eq!(record.get("title"), Some("Blue"));
        assert!(!record.contains_field("album"));
    }

    #[test]
    fn test_cursor_column_names_map_to_projection_fields() {
        let mut cursor = cursor(&["DISTINCT name"], &[&[Some("Jazz")]]);
        cursor.move_to_next().unwrap();

        let record = RowMaterializer::DistinctProjection
            .materialize_row(&cursor, &["name"])
            .unwrap();
        assert_eq!(record.get("name"), Some("Jazz"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_read_error_propagates_from_row() {
        let cursor = cursor(&["name"], &[&[Some("Jazz")]]);
        let err = RowMaterializer::Plain
            .materialize_row(&cursor, &["name"])
            .unwrap_err();
        assert!(matches!(err, LibraryError::Bridge(BridgeError::QueryFault(_))));
    }

    #[test]
    fn test_request_builds_content_query() {
        let request = LoadRequest {
            uri: ContentUri::Genres,
            projection: Projection::new(&["name"]),
            selection: SelectionPredicate::starts_with("name", "Ja"),
            sort_order: "name ASC".to_string(),
            materializer: RowMaterializer::DistinctProjection,
        };

        let query = request.content_query();
        assert_eq!(query.uri, ContentUri::Genres);
        assert_eq!(query.projection, vec!["DISTINCT name"]);
        assert_eq!(query.selection.as_deref(), Some("name LIKE ?"));
        assert_eq!(query.selection_args, vec!["Ja%"]);
        assert_eq!(query.sort_order.as_deref(), Some("name ASC"));
    }
}
