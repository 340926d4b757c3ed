use std::str::FromStr;

use rusqlite::{params, params_from_iter, Connection, Row};
use tracing::{instrument, warn};

use taskdesk_types::{OrderDirection, OrderField, Task, TaskFilter, TaskOrder};

use crate::database::Database;
use crate::errlog::ErrorLog;
use crate::error::StoreError;

const COLUMNS: &str = "id, title, description, priority, status, created_at";

/// Repository for the `tasks` table. Storage faults never escape: they are
/// appended to the error log and collapsed into the documented safe default
/// (`None`, `false` or an empty list).
pub struct TaskRepo {
    db: Database,
    log: ErrorLog,
}

impl TaskRepo {
    pub fn new(db: Database, log: ErrorLog) -> Self {
        Self { db, log }
    }

    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: i64) -> Option<Task> {
        match self.try_find_by_id(id) {
            Ok(found) => found,
            Err(err) => {
                self.log
                    .fail_with("find_by_id", "database error while fetching task", &err, None)
            }
        }
    }

    #[instrument(skip(self, task))]
    pub fn insert(&self, task: &Task) -> Option<i64> {
        match self.try_insert(task) {
            Ok(id) => Some(id),
            Err(err) => {
                self.log
                    .fail_with("insert", "database error while inserting task", &err, None)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn list(&self, order: Option<TaskOrder>) -> Vec<Task> {
        match self.try_list(order) {
            Ok(tasks) => tasks,
            Err(err) => self.log.fail_with(
                "list",
                "database error while listing tasks",
                &err,
                Vec::new(),
            ),
        }
    }

    /// True iff at least one row changed. A task that was never persisted
    /// has no identifier to address, so nothing is written.
    #[instrument(skip(self, task), fields(id = ?task.id))]
    pub fn update(&self, task: &Task) -> bool {
        let Some(id) = task.id else {
            warn!("refusing to update a task without an id");
            return false;
        };

        match self.try_update(id, task) {
            Ok(changed) => changed,
            Err(err) => {
                self.log
                    .fail_with("update", "database error while updating task", &err, false)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> bool {
        match self.try_delete(id) {
            Ok(removed) => removed,
            Err(err) => {
                self.log
                    .fail_with("delete", "database error while deleting task", &err, false)
            }
        }
    }

    #[instrument(skip(self))]
    pub fn filter(&self, filter: &TaskFilter, order: Option<TaskOrder>) -> Vec<Task> {
        match self.try_filter(filter, order) {
            Ok(tasks) => tasks,
            Err(err) => self.log.fail_with(
                "filter",
                "database error while filtering tasks",
                &err,
                Vec::new(),
            ),
        }
    }

    fn try_find_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"))?;
            let mut rows = stmt.query([id])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_task(row)?)),
                None => Ok(None),
            }
        })
    }

    fn try_insert(&self, task: &Task) -> Result<i64, StoreError> {
        self.db.with_tx(|tx| {
            tx.execute(
                "INSERT INTO tasks (title, description, priority, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    task.title.as_str(),
                    task.description,
                    task.priority.to_string(),
                    task.status.to_string(),
                    task.created_at,
                ],
            )?;
            Ok(tx.last_insert_rowid())
        })
    }

    fn try_list(&self, order: Option<TaskOrder>) -> Result<Vec<Task>, StoreError> {
        let sql = format!("SELECT {COLUMNS} FROM tasks{}", order_clause(order));
        self.db.with_conn(|conn| collect_tasks(conn, &sql, params![]))
    }

    fn try_update(&self, id: i64, task: &Task) -> Result<bool, StoreError> {
        self.db.with_tx(|tx| {
            let changed = tx.execute(
                "UPDATE tasks SET title = ?1, description = ?2, priority = ?3, status = ?4
                 WHERE id = ?5",
                params![
                    task.title.as_str(),
                    task.description,
                    task.priority.to_string(),
                    task.status.to_string(),
                    id,
                ],
            )?;
            Ok(changed > 0)
        })
    }

    fn try_delete(&self, id: i64) -> Result<bool, StoreError> {
        self.db
            .with_tx(|tx| Ok(tx.execute("DELETE FROM tasks WHERE id = ?1", [id])? > 0))
    }

    fn try_filter(
        &self,
        filter: &TaskFilter,
        order: Option<TaskOrder>,
    ) -> Result<Vec<Task>, StoreError> {
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(title) = &filter.title_contains {
            values.push(format!("%{}%", escape_like(title)));
            clauses.push(format!("title LIKE ?{} ESCAPE '\\'", values.len()));
        }
        if let Some(priority) = filter.priority {
            values.push(priority.to_string());
            clauses.push(format!("priority = ?{}", values.len()));
        }
        if let Some(status) = filter.status {
            values.push(status.to_string());
            clauses.push(format!("status = ?{}", values.len()));
        }

        let mut sql = format!("SELECT {COLUMNS} FROM tasks");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(&order_clause(order));

        self.db
            .with_conn(|conn| collect_tasks(conn, &sql, params_from_iter(values.iter())))
    }
}

// Only these fixed tokens are ever interpolated into query text; all values
// go through parameter binding.
fn order_clause(order: Option<TaskOrder>) -> String {
    match order {
        Some(order) => {
            let column = match order.field {
                OrderField::Title => "title",
                OrderField::Priority => "priority",
                OrderField::Status => "status",
                OrderField::CreatedAt => "created_at",
            };
            let direction = match order.direction {
                OrderDirection::Asc => "ASC",
                OrderDirection::Desc => "DESC",
            };
            format!(" ORDER BY {column} {direction}")
        }
        None => String::new(),
    }
}

fn collect_tasks<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Task>, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut tasks = Vec::new();
    while let Some(row) = rows.next()? {
        tasks.push(row_to_task(row)?);
    }
    Ok(tasks)
}

fn row_to_task(row: &Row<'_>) -> Result<Task, StoreError> {
    let title: String = get(row, 1, "title")?;
    let priority: String = get(row, 3, "priority")?;
    let status: String = get(row, 4, "status")?;

    Ok(Task {
        id: Some(get(row, 0, "id")?),
        title: parse_field(&title, "title")?,
        description: get(row, 2, "description")?,
        priority: parse_field(&priority, "priority")?,
        status: parse_field(&status, "status")?,
        created_at: get(row, 5, "created_at")?,
    })
}

fn get<T: rusqlite::types::FromSql>(
    row: &Row<'_>,
    idx: usize,
    column: &'static str,
) -> Result<T, StoreError> {
    row.get(idx).map_err(|e| StoreError::CorruptRow {
        column,
        detail: e.to_string(),
    })
}

fn parse_field<T: FromStr>(raw: &str, column: &'static str) -> Result<T, StoreError> {
    raw.parse().map_err(|_| StoreError::CorruptRow {
        column,
        detail: format!("unknown value: {raw}"),
    })
}

fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
