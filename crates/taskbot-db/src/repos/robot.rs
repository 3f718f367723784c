//! Robot repository: CRUD plus the transactional batch writes.

use chrono::Utc;

use taskbot_core::entities::{NewRobot, Robot};
use taskbot_core::errors::CoreError;

use crate::error::DatabaseError;
use crate::helpers::{get_day, get_flag, get_opt_string, parse_clock};
use crate::service::RobotService;
use crate::updates::robot::RobotUpdate;

const SELECT_COLS: &str =
    "id, name, start_time, end_time, color, manual, day, is_daily, description";

fn row_to_robot(row: &libsql::Row) -> Result<Robot, DatabaseError> {
    Ok(Robot {
        id: row.get(0)?,
        name: row.get(1)?,
        start_time: parse_clock(&row.get::<String>(2)?)?,
        end_time: parse_clock(&row.get::<String>(3)?)?,
        color: row.get(4)?,
        manual: get_flag(row, 5)?,
        day: get_day(row, 6)?,
        is_daily: get_flag(row, 7)?,
        description: get_opt_string(row, 8)?,
    })
}

async fn collect_robots(mut rows: libsql::Rows) -> Result<Vec<Robot>, DatabaseError> {
    let mut robots = Vec::new();
    while let Some(row) = rows.next().await? {
        robots.push(row_to_robot(&row)?);
    }
    Ok(robots)
}

/// Insert one validated draft. `is_daily` is always stored as false.
async fn insert(conn: &libsql::Connection, draft: &NewRobot) -> Result<Robot, DatabaseError> {
    let now = Utc::now().to_rfc3339();
    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO robots (name, start_time, end_time, color, manual, day, is_daily, description, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7, ?8, ?8)
                 RETURNING {SELECT_COLS}"
            ),
            libsql::params![
                draft.name.as_str(),
                draft.start_time.to_string(),
                draft.end_time.to_string(),
                draft.color.as_str(),
                i64::from(draft.manual),
                i64::from(draft.day),
                draft.description.as_deref(),
                now
            ],
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    row_to_robot(&row)
}

fn require_ids(ids: &[i64]) -> Result<(), DatabaseError> {
    if ids.is_empty() {
        return Err(CoreError::validation("at least one id is required").into());
    }
    Ok(())
}

impl RobotService {
    fn checked(&self, draft: NewRobot) -> Result<NewRobot, DatabaseError> {
        let draft = draft.normalized();
        draft.validate(self.description_limit())?;
        Ok(draft)
    }

    pub async fn list_robots(&self) -> Result<Vec<Robot>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM robots ORDER BY day, start_time, id"),
                (),
            )
            .await?;
        collect_robots(rows).await
    }

    pub async fn list_robots_for_day(&self, day: u8) -> Result<Vec<Robot>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM robots WHERE day = ?1 ORDER BY start_time, id"),
                [i64::from(day)],
            )
            .await?;
        collect_robots(rows).await
    }

    pub async fn get_robot(&self, id: i64) -> Result<Robot, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM robots WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound { id })?;
        row_to_robot(&row)
    }

    /// Insert a single record. A daily draft is stored for its own day only;
    /// use [`Self::create`] to honour the daily flag.
    pub async fn create_robot(&self, draft: NewRobot) -> Result<Robot, DatabaseError> {
        let draft = self.checked(draft)?;
        let robot = insert(self.db().conn(), &draft).await?;
        tracing::debug!(id = robot.id, name = %robot.name, day = robot.day, "created robot");
        Ok(robot)
    }

    /// Expand a draft to every day of the cycle and insert all 30 records in
    /// one transaction. Either every day is written or none is.
    pub async fn create_daily(&self, draft: NewRobot) -> Result<Vec<Robot>, DatabaseError> {
        let draft = self.checked(NewRobot { day: 1, ..draft })?;
        let expanded = draft.expand_daily();

        let tx = self.db().conn().transaction().await?;
        let mut created = Vec::with_capacity(expanded.len());
        for day_draft in &expanded {
            let result = insert(&tx, day_draft).await;
            match result {
                Ok(robot) => created.push(robot),
                Err(error) => {
                    if let Err(rollback) = tx.rollback().await {
                        tracing::warn!(%rollback, "rollback after failed daily insert failed");
                    }
                    return Err(error);
                }
            }
        }
        tx.commit().await?;

        tracing::debug!(name = %draft.name, count = created.len(), "created daily robot");
        Ok(created)
    }

    /// Create from a request draft: daily drafts expand, others insert once.
    pub async fn create(&self, draft: NewRobot) -> Result<Vec<Robot>, DatabaseError> {
        if draft.is_daily {
            self.create_daily(draft).await
        } else {
            Ok(vec![self.create_robot(draft).await?])
        }
    }

    pub async fn update_robot(
        &self,
        robot_id: i64,
        update: RobotUpdate,
    ) -> Result<Robot, DatabaseError> {
        let current = self.get_robot(robot_id).await?;
        if update.is_empty() {
            return Ok(current);
        }
        update
            .apply_to(&current)
            .to_draft()
            .validate(self.description_limit())?;

        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.clone().into());
            idx += 1;
        }
        if let Some(start_time) = update.start_time {
            sets.push(format!("start_time = ?{idx}"));
            params.push(start_time.to_string().into());
            idx += 1;
        }
        if let Some(end_time) = update.end_time {
            sets.push(format!("end_time = ?{idx}"));
            params.push(end_time.to_string().into());
            idx += 1;
        }
        if let Some(ref color) = update.color {
            sets.push(format!("color = ?{idx}"));
            params.push(color.clone().into());
            idx += 1;
        }
        if let Some(manual) = update.manual {
            sets.push(format!("manual = ?{idx}"));
            params.push(i64::from(manual).into());
            idx += 1;
        }
        if let Some(day) = update.day {
            sets.push(format!("day = ?{idx}"));
            params.push(i64::from(day).into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(if description.trim().is_empty() {
                libsql::Value::Null
            } else {
                description.clone().into()
            });
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;

        params.push(robot_id.into());
        let sql = format!("UPDATE robots SET {} WHERE id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { id: robot_id });
        }

        tracing::debug!(id = robot_id, "updated robot");
        self.get_robot(robot_id).await
    }

    pub async fn delete_robot(&self, robot_id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM robots WHERE id = ?1", [robot_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { id: robot_id });
        }
        tracing::debug!(id = robot_id, "deleted robot");
        Ok(())
    }

    /// Delete every id in one transaction. If any id is missing nothing is
    /// deleted and `NotFound` names the first missing one.
    pub async fn delete_robots(&self, ids: &[i64]) -> Result<(), DatabaseError> {
        require_ids(ids)?;
        let tx = self.db().conn().transaction().await?;
        for &id in ids {
            let result = tx.execute("DELETE FROM robots WHERE id = ?1", [id]).await;
            let affected = match result {
                Ok(affected) => affected,
                Err(error) => {
                    tx.rollback().await?;
                    return Err(error.into());
                }
            };
            if affected == 0 {
                tx.rollback().await?;
                return Err(DatabaseError::NotFound { id });
            }
        }
        tx.commit().await?;
        tracing::debug!(count = ids.len(), "deleted robot group");
        Ok(())
    }

    /// Set the manual flag on every id in one transaction.
    pub async fn set_manual(&self, ids: &[i64], manual: bool) -> Result<Vec<Robot>, DatabaseError> {
        require_ids(ids)?;
        let now = Utc::now().to_rfc3339();
        let tx = self.db().conn().transaction().await?;
        for &id in ids {
            let result = tx
                .execute(
                    "UPDATE robots SET manual = ?1, updated_at = ?2 WHERE id = ?3",
                    libsql::params![i64::from(manual), now.as_str(), id],
                )
                .await;
            let affected = match result {
                Ok(affected) => affected,
                Err(error) => {
                    tx.rollback().await?;
                    return Err(error.into());
                }
            };
            if affected == 0 {
                tx.rollback().await?;
                return Err(DatabaseError::NotFound { id });
            }
        }
        tx.commit().await?;

        let mut updated = Vec::with_capacity(ids.len());
        for &id in ids {
            updated.push(self.get_robot(id).await?);
        }
        Ok(updated)
    }

    /// Flip the manual flag of the first id and apply the new value to all ids,
    /// so a group always ends up uniform.
    pub async fn toggle_manual(&self, ids: &[i64]) -> Result<Vec<Robot>, DatabaseError> {
        require_ids(ids)?;
        let first = self.get_robot(ids[0]).await?;
        self.set_manual(ids, !first.manual).await
    }
}
