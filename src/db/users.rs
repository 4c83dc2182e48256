use crate::db::models::{Role, User};
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sqlx::SqlitePool;

pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    display_name: &str,
    role: Role,
) -> AppResult<User> {
    let user = User::new(email.to_string(), display_name.to_string(), role);

    sqlx::query(
        "INSERT INTO users (id, email, display_name, role, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.display_name)
    .bind(&user.role)
    .bind(&user.created_at)
    .bind(&user.updated_at)
    .execute(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &SqlitePool, user_id: &str) -> AppResult<User> {
    find_optional(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))
}

/// Like `find_by_id`, but a missing row is `None` instead of an error
pub async fn find_optional(pool: &SqlitePool, user_id: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

pub async fn update_display_name(
    pool: &SqlitePool,
    user_id: &str,
    display_name: &str,
) -> AppResult<User> {
    let result = sqlx::query("UPDATE users SET display_name = ?, updated_at = ? WHERE id = ?")
        .bind(display_name)
        .bind(Utc::now().to_rfc3339())
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "User with id '{}' not found",
            user_id
        )));
    }

    find_by_id(pool, user_id).await
}
