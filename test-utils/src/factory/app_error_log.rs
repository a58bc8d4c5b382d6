use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Appends an entry to the procedure error journal.
///
/// # Arguments
/// - `db` - Database connection
/// - `number` - Error number
/// - `procedure` - Name of the failing procedure
/// - `line` - Line the error was raised on
/// - `message` - Error text
pub async fn create_app_error(
    db: &DatabaseConnection,
    number: i32,
    procedure: &str,
    line: i32,
    message: &str,
) -> Result<entity::app_error_log::Model, DbErr> {
    entity::app_error_log::ActiveModel {
        error_number: ActiveValue::Set(Some(number)),
        error_message: ActiveValue::Set(Some(message.to_string())),
        error_procedure: ActiveValue::Set(Some(procedure.to_string())),
        error_line: ActiveValue::Set(Some(line)),
        ..Default::default()
    }
    .insert(db)
    .await
}
