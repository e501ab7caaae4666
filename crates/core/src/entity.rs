/// Marker for records persisted by the dashboard database.
///
/// Every entity is keyed by an integer identity column.
pub trait BusinessEntity: Send + Sync + 'static {
    /// Name used in log and error messages.
    const ENTITY_NAME: &'static str;

    fn entity_id(&self) -> i32;
}
