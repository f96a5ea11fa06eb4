/// Root of an aggregate exposed through a REST collection.
///
/// Instance data (the id) plus the static names the client needs to build
/// URLs, cache tags and UI captions.
pub trait AggregateRoot {
    /// Server-assigned identifier of one record
    fn id(&self) -> &str;

    /// Collection segment of the REST path (e.g. "employee")
    fn collection_name() -> &'static str;

    /// Singular name, also used as the per-record cache tag kind
    fn element_name() -> &'static str;

    /// Plural name, also used as the collection cache tag kind
    fn list_name() -> &'static str;
}
