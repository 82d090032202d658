#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveServiceArea {
    pub postcode: String,
    pub location_id: String,
}
