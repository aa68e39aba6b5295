use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    /// Records currently held by the customer store.
    pub customers: usize,
}
