/// Identity and lifecycle fields shared by every monitoring object: name,
/// placement coordinates on the operator display, last-update timestamp and
/// the dirty flag driving display freshness.
#[derive(Clone, Debug, PartialEq)]
pub struct MonMeta {
    pub name: String,
    pub tab_id: u8,
    pub position_id: u8,
    /// Milliseconds since the epoch.
    pub update_time: i64,
    pub updated: bool,
}

impl MonMeta {
    pub fn new(name: &str) -> MonMeta {
        MonMeta {
            name: name.to_owned(),
            tab_id: 0,
            position_id: 0,
            update_time: 0,
            updated: false,
        }
    }

    /// Mark freshly written at `time` (milliseconds).
    pub fn touch(&mut self, time: i64) {
        self.update_time = time;
        self.updated = true;
    }
}
