/// One parsed contact record.
///
/// Every field is optional: the parser only fills in what the source record
/// actually carried, and display defaults are substituted later at the
/// export boundary. Fields are free-form text; no phone or email syntax
/// validation is performed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Full display name (`FN:` line)
    pub name: Option<String>,
    /// Telephone number (`TEL:` / `TEL;CELL` line)
    pub phone: Option<String>,
    /// Email address (`EMAIL:` line)
    pub email: Option<String>,
}

impl Contact {
    /// True when no field has been assigned since the last record boundary
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}
