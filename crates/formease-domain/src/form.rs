//! FormState module - the caller-owned merge target

/// The live form a caller owns
///
/// Field names mirror the extraction contract, plus caller-specific state
/// (the account-creation flag) that the merge logic never touches. The
/// Reconciler mutates this in place; it never replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// First name field
    pub first_name: String,

    /// Surname field
    pub surname: String,

    /// Address field (street and city, no postcode)
    pub address: String,

    /// Postcode field
    pub postcode: String,

    /// Email field
    pub email: String,

    /// Favourite time-of-day field
    pub favorite_time_of_day: String,

    /// Whether the user asked for a login account. Outside the extraction
    /// contract; merging must leave it alone.
    pub create_login: bool,
}
