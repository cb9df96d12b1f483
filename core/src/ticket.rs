use std::fmt;

use rand::Rng;

use crate::validate::FormFields;

pub const TICKET_NUMBER_DIGITS: usize = 5;
pub const TICKET_NUMBER_LIMIT: u32 = 100_000;

/// Not unique across calls and never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketNumber(u32);

impl TicketNumber {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..TICKET_NUMBER_LIMIT))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The zero-padded digits without the `#` prefix.
    pub fn digits(&self) -> String {
        format!("{:0width$}", self.0, width = TICKET_NUMBER_DIGITS)
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits())
    }
}

/// Write-only projection rendered once when the ticket screen appears.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketView {
    pub display_name: String,
    pub display_email: String,
    /// `None` hides the GitHub row entirely.
    pub display_github: Option<String>,
    pub image_src: String,
    pub number: TicketNumber,
}

impl TicketView {
    pub fn project(fields: &FormFields, image_src: &str, number: TicketNumber) -> Self {
        let display_github = if fields.github_handle.is_empty() {
            None
        } else {
            Some(format!("@{}", fields.github_handle))
        };
        Self {
            display_name: fields.full_name.clone(),
            display_email: fields.email.clone(),
            display_github,
            image_src: image_src.to_string(),
            number,
        }
    }
}
