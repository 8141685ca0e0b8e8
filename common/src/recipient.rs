/// Who the order is for, when it is not the sender.
///
/// The recipient input holds either a handle (`@name`) or a numeric id;
/// a leading `@` decides which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    Username(String),
    Id(String),
}

impl Recipient {
    /// Parse the recipient input. Empty input (or a bare `@`) means no recipient.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match input.strip_prefix('@') {
            Some(name) => {
                let name = name.trim();
                (!name.is_empty()).then(|| Self::Username(name.to_string()))
            }
            None => Some(Self::Id(input.to_string())),
        }
    }

    /// Multipart field name carrying this recipient.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Username(_) => "recipientUsername",
            Self::Id(_) => "recipientId",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Username(name) => name,
            Self::Id(id) => id,
        }
    }
}
